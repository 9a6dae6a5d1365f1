//! End-to-end login/logout through the binary against a mock server.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test: login persists the credentials file; whoami and logout observe it.
#[tokio::test]
async fn test_login_whoami_logout_cycle() {
    let server = MockServer::start().await;
    let temp = tempdir().unwrap();
    let credentials = temp.path().join("credentials.json");

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "token": "tok-cli", "_id": "u1", "name": "Ana" },
        })))
        .expect(1)
        .mount(&server)
        .await;

    Command::cargo_bin("ladle")
        .unwrap()
        .env("LADLE_HOME", temp.path())
        .env("LADLE_API_URL", server.uri())
        .args(["login", "--email", "ana@example.com", "--password", "hunter2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as Ana"));

    assert!(credentials.exists(), "credentials.json should exist");
    let contents = fs::read_to_string(&credentials).unwrap();
    assert!(contents.contains("tok-cli"));
    assert!(contents.contains("recipe_app_user"));

    Command::cargo_bin("ladle")
        .unwrap()
        .env("LADLE_HOME", temp.path())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ana"));

    Command::cargo_bin("ladle")
        .unwrap()
        .env("LADLE_HOME", temp.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out."));

    let contents = fs::read_to_string(&credentials).unwrap();
    assert!(!contents.contains("tok-cli"), "token should be removed");
}

/// Test: a rejected login surfaces the server message and stores nothing.
#[tokio::test]
async fn test_login_rejection_shows_message() {
    let server = MockServer::start().await;
    let temp = tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Invalid credentials",
        })))
        .mount(&server)
        .await;

    Command::cargo_bin("ladle")
        .unwrap()
        .env("LADLE_HOME", temp.path())
        .env("LADLE_API_URL", server.uri())
        .args(["login", "--email", "ana@example.com", "--password", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid credentials"));

    assert!(!temp.path().join("credentials.json").exists());
}

/// Test: favorites toggle round-trips through the binary.
#[tokio::test]
async fn test_favorites_toggle_via_cli() {
    let server = MockServer::start().await;
    let temp = tempdir().unwrap();

    // Seed a session on disk so the toggle goes out authenticated.
    fs::create_dir_all(temp.path()).unwrap();
    fs::write(
        temp.path().join("credentials.json"),
        json!({
            "recipe_app_token": "tok",
            "recipe_app_user": "{\"_id\":\"u1\",\"name\":\"Ana\"}",
        })
        .to_string(),
    )
    .unwrap();

    Mock::given(method("GET"))
        .and(path("/users/favorites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [],
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/users/favorites/r1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/recipes/r1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "_id": "r1", "name": "Pesto" },
        })))
        .expect(1)
        .mount(&server)
        .await;

    Command::cargo_bin("ladle")
        .unwrap()
        .env("LADLE_HOME", temp.path())
        .env("LADLE_API_URL", server.uri())
        .args(["favorites", "toggle", "r1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added r1 to favorites."));
}
