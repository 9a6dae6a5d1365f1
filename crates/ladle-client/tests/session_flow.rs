//! Integration tests for login/register/logout against a mock server.

use std::sync::Arc;

use ladle_client::{
    ApiClient, Config, KeyValueStore, MemoryStore, SessionManager, SessionState, TOKEN_KEY,
    USER_KEY,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn manager_for(server: &MockServer, store: &Arc<MemoryStore>) -> SessionManager {
    let config = Config {
        api_url: server.uri(),
        ..Config::default()
    };
    let store: Arc<dyn KeyValueStore> = Arc::clone(store) as Arc<dyn KeyValueStore>;
    let api = Arc::new(ApiClient::new(&config, Arc::clone(&store)).unwrap());
    SessionManager::new(api, store)
}

#[tokio::test]
async fn test_login_persists_token_and_user() {
    let server = MockServer::start().await;
    let store = Arc::new(MemoryStore::new());

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({ "email": "ana@example.com", "password": "hunter2" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "token": "tok-1",
                "_id": "u1",
                "name": "Ana",
                "email": "ana@example.com",
            },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let manager = manager_for(&server, &store);
    manager.hydrate();

    let outcome = manager.login("ana@example.com", "hunter2").await;
    assert!(outcome.is_success());
    assert_eq!(manager.state(), SessionState::Authenticated);

    // Memory and storage hold the identical token and user.
    assert_eq!(manager.token().as_deref(), Some("tok-1"));
    assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some("tok-1"));

    let stored_user: serde_json::Value =
        serde_json::from_str(&store.get(USER_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(stored_user["_id"], "u1");
    assert_eq!(stored_user["name"], "Ana");
    // The token is split out of the user object, not duplicated into it.
    assert!(stored_user.get("token").is_none());
    assert_eq!(manager.user().unwrap().as_value(), &stored_user);

    manager.logout();
    assert_eq!(manager.state(), SessionState::Anonymous);
    assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
    assert_eq!(store.get(USER_KEY).unwrap(), None);
}

#[tokio::test]
async fn test_login_rejection_carries_server_message() {
    let server = MockServer::start().await;
    let store = Arc::new(MemoryStore::new());

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Invalid credentials",
        })))
        .mount(&server)
        .await;

    let manager = manager_for(&server, &store);
    manager.hydrate();

    let outcome = manager.login("ana@example.com", "wrong").await;
    assert_eq!(
        outcome,
        ladle_client::AuthOutcome::Failure {
            message: "Invalid credentials".to_string()
        }
    );
    assert_eq!(manager.state(), SessionState::Anonymous);
    assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
}

#[tokio::test]
async fn test_login_transport_failure_is_an_outcome_not_a_panic() {
    let server = MockServer::start().await;
    let store = Arc::new(MemoryStore::new());

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": false,
            "message": "database unavailable",
        })))
        .mount(&server)
        .await;

    let manager = manager_for(&server, &store);
    let outcome = manager.login("ana@example.com", "hunter2").await;

    let ladle_client::AuthOutcome::Failure { message } = outcome else {
        panic!("expected failure outcome");
    };
    assert_eq!(message, "HTTP 500: database unavailable");
}

#[tokio::test]
async fn test_login_without_token_in_payload_fails_generically() {
    let server = MockServer::start().await;
    let store = Arc::new(MemoryStore::new());

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "_id": "u1", "name": "Ana" },
        })))
        .mount(&server)
        .await;

    let manager = manager_for(&server, &store);
    let outcome = manager.login("ana@example.com", "hunter2").await;
    assert_eq!(
        outcome,
        ladle_client::AuthOutcome::Failure {
            message: "Login failed".to_string()
        }
    );
}

#[tokio::test]
async fn test_register_establishes_session() {
    let server = MockServer::start().await;
    let store = Arc::new(MemoryStore::new());

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "token": "tok-new", "_id": "u2", "name": "Bo" },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let manager = manager_for(&server, &store);
    let outcome = manager
        .register(&json!({ "name": "Bo", "email": "bo@example.com", "password": "pw" }))
        .await;

    assert!(outcome.is_success());
    assert_eq!(manager.state(), SessionState::Authenticated);
    assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some("tok-new"));
    assert_eq!(manager.user().unwrap().id(), Some("u2"));
}
