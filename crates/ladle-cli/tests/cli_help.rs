//! Basic CLI surface tests, no network.

use assert_cmd::Command;
use predicates::prelude::*;

/// Test: top-level help lists the subcommands.
#[test]
fn test_help_lists_subcommands() {
    Command::cargo_bin("ladle")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("recipes"))
        .stdout(predicate::str::contains("favorites"))
        .stdout(predicate::str::contains("meal-plans"));
}

/// Test: whoami without a session reports anonymous.
#[test]
fn test_whoami_anonymous() {
    let temp = tempfile::tempdir().unwrap();

    Command::cargo_bin("ladle")
        .unwrap()
        .env("LADLE_HOME", temp.path())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in."));
}

/// Test: logout without a session is a friendly no-op.
#[test]
fn test_logout_when_not_logged_in() {
    let temp = tempfile::tempdir().unwrap();

    Command::cargo_bin("ladle")
        .unwrap()
        .env("LADLE_HOME", temp.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in."));
}

/// Test: missing required arguments fail with usage output.
#[test]
fn test_login_requires_credentials() {
    Command::cargo_bin("ladle")
        .unwrap()
        .arg("login")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--email"));
}
