//! Error scenario integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn hms_notify_bin(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hms-notify").expect("binary is built");
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_DATA_HOME", home.path().join("data"))
        .env_remove("HMS_NOTIFY_BASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn unreachable_server_fails_the_check() {
    let home = TempDir::new().unwrap();
    hms_notify_bin(&home)
        .args(["--toast", "none", "--no-sound", "--base-url", "http://127.0.0.1:9"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("request failed"));
}

#[test]
fn config_get_unknown_key() {
    let home = TempDir::new().unwrap();
    hms_notify_bin(&home)
        .args(["config", "get", "unknown_key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key").and(predicate::str::contains("base_url")));
}

#[test]
fn config_set_unknown_key() {
    let home = TempDir::new().unwrap();
    hms_notify_bin(&home)
        .args(["config", "set", "unknown_key", "value"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn config_set_invalid_interval() {
    let home = TempDir::new().unwrap();
    hms_notify_bin(&home)
        .args(["config", "set", "poll_interval", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("poll_interval"));
}

#[test]
fn config_set_invalid_toast_backend() {
    let home = TempDir::new().unwrap();
    hms_notify_bin(&home)
        .args(["config", "set", "toast", "popup"])
        .assert()
        .failure();
}

#[test]
fn config_init_twice_fails() {
    let home = TempDir::new().unwrap();
    hms_notify_bin(&home).args(["config", "init"]).assert().success();
    hms_notify_bin(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn invalid_poll_interval_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    hms_notify_bin(&home)
        .args(["--daemon", "--poll-interval", "soon"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid poll-interval"));
}

#[test]
fn poll_interval_without_daemon_is_rejected() {
    let home = TempDir::new().unwrap();
    hms_notify_bin(&home)
        .args(["--poll-interval", "5s"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn corrupt_state_file_fails_state_show() {
    let home = TempDir::new().unwrap();
    let state = home.path().join("state.json");
    std::fs::write(&state, "{not json").unwrap();

    hms_notify_bin(&home)
        .args(["state", "show", "--state-file"])
        .arg(&state)
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt"));
}
