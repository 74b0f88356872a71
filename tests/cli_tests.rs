//! CLI integration tests

use std::process::{Command, Output};

use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn hms_notify_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hms-notify"))
}

/// Binary with config and data dirs pointed at `home`
fn isolated_bin(home: &TempDir) -> Command {
    let mut cmd = hms_notify_bin();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_DATA_HOME", home.path().join("data"))
        .env_remove("HMS_NOTIFY_BASE_URL")
        .env_remove("HMS_NOTIFY_SESSION_ID")
        .env_remove("HMS_NOTIFY_CSRF_TOKEN")
        .env_remove("RUST_LOG");
    cmd
}

/// Run a command off the async runtime so a mock server can answer it
async fn run(mut cmd: Command) -> Output {
    tokio::task::spawn_blocking(move || cmd.output().expect("Failed to execute command"))
        .await
        .expect("Command task panicked")
}

#[test]
fn help_output() {
    let output = hms_notify_bin()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("notifications"));
    assert!(stdout.contains("--base-url"));
    assert!(stdout.contains("--daemon"));
    assert!(stdout.contains("--toast"));
    assert!(stdout.contains("--no-sound"));
    assert!(stdout.contains("--badge-file"));
}

#[test]
fn version_output() {
    let output = hms_notify_bin()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("hms-notify"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_command() {
    let home = TempDir::new().unwrap();
    let output = isolated_bin(&home)
        .args(["config", "path"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("hms-notify"));
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_help() {
    let output = hms_notify_bin()
        .args(["config", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("init"));
    assert!(stdout.contains("set"));
    assert!(stdout.contains("get"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("path"));
}

#[test]
fn config_set_then_get() {
    let home = TempDir::new().unwrap();

    let set = isolated_bin(&home)
        .args(["config", "set", "poll_interval", "10s"])
        .output()
        .expect("Failed to execute command");
    assert!(set.status.success());

    let get = isolated_bin(&home)
        .args(["config", "get", "poll_interval"])
        .output()
        .expect("Failed to execute command");
    assert!(get.status.success());
    assert_eq!(String::from_utf8_lossy(&get.stdout).trim(), "10s");
}

#[test]
fn config_get_masks_credentials() {
    let home = TempDir::new().unwrap();

    let set = isolated_bin(&home)
        .args(["config", "set", "session_id", "abcdefghijklmnop"])
        .output()
        .expect("Failed to execute command");
    assert!(set.status.success());

    let get = isolated_bin(&home)
        .args(["config", "get", "session_id"])
        .output()
        .expect("Failed to execute command");
    let stdout = String::from_utf8_lossy(&get.stdout);
    assert_eq!(stdout.trim(), "abcd...mnop");
}

#[test]
fn state_show_and_reset() {
    let home = TempDir::new().unwrap();
    let state = home.path().join("state.json");
    std::fs::write(&state, r#"{"last_notification_id":"42"}"#).unwrap();

    let show = isolated_bin(&home)
        .args(["state", "show", "--state-file"])
        .arg(&state)
        .output()
        .expect("Failed to execute command");
    assert!(show.status.success());
    assert!(String::from_utf8_lossy(&show.stdout).contains("42"));

    let reset = isolated_bin(&home)
        .args(["state", "reset", "--state-file"])
        .arg(&state)
        .output()
        .expect("Failed to execute command");
    assert!(reset.status.success());

    let content = std::fs::read_to_string(&state).unwrap();
    assert!(!content.contains("42"));
}

#[test]
fn toast_with_none_backend_succeeds() {
    let home = TempDir::new().unwrap();
    let output = isolated_bin(&home)
        .args(["toast", "Hi", "Test", "--toast", "none"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("disabled"));
}

#[tokio::test(flavor = "multi_thread")]
async fn check_presents_new_notification_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/notifications/unread/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "unread_count": 1,
            "latest_id": 42,
            "latest_title": "Hi",
            "latest_message": "Test",
            "latest_type": "info"
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/notifications/42/read/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let state = home.path().join("state.json");
    let badge = home.path().join("unread");

    let check = || {
        let mut cmd = isolated_bin(&home);
        cmd.args(["--toast", "none", "--no-sound", "--base-url"])
            .arg(server.uri())
            .arg("--state-file")
            .arg(&state)
            .arg("--badge-file")
            .arg(&badge);
        cmd
    };

    let first = run(check()).await;
    assert!(first.status.success(), "{}", String::from_utf8_lossy(&first.stderr));
    assert!(String::from_utf8_lossy(&first.stdout).contains("new notification 42"));
    assert!(std::fs::read_to_string(&state).unwrap().contains("42"));
    assert_eq!(std::fs::read_to_string(&badge).unwrap(), "1");

    // Same id again: badge only, no second mark-read
    let second = run(check()).await;
    assert!(second.status.success());
    assert!(String::from_utf8_lossy(&second.stdout).contains("nothing new"));
}

#[tokio::test(flavor = "multi_thread")]
async fn check_when_logged_out_touches_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/notifications/unread/"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let state = home.path().join("state.json");
    let badge = home.path().join("unread");

    let mut cmd = isolated_bin(&home);
    cmd.args(["--toast", "none", "--no-sound", "--base-url"])
        .arg(server.uri())
        .arg("--state-file")
        .arg(&state)
        .arg("--badge-file")
        .arg(&badge);

    let output = run(cmd).await;
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("not logged in"));
    assert!(!state.exists());
    assert!(!badge.exists());
}
