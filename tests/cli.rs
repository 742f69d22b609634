use assert_cmd::Command;
use predicates::str::contains;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".class-monitor").join("config.json")
}

const BINARY_NAME: &str = "class-monitor";

/// Command isolated from the developer's own config and environment
fn monitor_cmd(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path()).env_remove("CLASS_MONITOR_URL");
    cmd
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Live classroom attention dashboard"))
        .stdout(contains("watch"))
        .stdout(contains("end-class"));
}

#[test]
/// set-server should write the config file under $HOME.
fn set_server_creates_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    monitor_cmd(&tmp)
        .args(["set-server", "http://10.84.87.149:8000", "--interval-ms", "1500"])
        .assert()
        .success()
        .stdout(contains("Saved server http://10.84.87.149:8000"));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config_path).unwrap()).unwrap();
    assert_eq!(saved["server_url"], "http://10.84.87.149:8000");
    assert_eq!(saved["poll_interval_ms"], 1500);
}

#[test]
/// A failed fetch should exit non-zero and explain which server was tried.
fn once_reports_unreachable_server() {
    let tmp = temp_home_dir();
    monitor_cmd(&tmp)
        .args(["once", "--server-url", "http://127.0.0.1:9"])
        .assert()
        .failure()
        .stdout(contains("Could not talk to the monitor server at http://127.0.0.1:9"));
}

#[tokio::test(flavor = "multi_thread")]
/// once should print the table and the four counters.
async fn once_prints_snapshot_and_counts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/students"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "s1": {"ear": 0.25, "fatigue": 10},
            "s2": {"ear": 0.20, "fatigue": 45},
            "s3": {"ear": 0.15, "fatigue": 80}
        })))
        .mount(&server)
        .await;

    let tmp = temp_home_dir();
    monitor_cmd(&tmp)
        .args(["once", "--server-url", &server.uri()])
        .assert()
        .success()
        .stdout(contains("Passive"))
        .stdout(contains("Distracted"))
        .stdout(contains("total: 3"))
        .stdout(contains("active: 1"))
        .stdout(contains("passive: 1"))
        .stdout(contains("distracted: 1"));
}

#[tokio::test(flavor = "multi_thread")]
/// The server URL saved by set-server is used when no flag is given.
async fn once_uses_saved_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/students"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let tmp = temp_home_dir();
    monitor_cmd(&tmp)
        .args(["set-server", &server.uri()])
        .assert()
        .success();

    monitor_cmd(&tmp)
        .arg("once")
        .assert()
        .success()
        .stdout(contains("total: 0"));
}

#[tokio::test(flavor = "multi_thread")]
/// end-class should print the session report.
async fn end_class_prints_report() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/end_class"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "students": {
                "a1": {"name": "Avery", "status": "ACTIVE", "fatigue": 20}
            },
            "summary": {
                "class_average_fatigue": 20.0,
                "engagement_score": 80.0,
                "total_students": 1
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tmp = temp_home_dir();
    monitor_cmd(&tmp)
        .args(["end-class", "--server-url", &server.uri()])
        .assert()
        .success()
        .stdout(contains("Avery"))
        .stdout(contains("Engagement score:  80.0"));
}

#[test]
/// A bare host:port is saved as an http URL.
fn set_server_adds_missing_scheme() {
    let tmp = temp_home_dir();
    monitor_cmd(&tmp)
        .args(["set-server", "10.84.87.149:8000"])
        .assert()
        .success()
        .stdout(contains("Saved server http://10.84.87.149:8000"));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(config_file_path(&tmp)).unwrap()).unwrap();
    assert_eq!(saved["server_url"], "http://10.84.87.149:8000");
}

#[test]
/// An address that cannot be a server URL is rejected and nothing is saved.
fn set_server_rejects_invalid_address() {
    let tmp = temp_home_dir();
    monitor_cmd(&tmp)
        .args(["set-server", "ftp://10.84.87.149"])
        .assert()
        .failure()
        .stdout(contains("Invalid server address"));
    assert!(!config_file_path(&tmp).exists());
}

#[tokio::test(flavor = "multi_thread")]
/// An unreadable config file is reported on stderr and defaults are used.
async fn corrupt_config_is_reported_on_stderr() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/students"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "not json").unwrap();

    monitor_cmd(&tmp)
        .env_remove("RUST_LOG")
        .args(["once", "--server-url", &server.uri()])
        .assert()
        .success()
        .stderr(contains("Ignoring unreadable config file"))
        .stdout(contains("total: 0"));
}

#[tokio::test(flavor = "multi_thread")]
/// Headless watch prints each polled snapshot with its counters until stopped.
async fn watch_headless_prints_snapshots() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/students"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "s1": {"ear": 0.25, "fatigue": 10, "head_status": "ROTATED"},
            "s2": {"ear": 0.15, "fatigue": 80}
        })))
        .mount(&server)
        .await;

    let tmp = temp_home_dir();
    // The loop only ends on Ctrl+C, so the timeout stops it
    let assert = monitor_cmd(&tmp)
        .args([
            "watch",
            "--headless",
            "--server-url",
            &server.uri(),
            "--interval-ms",
            "200",
        ])
        .timeout(Duration::from_secs(3))
        .assert();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("Starting headless mode"), "{stdout}");
    assert!(stdout.matches("--- ").count() >= 2, "{stdout}");
    assert!(stdout.contains("ROTATED"), "{stdout}");
    assert!(stdout.contains("total: 2"), "{stdout}");
    assert!(stdout.contains("active: 1"), "{stdout}");
    assert!(stdout.contains("distracted: 1"), "{stdout}");

    let requests = server.received_requests().await.unwrap();
    assert!(requests.len() >= 2);
}
