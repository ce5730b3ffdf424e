use std::process::{Command, Output};

use check_wp_status::{
    run_check, Config, PerfdataLabels, ProbeError, Severity, Thresholds,
};

const HEALTHY_BODY: &str = r#"{
    "status": "ok",
    "wp_status_code": 200,
    "database_access": 1,
    "plugin_update_count": 0,
    "theme_update_count": 0,
    "core_update_available": false,
    "unapproved_comments": 0,
    "response_time_ms": 0.5,
    "current_script_memory_mb": 3.2,
    "peak_script_memory_mb": 4.0,
    "wp_version": "6.4.2",
    "php_version": "8.2.10",
    "db_query_count": 17
}"#;

const PERF_KEYS: [&str; 9] = [
    "plugin_update_count=",
    "theme_update_count=",
    "core_update_available=",
    "theme_update_count=",
    "response_time_ms=",
    "peak_script_memory_mb=",
    "wp_version=",
    "php_version=",
    "db_query_count=",
];

fn config_for(url: String) -> Config {
    Config {
        url,
        credential: "s3cret".to_string(),
        thresholds: Thresholds::default(),
        perfdata_labels: PerfdataLabels::Legacy,
    }
}

fn run_binary(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_check_wp_status"))
        .args(args)
        .env_remove("CHECK_WP_STATUS_URL")
        .env_remove("CHECK_WP_STATUS_PASSWORD")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run check_wp_status")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// Every value within its default threshold: OK line, no messages.
#[tokio::test]
async fn test_healthy_site_reports_ok() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/wp-json/status")
        .match_header("authorization", "s3cret")
        .with_header("content-type", "application/json")
        .with_body(HEALTHY_BODY)
        .create_async()
        .await;

    let report = run_check(&config_for(format!("{}/wp-json/status", server.url())))
        .await
        .unwrap();
    let line = report.to_string();

    assert_eq!(report.severity(), Severity::Ok);
    assert!(line.starts_with("OK | "));
    for key in PERF_KEYS {
        assert!(line.contains(key), "missing {} in {}", key, line);
    }
    assert_eq!(report.perfdata.get("db_query_count"), Some("17"));
    assert_eq!(report.perfdata.get("peak_script_memory_mb"), Some("4.000000"));
    assert_eq!(report.perfdata.get("wp_version"), Some("6.4.2"));
    mock.assert_async().await;
}

// Plugins and memory both exceeded: both messages, plugin first, all before `|`.
#[tokio::test]
async fn test_multiple_violations_reported_in_order() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/")
        .with_body(r#"{"plugin_update_count": 5, "peak_script_memory_mb": 20.0}"#)
        .create_async()
        .await;

    let mut config = config_for(server.url());
    config.thresholds.peak_memory_mb = 6.0;

    let report = run_check(&config).await.unwrap();
    let line = report.to_string();

    assert_eq!(report.exit_code(), 1);
    assert!(line.starts_with("WARNING "));
    let plugin = line.find("Plugin updates exceed threshold (available: 5)").unwrap();
    let memory = line
        .find("Memory exceeds threshold (used: 20.00 MB, threshold: 6.00 MB)")
        .unwrap();
    let separator = line.find('|').unwrap();
    assert!(plugin < memory);
    assert!(memory < separator);
}

// A proxy error page instead of JSON.
#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/")
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let err = run_check(&config_for(server.url())).await.unwrap_err();

    assert!(matches!(err, ProbeError::Decode(_)));
    assert_eq!(err.exit_code(), 2);
}

// An empty REST list is not a status document and must not pass as OK.
#[tokio::test]
async fn test_array_body_is_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/")
        .with_body("[]")
        .create_async()
        .await;

    let err = run_check(&config_for(server.url())).await.unwrap_err();

    assert!(matches!(err, ProbeError::Decode(_)));
    assert_eq!(err.exit_code(), 2);
}

// The HTTP status never gates the check: a 500 whose body is still a valid
// document is evaluated like any other response.
#[tokio::test]
async fn test_error_status_with_valid_body_is_evaluated() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/")
        .with_status(500)
        .with_body(r#"{"core_update_available": true}"#)
        .create_async()
        .await;

    let report = run_check(&config_for(server.url())).await.unwrap();
    assert_eq!(report.severity(), Severity::Warning);
    assert!(report.to_string().contains("Core update available "));
}

#[test]
fn test_binary_help_exits_zero_without_request() {
    let output = run_binary(&["--help"]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0));
    for flag in ["-H", "-P", "-Z", "-Y", "-X", "-W", "-V", "-U"] {
        assert!(stdout.contains(flag), "help is missing {}", flag);
    }
}

// Scheduler only reads stdout, so the diagnostic goes there; usage goes to stderr.
#[test]
fn test_binary_missing_url_is_critical() {
    let output = run_binary(&["-P", "s3cret"]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with("ERROR: The -H (URL)"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

// The mock expects zero hits: config errors stop before any network activity.
#[test]
fn test_binary_missing_credential_makes_no_request() {
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/").expect(0).create();

    let output = run_binary(&["-H", &server.url()]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout_of(&output).starts_with("ERROR: "));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
    mock.assert();
}

#[test]
fn test_binary_invalid_threshold_is_critical() {
    let output = run_binary(&["-H", "http://127.0.0.1:1/", "-P", "pw", "-U", "lots"]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with("ERROR: "));
    assert!(stdout.contains("lots"));
}

// Full run through the binary with the corrected perfdata label.
#[test]
fn test_binary_end_to_end_warning() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/status")
        .match_header("authorization", "raw-secret")
        .with_body(r#"{"unapproved_comments": 4, "response_time_ms": 2.5}"#)
        .create();

    let url = format!("{}/status", server.url());
    let output = run_binary(&["-H", &url, "-P", "raw-secret", "-W", "3", "--corrected-perfdata"]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with(
        "WARNING 4 Unapproved comments exceed 3 threshold \
         Response time (2.50) exceeds threshold (1.00) | "
    ));
    assert!(stdout.contains("unapproved_comments=4"));
    assert!(stdout.contains("response_time_ms=2.500000"));
    mock.assert();
}

#[test]
fn test_binary_malformed_body_prints_single_diagnostic() {
    let mut server = mockito::Server::new();
    let _mock = server.mock("GET", "/").with_body("not json").create();

    let output = run_binary(&["-H", &server.url(), "-P", "pw"]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with("Error decoding status JSON:"));
    assert!(!stdout.contains('|'));
}

// Nothing listens on port 1.
#[test]
fn test_binary_unreachable_endpoint_is_critical() {
    let output = run_binary(&["-H", "http://127.0.0.1:1/status", "-P", "pw"]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout.starts_with("Error fetching URL:"));
}
