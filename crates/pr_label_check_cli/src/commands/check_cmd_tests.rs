use super::*;
use pr_label_check_core::PolicyViolation;
use serde_json::json;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// Test Helper Functions
// =============================================================================

fn args_for(mock_server: &MockServer, number: u64) -> CheckArgs {
    CheckArgs {
        token: Some("test-token".to_string()),
        repository: Some("test-owner/test-repo".to_string()),
        number: Some(number),
        api_url: Some(mock_server.uri()),
        propagation_delay_ms: Some(0),
        ..Default::default()
    }
}

fn labels_json(names: &[&str]) -> serde_json::Value {
    json!(names
        .iter()
        .map(|name| json!({ "id": 1, "name": name, "color": "ededed" }))
        .collect::<Vec<_>>())
}

async fn mount_labels(mock_server: &MockServer, names: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/repos/test-owner/test-repo/issues/5/labels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(labels_json(names)))
        .mount(mock_server)
        .await;
}

// =============================================================================
// resolve_pull_request
// =============================================================================

#[test]
fn test_resolve_pull_request_from_arguments() {
    let args = CheckArgs {
        repository: Some("octocat/hello-world".to_string()),
        number: Some(42),
        ..Default::default()
    };

    let pr = resolve_pull_request(&args).unwrap();

    assert_eq!(pr, PullRequestRef::new("octocat", "hello-world", 42));
}

#[test]
fn test_resolve_pull_request_from_event_payload() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let event_path = temp_dir.path().join("event.json");
    fs::write(&event_path, r#"{"pull_request": {"number": 17}}"#).expect("Failed to write event");

    let args = CheckArgs {
        repository: Some("octocat/hello-world".to_string()),
        event_path: Some(event_path),
        ..Default::default()
    };

    assert_eq!(resolve_pull_request(&args).unwrap().number, 17);
}

#[test]
fn test_resolve_pull_request_number_argument_wins_over_event() {
    let args = CheckArgs {
        repository: Some("octocat/hello-world".to_string()),
        number: Some(3),
        event_path: Some(PathBuf::from("does/not/exist.json")),
        ..Default::default()
    };

    assert_eq!(resolve_pull_request(&args).unwrap().number, 3);
}

#[test]
fn test_resolve_pull_request_without_repository() {
    let args = CheckArgs {
        number: Some(3),
        ..Default::default()
    };

    assert!(matches!(
        resolve_pull_request(&args),
        Err(Error::Context(_))
    ));
}

#[test]
fn test_resolve_pull_request_without_number() {
    let args = CheckArgs {
        repository: Some("octocat/hello-world".to_string()),
        ..Default::default()
    };

    assert!(matches!(
        resolve_pull_request(&args),
        Err(Error::Context(_))
    ));
}

// =============================================================================
// execute
// =============================================================================

#[tokio::test]
async fn test_execute_passes_with_valid_labels() {
    let mock_server = MockServer::start().await;
    mount_labels(&mock_server, &["type::bug", "bug::normal", "severity::s1"]).await;

    let outcome = execute(&args_for(&mock_server, 5))
        .await
        .expect("Check should pass");

    assert_eq!(outcome.applied_label, None);
    assert_eq!(outcome.labels.len(), 3);
}

#[tokio::test]
async fn test_execute_reports_policy_violation() {
    let mock_server = MockServer::start().await;
    mount_labels(&mock_server, &["type::feature", "severity::s1", "severity::s2"]).await;

    let error = execute(&args_for(&mock_server, 5))
        .await
        .expect_err("Check should fail");

    assert_eq!(error.exit_code(), crate::errors::EXIT_POLICY_VIOLATION);
    assert!(matches!(
        error,
        Error::Check(pr_label_check_core::Error::Policy(
            PolicyViolation::MultipleSeverityLabels { .. }
        ))
    ));
}

#[tokio::test]
async fn test_execute_auto_labels_from_title() {
    let mock_server = MockServer::start().await;

    // The first listing has no type label, the second one sees the added label.
    Mock::given(method("GET"))
        .and(path("/repos/test-owner/test-repo/issues/5/labels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(labels_json(&[])))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&mock_server)
        .await;
    mount_labels(&mock_server, &["type::feature"]).await;

    Mock::given(method("GET"))
        .and(path("/repos/test-owner/test-repo/pulls/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "number": 5,
            "title": "feat(cli): add flags",
            "head": { "sha": "abc123" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/repos/test-owner/test-repo/issues/5/labels"))
        .and(body_json(json!({ "labels": ["type::feature"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(labels_json(&["type::feature"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let outcome = execute(&args_for(&mock_server, 5))
        .await
        .expect("Check should pass after auto-labeling");

    assert_eq!(outcome.applied_label.as_deref(), Some("type::feature"));
}

#[tokio::test]
async fn test_execute_no_auto_label_flag() {
    let mock_server = MockServer::start().await;
    mount_labels(&mock_server, &[]).await;

    Mock::given(method("GET"))
        .and(path("/repos/test-owner/test-repo/pulls/5"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut args = args_for(&mock_server, 5);
    args.no_auto_label = true;

    let error = execute(&args).await.expect_err("Check should fail");

    assert_eq!(error.exit_code(), crate::errors::EXIT_POLICY_VIOLATION);
}

#[tokio::test]
async fn test_execute_missing_pull_request_is_an_operational_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/test-owner/test-repo/issues/5/labels"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .mount(&mock_server)
        .await;

    let error = execute(&args_for(&mock_server, 5))
        .await
        .expect_err("Check should fail");

    assert_eq!(error.exit_code(), crate::errors::EXIT_CHECK_ERROR);
}

#[tokio::test]
async fn test_execute_uses_config_file() {
    let mock_server = MockServer::start().await;
    mount_labels(&mock_server, &[]).await;

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("pr-label-check.toml");
    fs::write(&config_path, "[labeling]\nauto_label = false\n").expect("Failed to write config");

    let mut args = args_for(&mock_server, 5);
    args.config = Some(config_path);

    let error = execute(&args).await.expect_err("Check should fail");

    // With auto-labeling off, the pull request is never fetched
    let requests = mock_server.received_requests().await.unwrap_or_default();
    assert!(requests
        .iter()
        .all(|request| !request.url.path().ends_with("/pulls/5")));
    assert_eq!(error.exit_code(), crate::errors::EXIT_POLICY_VIOLATION);
}

#[tokio::test]
async fn test_execute_rejects_invalid_api_url() {
    let args = CheckArgs {
        token: Some("test-token".to_string()),
        repository: Some("test-owner/test-repo".to_string()),
        number: Some(5),
        api_url: Some("not a url".to_string()),
        ..Default::default()
    };

    let error = execute(&args).await.expect_err("Invalid URL should fail");

    assert!(matches!(error, Error::InvalidArguments(_)));
}
