use super::*;

#[test]
fn test_policy_error_display_is_transparent() {
    let error = Error::from(PolicyViolation::MultipleSeverityLabels {
        found: vec!["severity::s1".to_string(), "severity::s2".to_string()],
    });

    assert_eq!(
        error.to_string(),
        "No more than one severity label may be set. Found: severity::s1, severity::s2"
    );
    assert!(error.is_policy_violation());
}

#[test]
fn test_github_error_display() {
    let error = Error::from(github_client::Error::NotFound);

    assert_eq!(
        error.to_string(),
        "GitHub API request failed: Resource not found"
    );
    assert!(!error.is_policy_violation());
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}
