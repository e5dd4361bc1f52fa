//! Reporting check results to the workflow runner.
//!
//! GitHub Actions reads workflow commands such as `::error::message` from the
//! step's standard output and turns them into annotations on the run.

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;

/// Formats an `::error::` workflow command for a failure message.
pub fn error_annotation(message: &str) -> String {
    format!("::error::{}", escape_workflow_data(message))
}

/// Formats a `::notice::` workflow command.
pub fn notice_annotation(message: &str) -> String {
    format!("::notice::{}", escape_workflow_data(message))
}

// Workflow command data must not contain raw line breaks, and `%` is the
// escape character.
fn escape_workflow_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
