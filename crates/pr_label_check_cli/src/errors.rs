use std::io;

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Exit code for a pull request whose labels break the policy.
pub const EXIT_POLICY_VIOLATION: i32 = 1;

/// Exit code for a check that could not be completed.
pub const EXIT_CHECK_ERROR: i32 = 2;

/// Errors that can occur in the PR label check CLI.
///
/// This enum represents all possible error conditions that can arise while
/// resolving the workflow context, loading configuration and running the check.
#[derive(Error, Debug)]
pub enum Error {
    /// Authentication error, such as a missing token.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// The label check failed or could not talk to GitHub.
    #[error(transparent)]
    Check(#[from] pr_label_check_core::Error),

    /// Configuration error occurred while loading or parsing configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The workflow context (repository, event payload) could not be resolved.
    #[error("Workflow context error: {0}")]
    Context(String),

    /// Building the GitHub client failed.
    #[error("GitHub client error: {0}")]
    GitHub(#[from] github_client::Error),

    /// Invalid command-line arguments were provided.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Failed to load a file from the filesystem.
    #[error("Failed to load file '{path}': {source}")]
    LoadFile { path: String, source: io::Error },
}

impl Error {
    /// The process exit code to report this error with.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Check(e) if e.is_policy_violation() => EXIT_POLICY_VIOLATION,
            _ => EXIT_CHECK_ERROR,
        }
    }
}
