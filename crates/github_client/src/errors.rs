//! Error types for GitHub client operations.
//!
//! This module defines the error types that can occur when talking to the GitHub API
//! through the github_client crate.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
///
/// Each variant describes one class of failure. The detailed GitHub response is
/// logged at the point of failure, so the variants themselves stay small.
///
/// ## Examples
///
/// ```rust,ignore
/// use github_client::Error;
///
/// match client.list_issue_labels("owner", "repo", 42).await {
///     Ok(labels) => println!("{} labels", labels.len()),
///     Err(Error::NotFound) => eprintln!("No such pull request"),
///     Err(Error::RateLimitExceeded) => eprintln!("Rate limit exceeded, retry later"),
///     Err(err) => eprintln!("Other error: {}", err),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Building the authenticated client failed.
    ///
    /// The contained string provides specific details about the failure, for
    /// instance an API base URL that octocrab refused.
    #[error("Failed to authenticate or initialize GitHub client: {0}")]
    AuthError(String),

    /// The GitHub API returned an error or a response that could not be decoded.
    #[error("Invalid response format")]
    InvalidResponse,

    /// The requested resource was not found.
    ///
    /// GitHub answers 404 both for resources that do not exist and for resources
    /// the token is not allowed to see.
    #[error("Resource not found")]
    NotFound,

    /// GitHub API rate limit has been exceeded.
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}
