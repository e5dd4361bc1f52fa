//! # Models
//!
//! The subset of GitHub REST payloads that the label check reads and writes.
//!
//! Only the fields that are actually used are modelled. Everything else in the
//! GitHub responses is ignored during deserialization.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// Represents a label on a pull request or issue.
///
/// # Examples
///
/// ```
/// use github_client::models::Label;
///
/// let label = Label {
///     name: "type::bug".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// The name of the label
    pub name: String,
}

/// The parts of a pull request needed to infer a type label.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PullRequest {
    /// The pull request number
    pub number: u64,

    /// The pull request title. GitHub never sends an empty title for a pull
    /// request, but issues converted through the API may lack one.
    #[serde(default)]
    pub title: String,

    /// The branch tip the pull request would merge
    pub head: PullRequestHead,
}

/// The head reference of a pull request.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PullRequestHead {
    /// SHA of the head commit
    pub sha: String,
}

/// Response of `GET /repos/{owner}/{repo}/commits/{sha}`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CommitResponse {
    pub commit: CommitDetails,
}

/// The git-level commit data embedded in a commit response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CommitDetails {
    #[serde(default)]
    pub message: String,
}

/// Request body of `POST /repos/{owner}/{repo}/issues/{number}/labels`.
#[derive(Debug, Serialize)]
pub(crate) struct AddLabelsPayload<'a> {
    pub labels: &'a [String],
}

/// Query parameters for paged list endpoints.
#[derive(Debug, Serialize)]
pub(crate) struct PageParams {
    pub per_page: u8,
    pub page: u32,
}
