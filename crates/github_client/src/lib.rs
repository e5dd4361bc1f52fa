//! Crate for interacting with the GitHub REST API.
//!
//! This crate provides a token-authenticated client for the handful of issue and
//! pull request endpoints the label check needs: reading and adding labels on an
//! issue, reading a pull request, and reading a commit message.

use async_trait::async_trait;
use octocrab::{Octocrab, Result as OctocrabResult};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, error, info, instrument, warn};
use url::Url;

pub mod errors;
pub use errors::Error;

pub mod models;
pub use models::{Label, PullRequest};

use models::{AddLabelsPayload, CommitResponse, PageParams};

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// The largest page size GitHub accepts on list endpoints.
const MAX_PAGE_SIZE: u8 = 100;

/// Trait for the issue and pull request operations used by the label check.
///
/// Pull requests are issues as far as labels are concerned, so the label
/// operations take the pull request number as the issue number.
#[async_trait]
pub trait PullRequestClient: Send + Sync {
    /// Lists every label currently attached to the issue or pull request.
    ///
    /// # Errors
    /// Returns `Error::NotFound` if the issue does not exist, or another `Error`
    /// if the API call fails.
    async fn list_issue_labels(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Vec<Label>, Error>;

    /// Adds labels to the issue or pull request, keeping the existing ones.
    ///
    /// Returns the full label list after the addition as reported by GitHub.
    async fn add_issue_labels(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        labels: &[String],
    ) -> Result<Vec<Label>, Error>;

    /// Fetches the title and head commit of a pull request.
    async fn get_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<PullRequest, Error>;

    /// Fetches the full message of a commit.
    async fn get_commit_message(&self, owner: &str, repo: &str, sha: &str)
        -> Result<String, Error>;
}

/// A client for interacting with the GitHub API.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Creates a new `GitHubClient` around an already authenticated `Octocrab`.
    ///
    /// Use [`create_token_client`] to build the `Octocrab` instance.
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PullRequestClient for GitHubClient {
    /// Lists the labels on an issue, following pagination until a short page.
    #[instrument(skip(self), fields(owner = %owner, repo = %repo, number = number))]
    async fn list_issue_labels(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Vec<Label>, Error> {
        let path = format!("/repos/{}/{}/issues/{}/labels", owner, repo, number);

        let mut labels = Vec::new();
        let mut page = 1;
        loop {
            let params = PageParams {
                per_page: MAX_PAGE_SIZE,
                page,
            };

            debug!(page = page, "Making API call to: {}", path);
            let response: OctocrabResult<Vec<Label>> = self.client.get(&path, Some(&params)).await;
            let batch = match response {
                Ok(batch) => batch,
                Err(e) => return Err(map_octocrab_error("Failed to list issue labels", e)),
            };

            let batch_len = batch.len();
            labels.extend(batch);
            if batch_len < usize::from(MAX_PAGE_SIZE) {
                break;
            }

            page += 1;
        }

        debug!(count = labels.len(), "Retrieved issue labels");
        Ok(labels)
    }

    /// Adds labels to an issue.
    ///
    /// # Errors
    /// Returns `Error::NotFound` if the issue does not exist, or
    /// `Error::InvalidResponse` if GitHub rejects the request.
    #[instrument(skip(self), fields(owner = %owner, repo = %repo, number = number))]
    async fn add_issue_labels(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        labels: &[String],
    ) -> Result<Vec<Label>, Error> {
        let path = format!("/repos/{}/{}/issues/{}/labels", owner, repo, number);
        let payload = AddLabelsPayload { labels };

        let response: OctocrabResult<Vec<Label>> = self.client.post(path, Some(&payload)).await;
        match response {
            Ok(updated) => {
                info!(
                    added = ?labels,
                    label_count = updated.len(),
                    "Added labels to issue"
                );
                Ok(updated)
            }
            Err(e) => Err(map_octocrab_error("Failed to add issue labels", e)),
        }
    }

    #[instrument(skip(self), fields(owner = %owner, repo = %repo, number = number))]
    async fn get_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<PullRequest, Error> {
        let path = format!("/repos/{}/{}/pulls/{}", owner, repo, number);

        let response: OctocrabResult<PullRequest> = self.client.get(path, None::<&()>).await;
        match response {
            Ok(pr) => {
                debug!(title = %pr.title, head_sha = %pr.head.sha, "Retrieved pull request");
                Ok(pr)
            }
            Err(e) => Err(map_octocrab_error("Failed to get pull request", e)),
        }
    }

    #[instrument(skip(self), fields(owner = %owner, repo = %repo, sha = %sha))]
    async fn get_commit_message(
        &self,
        owner: &str,
        repo: &str,
        sha: &str,
    ) -> Result<String, Error> {
        let path = format!("/repos/{}/{}/commits/{}", owner, repo, sha);

        let response: OctocrabResult<CommitResponse> = self.client.get(path, None::<&()>).await;
        match response {
            Ok(commit) => Ok(commit.commit.message),
            Err(e) => Err(map_octocrab_error("Failed to get commit", e)),
        }
    }
}

/// Creates an `Octocrab` client authenticated with a personal or workflow token.
///
/// # Arguments
///
/// * `token` - The GitHub token. In a workflow this is usually `GITHUB_TOKEN`.
/// * `api_url` - Optional API base URL, for GitHub Enterprise Server. When `None`
///   the public `https://api.github.com` endpoint is used.
///
/// # Errors
///
/// Returns `Error::AuthError` if the base URL is rejected or the client cannot be
/// built.
///
/// # Example
///
/// ```rust,no_run
/// use github_client::{create_token_client, GitHubClient, Error};
/// use secrecy::SecretString;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Error> {
///     let token = SecretString::from("ghp_example".to_string());
///     let octocrab = create_token_client(&token, None)?;
///     let client = GitHubClient::new(octocrab);
///
///     // Use `client` to perform API operations
///     Ok(())
/// }
/// ```
#[instrument(skip(token))]
pub fn create_token_client(token: &SecretString, api_url: Option<&Url>) -> Result<Octocrab, Error> {
    let mut builder = Octocrab::builder().personal_token(token.expose_secret().to_string());

    if let Some(url) = api_url {
        debug!(api_url = %url, "Using custom GitHub API base URL");
        builder = builder.base_uri(url.as_str()).map_err(|e| {
            error!(api_url = %url, error = %e, "Invalid GitHub API base URL");
            Error::AuthError(format!("Invalid GitHub API base URL '{}': {}", url, e))
        })?;
    }

    builder.build().map_err(|e| {
        error!(error = ?e, "Failed to build Octocrab client with token credentials");
        Error::AuthError("Failed to build the GitHub client.".to_string())
    })
}

/// Logs an octocrab error and translates it into a crate error.
///
/// `action` names the failed call, e.g. "Failed to list issue labels".
fn map_octocrab_error(action: &str, e: octocrab::Error) -> Error {
    match e {
        octocrab::Error::GitHub { source, .. } => {
            let status = source.status_code.as_u16();
            let is_rate_limit = source.message.to_lowercase().contains("rate limit");
            match status {
                404 => {
                    warn!(
                        status,
                        error_message = %source.message,
                        "{}. The issue, pull request or commit does not exist or is not visible to the token",
                        action
                    );
                    Error::NotFound
                }
                403 | 429 if is_rate_limit => {
                    error!(
                        status,
                        error_message = %source.message,
                        "{}. GitHub rate limit reached",
                        action
                    );
                    Error::RateLimitExceeded
                }
                _ => {
                    error!(
                        status,
                        error_message = %source.message,
                        documentation_url = ?source.documentation_url,
                        "{}. GitHub rejected the request",
                        action
                    );
                    Error::InvalidResponse
                }
            }
        }
        other => {
            error!(
                error_message = %other,
                "{}. No usable response from GitHub",
                action
            );
            Error::InvalidResponse
        }
    }
}
