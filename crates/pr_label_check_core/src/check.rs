//! The label check procedure.
//!
//! A run reads the labels of one pull request, optionally applies a primary
//! label inferred from a semantic commit prefix, and validates the result.

use std::fmt;
use std::time::Duration;

use github_client::PullRequestClient;
use tracing::{debug, info, instrument, warn};

use crate::{
    errors::Error,
    policy::validate_labels,
    semantic::{infer_type_label, InferenceSource, InferredLabel},
    taxonomy::has_primary_label,
};

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;

/// Default wait between adding a label and reading the labels back.
pub const DEFAULT_PROPAGATION_DELAY: Duration = Duration::from_secs(2);

/// Identifies the pull request being checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRef {
    pub owner: String,
    pub repo: String,
    pub number: u64,
}

impl PullRequestRef {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, number: u64) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            number,
        }
    }
}

impl fmt::Display for PullRequestRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}

/// Options controlling a check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    /// Apply a primary label inferred from the title or head commit when none is set.
    pub auto_label: bool,

    /// How long to wait after adding a label before reading the labels again.
    pub propagation_delay: Duration,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            auto_label: true,
            propagation_delay: DEFAULT_PROPAGATION_DELAY,
        }
    }
}

/// The result of a passing check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// The labels that were validated.
    pub labels: Vec<String>,

    /// The label added by the auto-label step, if any.
    pub applied_label: Option<String>,
}

/// Runs the label check against one pull request.
///
/// # Behavior
///
/// 1. Lists the labels on the pull request.
/// 2. If `options.auto_label` is set and no primary label is present, infers a
///    primary label from the title (falling back to the head commit message),
///    adds it, waits `options.propagation_delay` and lists the labels again.
/// 3. Validates the labels.
///
/// # Errors
///
/// Returns `Error::Policy` when the labels break a rule and `Error::GitHub`
/// when the labels cannot be read or written. A head commit that cannot be
/// read only disables the commit message fallback.
#[instrument(skip(client, pr, options), fields(pr = %pr))]
pub async fn run_label_check<C>(
    client: &C,
    pr: &PullRequestRef,
    options: &CheckOptions,
) -> Result<CheckOutcome, Error>
where
    C: PullRequestClient + ?Sized,
{
    let mut labels = list_label_names(client, pr).await?;
    debug!(labels = ?labels, "Found labels");

    let mut applied_label = None;
    if options.auto_label && !has_primary_label(&labels) {
        if let Some(inferred) = infer_label_for_pull_request(client, pr).await? {
            info!(
                label = inferred.label,
                semantic_type = %inferred.semantic_type,
                source = %inferred.source,
                "Adding label based on semantic commit type"
            );

            client
                .add_issue_labels(
                    &pr.owner,
                    &pr.repo,
                    pr.number,
                    &[inferred.label.to_string()],
                )
                .await?;

            tokio::time::sleep(options.propagation_delay).await;

            labels = list_label_names(client, pr).await?;
            debug!(labels = ?labels, "Labels after auto-labeling");
            applied_label = Some(inferred.label.to_string());
        } else {
            debug!("No semantic commit type found, leaving labels unchanged");
        }
    }

    validate_labels(&labels)?;

    info!(labels = ?labels, "Pull request labels satisfy the label policy");
    Ok(CheckOutcome {
        labels,
        applied_label,
    })
}

async fn list_label_names<C>(client: &C, pr: &PullRequestRef) -> Result<Vec<String>, Error>
where
    C: PullRequestClient + ?Sized,
{
    let labels = client
        .list_issue_labels(&pr.owner, &pr.repo, pr.number)
        .await?;

    Ok(labels.into_iter().map(|label| label.name).collect())
}

/// Reads the title first and only fetches the head commit when the title has
/// no usable prefix.
async fn infer_label_for_pull_request<C>(
    client: &C,
    pr: &PullRequestRef,
) -> Result<Option<InferredLabel>, Error>
where
    C: PullRequestClient + ?Sized,
{
    let pull_request = client
        .get_pull_request(&pr.owner, &pr.repo, pr.number)
        .await?;

    if let Some(inferred) = infer_type_label(&pull_request.title, InferenceSource::Title) {
        return Ok(Some(inferred));
    }

    match client
        .get_commit_message(&pr.owner, &pr.repo, &pull_request.head.sha)
        .await
    {
        Ok(message) => Ok(infer_type_label(&message, InferenceSource::HeadCommit)),
        Err(e) => {
            warn!(
                head_sha = %pull_request.head.sha,
                error = %e,
                "Failed to read the head commit message, skipping commit fallback"
            );
            Ok(None)
        }
    }
}
