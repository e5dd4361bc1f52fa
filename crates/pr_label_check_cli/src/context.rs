//! GitHub Actions workflow context.
//!
//! Inside a workflow the repository comes from `GITHUB_REPOSITORY` and the pull
//! request number from the event payload at `GITHUB_EVENT_PATH`. Both can be
//! given explicitly on the command line instead.

use std::{fs, path::Path};

use secrecy::SecretString;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::errors::Error;

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;

/// The parts of a webhook event payload that can carry the issue number.
#[derive(Debug, Default, Deserialize)]
struct EventPayload {
    pull_request: Option<NumberedItem>,
    issue: Option<NumberedItem>,
    number: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct NumberedItem {
    number: u64,
}

/// Splits an `owner/repo` slug.
///
/// # Errors
///
/// Returns `Error::Context` unless the slug has exactly two non-empty parts.
pub fn parse_repository(slug: &str) -> Result<(String, String), Error> {
    match slug.trim().split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(Error::Context(format!(
            "Repository must be in the form 'owner/repo', got '{}'",
            slug
        ))),
    }
}

/// Reads the pull request or issue number from a workflow event payload.
///
/// `pull_request.number` is preferred, then `issue.number`, then a top-level
/// `number`.
pub fn read_event_number(path: &Path) -> Result<u64, Error> {
    let content = fs::read_to_string(path).map_err(|source| Error::LoadFile {
        path: path.display().to_string(),
        source,
    })?;

    event_number_from_json(&content)
}

/// Extracts the pull request or issue number from an event payload.
pub fn event_number_from_json(content: &str) -> Result<u64, Error> {
    let payload: EventPayload = serde_json::from_str(content)
        .map_err(|e| Error::Context(format!("Failed to parse event payload: {}", e)))?;

    let number = payload
        .pull_request
        .map(|pr| pr.number)
        .or(payload.issue.map(|issue| issue.number))
        .or(payload.number);

    match number {
        Some(n) => {
            debug!(number = n, "Resolved issue number from event payload");
            Ok(n)
        }
        None => Err(Error::Context(
            "The event payload does not reference a pull request or issue".to_string(),
        )),
    }
}

/// Picks the API token, preferring the explicit value over `GITHUB_TOKEN`.
///
/// Empty values count as missing, since GitHub Actions passes unset inputs as
/// empty strings.
pub fn resolve_token(
    explicit: Option<&str>,
    github_token: Option<&str>,
) -> Result<SecretString, Error> {
    explicit
        .filter(|t| !t.trim().is_empty())
        .or(github_token.filter(|t| !t.trim().is_empty()))
        .map(|t| SecretString::from(t.trim().to_string()))
        .ok_or_else(|| {
            Error::Auth(
                "A GitHub token is required. Pass --token or set INPUT_TOKEN or GITHUB_TOKEN."
                    .to_string(),
            )
        })
}

/// Parses an optional API base URL.
pub fn parse_api_url(api_url: Option<&str>) -> Result<Option<Url>, Error> {
    match api_url.map(str::trim).filter(|u| !u.is_empty()) {
        Some(raw) => Url::parse(raw).map(Some).map_err(|e| {
            Error::InvalidArguments(format!("Invalid GitHub API URL '{}': {}", raw, e))
        }),
        None => Ok(None),
    }
}
