//! Label check command module.
//!
//! Resolves the pull request from the command line or the GitHub Actions
//! environment, builds the GitHub client and runs the label check.

use std::path::PathBuf;

use clap::Args;
use github_client::{create_token_client, GitHubClient};
use pr_label_check_core::{run_label_check, CheckOutcome, PullRequestRef};
use tracing::{debug, info, instrument};

use crate::{
    config::AppConfig,
    context::{parse_api_url, parse_repository, read_event_number, resolve_token},
    errors::Error,
};

#[cfg(test)]
#[path = "check_cmd_tests.rs"]
mod check_cmd_tests;

/// Command-line arguments for the label check.
///
/// Every value that a GitHub Actions runner provides has an environment
/// variable fallback, so the binary needs no arguments inside a workflow.
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// GitHub token used to read and add labels.
    ///
    /// Falls back to `GITHUB_TOKEN` when neither the flag nor `INPUT_TOKEN` is set.
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Repository in `owner/repo` form.
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// Pull request number. Read from the event payload when omitted.
    #[arg(long)]
    pub number: Option<u64>,

    /// Path to the workflow event payload.
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// GitHub API base URL, for GitHub Enterprise Server.
    #[arg(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,

    /// Path to a TOML configuration file.
    #[arg(long, env = "PR_LABEL_CHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Do not add a type label inferred from the pull request title.
    #[arg(long)]
    pub no_auto_label: bool,

    /// Milliseconds to wait after adding a label before re-reading labels.
    #[arg(long)]
    pub propagation_delay_ms: Option<u64>,
}

/// Resolves which pull request to check.
///
/// # Errors
///
/// Returns `Error::Context` if the repository is missing or malformed, or if
/// no number is given and none can be read from the event payload.
pub fn resolve_pull_request(args: &CheckArgs) -> Result<PullRequestRef, Error> {
    let slug = args.repository.as_deref().ok_or_else(|| {
        Error::Context("No repository given. Pass --repository or set GITHUB_REPOSITORY.".to_string())
    })?;
    let (owner, repo) = parse_repository(slug)?;

    let number = match (args.number, args.event_path.as_deref()) {
        (Some(number), _) => number,
        (None, Some(event_path)) => read_event_number(event_path)?,
        (None, None) => {
            return Err(Error::Context(
                "No pull request number given. Pass --number or set GITHUB_EVENT_PATH."
                    .to_string(),
            ))
        }
    };

    Ok(PullRequestRef::new(owner, repo, number))
}

/// Runs the label check command.
///
/// # Errors
///
/// Returns `Error::Check` wrapping a policy violation when the labels are
/// rejected, and other variants when the check cannot run.
#[instrument(skip(args))]
pub async fn execute(args: &CheckArgs) -> Result<CheckOutcome, Error> {
    let config = AppConfig::resolve(args.config.as_deref())?;
    let options = config.check_options(args.no_auto_label, args.propagation_delay_ms);
    debug!(options = ?options, "Resolved check options");

    let pr = resolve_pull_request(args)?;
    let github_token = std::env::var("GITHUB_TOKEN").ok();
    let token = resolve_token(args.token.as_deref(), github_token.as_deref())?;
    let api_url = parse_api_url(args.api_url.as_deref())?;

    let client = GitHubClient::new(create_token_client(&token, api_url.as_ref())?);

    info!(pr = %pr, auto_label = options.auto_label, "Checking pull request labels");
    let outcome = run_label_check(&client, &pr, &options).await?;
    Ok(outcome)
}
