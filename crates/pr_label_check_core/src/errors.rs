use thiserror::Error;

use crate::policy::PolicyViolation;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors produced by a label check run.
///
/// A [`PolicyViolation`] means the check ran and the pull request failed it.
/// Every other variant means the check could not be completed.
#[derive(Error, Debug)]
pub enum Error {
    /// The pull request labels break a taxonomy rule.
    #[error(transparent)]
    Policy(#[from] PolicyViolation),

    /// A call to the GitHub API failed.
    #[error("GitHub API request failed: {0}")]
    GitHub(#[from] github_client::Error),
}

impl Error {
    /// Returns `true` if the check completed and the labels were rejected.
    pub fn is_policy_violation(&self) -> bool {
        matches!(self, Error::Policy(_))
    }
}
