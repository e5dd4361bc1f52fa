//! Label policy validation.
//!
//! The rules are evaluated in a fixed order and only the first violation is
//! reported:
//!
//! 1. exactly one primary label,
//! 2. for `type::bug`, exactly one bug kind label,
//! 3. at most one severity label.

use tracing::debug;

use crate::taxonomy::{
    bug_labels_in, primary_labels_in, severity_labels_in, BUG_TYPE_LABEL, PRIMARY_LABELS,
};

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;

/// A label policy rule that a pull request breaks.
///
/// Each variant carries the labels from the relevant set that were found, in
/// taxonomy order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyViolation {
    /// Zero or several primary labels are set.
    #[error(
        "Exactly one primary label must be set from [{}]. Found: {}",
        PRIMARY_LABELS.join(", "),
        .found.join(", ")
    )]
    PrimaryLabelCount { found: Vec<String> },

    /// The primary label is `type::bug` but zero or several bug kind labels are set.
    #[error(
        "Exactly one bug label must be set for primary {}. Found: {}",
        BUG_TYPE_LABEL,
        .found.join(", ")
    )]
    BugLabelCount { found: Vec<String> },

    /// More than one severity label is set.
    #[error("No more than one severity label may be set. Found: {}", .found.join(", "))]
    MultipleSeverityLabels { found: Vec<String> },
}

/// Validates a pull request's labels against the taxonomy rules.
///
/// Labels that belong to none of the taxonomy sets are ignored.
///
/// # Errors
///
/// Returns the first [`PolicyViolation`] found.
///
/// # Examples
///
/// ```
/// use pr_label_check_core::policy::{validate_labels, PolicyViolation};
///
/// assert!(validate_labels(&["type::bug", "bug::normal", "severity::s2"]).is_ok());
/// assert!(matches!(
///     validate_labels(&["type::bug"]),
///     Err(PolicyViolation::BugLabelCount { .. })
/// ));
/// ```
pub fn validate_labels<S: AsRef<str>>(labels: &[S]) -> Result<(), PolicyViolation> {
    let primary = primary_labels_in(labels);
    debug!(primary_labels = ?primary, "Found primary labels");
    if primary.len() != 1 {
        return Err(PolicyViolation::PrimaryLabelCount {
            found: owned_labels(&primary),
        });
    }

    if primary[0] == BUG_TYPE_LABEL {
        let bug = bug_labels_in(labels);
        debug!(bug_labels = ?bug, "type::bug is set, found bug labels");
        if bug.len() != 1 {
            return Err(PolicyViolation::BugLabelCount {
                found: owned_labels(&bug),
            });
        }
    }

    let severity = severity_labels_in(labels);
    debug!(severity_labels = ?severity, "Found severity labels");
    if severity.len() > 1 {
        return Err(PolicyViolation::MultipleSeverityLabels {
            found: owned_labels(&severity),
        });
    }

    Ok(())
}

fn owned_labels(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| label.to_string()).collect()
}
