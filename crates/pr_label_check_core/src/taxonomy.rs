//! The label taxonomy enforced on pull requests.
//!
//! Label sets are fixed at compile time. The order of each set is the order
//! labels are reported in when a rule is violated.

#[cfg(test)]
#[path = "taxonomy_tests.rs"]
mod tests;

/// Labels describing the kind of change. Exactly one must be present.
pub const PRIMARY_LABELS: [&str; 4] = [
    "type::chore",
    "type::bug",
    "type::feature",
    "type::security",
];

/// The primary label that requires a bug kind label alongside it.
pub const BUG_TYPE_LABEL: &str = "type::bug";

/// Labels describing the kind of bug. Exactly one must accompany `type::bug`.
pub const BUG_LABELS: [&str; 2] = ["bug::normal", "bug::regression"];

/// Severity labels. At most one may be present.
pub const SEVERITY_LABELS: [&str; 3] = ["severity::s1", "severity::s2", "severity::s3"];

/// Maps a lowercase semantic commit type to its primary label.
///
/// # Examples
///
/// ```
/// use pr_label_check_core::taxonomy::label_for_semantic_type;
///
/// assert_eq!(label_for_semantic_type("feat"), Some("type::feature"));
/// assert_eq!(label_for_semantic_type("docs"), None);
/// ```
pub fn label_for_semantic_type(semantic_type: &str) -> Option<&'static str> {
    match semantic_type {
        "chore" => Some("type::chore"),
        "fix" | "bug" => Some("type::bug"),
        "feat" | "feature" => Some("type::feature"),
        "security" => Some("type::security"),
        _ => None,
    }
}

/// Primary labels present in `labels`, in taxonomy order.
pub fn primary_labels_in<S: AsRef<str>>(labels: &[S]) -> Vec<&'static str> {
    members_present(&PRIMARY_LABELS, labels)
}

/// Bug kind labels present in `labels`, in taxonomy order.
pub fn bug_labels_in<S: AsRef<str>>(labels: &[S]) -> Vec<&'static str> {
    members_present(&BUG_LABELS, labels)
}

/// Severity labels present in `labels`, in taxonomy order.
pub fn severity_labels_in<S: AsRef<str>>(labels: &[S]) -> Vec<&'static str> {
    members_present(&SEVERITY_LABELS, labels)
}

/// Returns `true` if any primary label is present.
pub fn has_primary_label<S: AsRef<str>>(labels: &[S]) -> bool {
    !primary_labels_in(labels).is_empty()
}

// Filtering the fixed set (rather than the input) means duplicate input
// labels are only counted once.
fn members_present<S: AsRef<str>>(set: &[&'static str], labels: &[S]) -> Vec<&'static str> {
    set.iter()
        .copied()
        .filter(|candidate| labels.iter().any(|label| label.as_ref() == *candidate))
        .collect()
}
