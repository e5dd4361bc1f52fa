//! Semantic commit prefix parsing.
//!
//! Pull request titles and commit messages in the `type(scope): subject` form
//! carry the kind of change in their leading word. This module extracts that
//! word and maps it onto the label taxonomy.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::taxonomy::label_for_semantic_type;

#[cfg(test)]
#[path = "semantic_tests.rs"]
mod tests;

// Word characters are ASCII only, matching what git hosting tools accept.
static SEMANTIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_]+)(?:\([A-Za-z0-9_-]+\))?:\s")
        .expect("semantic prefix pattern is a valid regex")
});

/// Where an inferred label came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InferenceSource {
    /// The pull request title.
    Title,
    /// The message of the pull request head commit.
    HeadCommit,
}

impl fmt::Display for InferenceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferenceSource::Title => write!(f, "pull request title"),
            InferenceSource::HeadCommit => write!(f, "head commit message"),
        }
    }
}

/// A primary label inferred from a semantic commit prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferredLabel {
    /// The primary label to apply.
    pub label: &'static str,
    /// The lowercased semantic type that produced the label, e.g. `feat`.
    pub semantic_type: String,
    /// Which text the type was read from.
    pub source: InferenceSource,
}

/// Extracts the semantic commit type from a title or commit message.
///
/// Returns the leading type word lowercased, or `None` when the message does not
/// start with `type: ` or `type(scope): `. Whitespace after the colon is
/// required and the scope, when present, must not be empty.
///
/// # Examples
///
/// ```
/// use pr_label_check_core::semantic::extract_semantic_type;
///
/// assert_eq!(extract_semantic_type("feat: add widgets"), Some("feat".to_string()));
/// assert_eq!(extract_semantic_type("Fix(ui-core): align"), Some("fix".to_string()));
/// assert_eq!(extract_semantic_type("feat:no space"), None);
/// ```
pub fn extract_semantic_type(message: &str) -> Option<String> {
    if message.is_empty() {
        return None;
    }

    SEMANTIC_PREFIX
        .captures(message)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_lowercase())
}

/// Infers a primary label from a single message.
///
/// Returns `None` if the message has no semantic prefix or its type is not one
/// the taxonomy knows.
pub fn infer_type_label(message: &str, source: InferenceSource) -> Option<InferredLabel> {
    let semantic_type = extract_semantic_type(message)?;
    let label = label_for_semantic_type(&semantic_type)?;

    Some(InferredLabel {
        label,
        semantic_type,
        source,
    })
}
