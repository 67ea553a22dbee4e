//! Whitespace normalization

use regex::Regex;

static WHITESPACE_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Collapse every whitespace run, line breaks included, into one space and
/// trim both ends.
///
/// Idempotent: `flatten(&flatten(x)) == flatten(x)`.
#[must_use]
pub fn flatten(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    WHITESPACE_REGEX.replace_all(text, " ").trim().to_string()
}
