//! Transcription normalisation for comparison only. Stored text is never rewritten.

use std::sync::LazyLock;

use regex::Regex;

/// Inline markup such as `[sic]` or `[deletion]...`; shortest match, leftmost first.
static TAG: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\[.*?\]").ok());

/// Remove square-bracket tags and collapse whitespace runs to single spaces.
pub fn strip_tags(text: &str) -> String {
    let untagged = match TAG.as_ref() {
        Some(tag) => tag.replace_all(text, ""),
        None => text.into(),
    };
    untagged.split_whitespace().collect::<Vec<_>>().join(" ")
}
