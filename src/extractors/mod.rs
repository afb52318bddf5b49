//! Stateless entity extractors.
//!
//! Each extractor takes sanitized text (plus read-only reference lists where
//! needed) and returns a typed value or `None`. None of them keep state or
//! depend on the conversation; the intent classifiers and the conversation
//! machine compose them.
//!
//! Pattern order inside an extractor is significant: the first pattern that
//! matches wins, and the confidence and range constants are tuned values that
//! callers and tests depend on.

use regex::Regex;

pub mod assignment;
pub mod category;
pub mod course;
pub mod date;
pub mod days;
pub mod grade;
pub mod numbers;
pub mod reminder;
pub mod time;
pub mod title;
pub mod weight;

/// Compile a built-in pattern for a `LazyLock` static.
///
/// Patterns are literals or are assembled from constant tables, and every
/// static is forced by at least one unit test.
pub(crate) fn literal_regex(pattern: &str) -> Regex {
    #[allow(clippy::expect_used)]
    Regex::new(pattern).expect("literal regex should compile")
}

/// Whether `lower` contains `word` on word boundaries.
pub(crate) fn contains_word(lower: &str, word: &str) -> bool {
    lower.match_indices(word).any(|(start, matched)| {
        let before = lower[..start].chars().next_back();
        let after = lower[start.saturating_add(matched.len())..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// Whether the text declines an optional field ("skip", "no", "none").
pub fn is_decline(text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    let lower = lower.trim_end_matches(|c: char| c.is_ascii_punctuation());
    const DECLINES: &[&str] = &[
        "no", "nope", "nah", "none", "skip", "n/a", "na", "no thanks", "no thank you",
        "no reminder", "don't", "dont", "not needed", "no weight", "skip it",
    ];
    DECLINES.contains(&lower)
        || lower.starts_with("no ")
        || lower.starts_with("skip")
        || lower.starts_with("don't")
}

/// Lowercase alphanumeric tokens of `text`.
pub(crate) fn word_tokens(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Title-case every whitespace-separated word.
pub(crate) fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}
