//! Assignment weight extraction.
//!
//! Two modes. In a first-turn sentence that reports a grade ("I got 95%…")
//! only explicit weight phrasings are read, so the grade number is never
//! mistaken for the weight. After the user has been asked for the weight,
//! anything number-shaped in 1–100 is accepted.

use std::sync::LazyLock;

use regex::Regex;

use super::{contains_word, literal_regex, numbers};

/// Lowest weight accepted anywhere.
pub const MIN_WEIGHT: f64 = 1.0;
/// Highest weight accepted anywhere.
pub const MAX_WEIGHT: f64 = 100.0;
/// Ceiling for the weaker "weight N%" phrasing outside grade sentences.
pub const MAX_WEAK_WEIGHT: f64 = 50.0;

/// Verbs that mark a sentence as reporting a grade.
const GRADE_INDICATORS: &[&str] = &["got", "received", "earned", "scored", "made", "achieved"];

/// Explicit phrasings trusted even inside a grade sentence.
static EXPLICIT_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\bworth\s+(\d+(?:\.\d+)?)\s*(?:%|percent\b)",
        r"(?i)\bweight\s*:\s*(\d+(?:\.\d+)?)\s*%",
        r"(?i)\bweighted\s+(?:at\s+)?(\d+(?:\.\d+)?)\s*%",
        r"(?i)\bcounts?\s+(?:for\s+)?(\d+(?:\.\d+)?)\s*%",
    ]
    .into_iter()
    .map(literal_regex)
    .collect()
});

/// Broad "worth N percent" phrasing, full 1–100 range.
static WORTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    literal_regex(r"(?i)\bworth\s+(?:about\s+|around\s+)?(\d+(?:\.\d+)?)\s*(?:%|percent\b)")
});

/// Weaker "weight N%" phrasing, capped at [`MAX_WEAK_WEIGHT`].
static WEAK_WEIGHT_RE: LazyLock<Regex> = LazyLock::new(|| {
    literal_regex(r"(?i)\bweight(?:ed)?\s*(?::|of|at|is)?\s*(\d+(?:\.\d+)?)\s*%")
});

static FOLLOW_UP_PERCENT_RE: LazyLock<Regex> =
    LazyLock::new(|| literal_regex(r"(?i)(\d+(?:\.\d+)?)\s*(?:%|percent\b)"));
static FOLLOW_UP_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| literal_regex(r"(\d+(?:\.\d+)?)"));

/// Weight mentioned in a first-turn utterance.
pub fn extract_initial_weight(text: &str) -> Option<String> {
    let lower = text.to_lowercase();
    let grade_sentence = GRADE_INDICATORS.iter().any(|v| contains_word(&lower, v));

    if grade_sentence {
        return EXPLICIT_RES
            .iter()
            .find_map(|re| capture_in_range(re, text, MAX_WEIGHT))
            .map(render);
    }

    capture_in_range(&WORTH_RE, text, MAX_WEIGHT)
        .or_else(|| capture_in_range(&WEAK_WEIGHT_RE, text, MAX_WEAK_WEIGHT))
        .map(render)
}

/// The text with explicit weight phrases removed, so a grade reading does
/// not pick up "worth 30%" as the score.
pub fn strip_weight_phrases(text: &str) -> String {
    let without_worth = WORTH_RE.replace_all(text, " ").into_owned();
    EXPLICIT_RES
        .iter()
        .chain(std::iter::once(&*WEAK_WEIGHT_RE))
        .fold(without_worth, |acc, re| re.replace_all(&acc, " ").into_owned())
}

/// Weight given in answer to "what's the weight?".
pub fn extract_follow_up_weight(text: &str) -> Option<String> {
    if let Some(value) = capture_in_range(&FOLLOW_UP_PERCENT_RE, text, MAX_WEIGHT) {
        return Some(render(value));
    }
    if let Some(value) = capture_in_range(&FOLLOW_UP_NUMBER_RE, text, MAX_WEIGHT) {
        return Some(render(value));
    }
    let lower = text.to_lowercase();
    numbers::find_number_word(&lower)
        .map(f64::from)
        .filter(|v| (MIN_WEIGHT..=MAX_WEIGHT).contains(v))
        .map(render)
}

fn capture_in_range(re: &Regex, text: &str, max: f64) -> Option<f64> {
    re.captures_iter(text)
        .filter_map(|caps| caps.get(1).and_then(|m| m.as_str().parse::<f64>().ok()))
        .find(|v| (MIN_WEIGHT..=max).contains(v))
}

/// Clamp to (0, 100] and render as an integer string.
fn render(value: f64) -> String {
    format!("{:.0}", value.clamp(MIN_WEIGHT, MAX_WEIGHT).round())
}
