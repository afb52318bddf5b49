//! Grade extraction.
//!
//! Patterns are tried in a fixed order and the first hit wins:
//!
//! 1. `N percent`           (0.95) → percentage
//! 2. `N%`                  (0.95) → percentage
//! 3. letter `[A-F][+-]?`   (0.85) → letter grade
//! 4. fraction `N/M`        (0.80) → raw score, verbatim
//! 5. bare number ≤ 100     (0.70) → percentage
//! 6. pass / fail           (0.75) → pass-fail
//!
//! A reading is accepted only above [`ACCEPT_THRESHOLD`].

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::literal_regex;

/// Confidence for an explicit `N percent`.
pub const CONFIDENCE_PERCENT_WORD: f64 = 0.95;
/// Confidence for an explicit `N%`.
pub const CONFIDENCE_PERCENT_SIGN: f64 = 0.95;
/// Confidence for a letter grade.
pub const CONFIDENCE_LETTER: f64 = 0.85;
/// Confidence for a fraction score.
pub const CONFIDENCE_FRACTION: f64 = 0.80;
/// Confidence for a bare number read as a percentage.
pub const CONFIDENCE_BARE_NUMBER: f64 = 0.70;
/// Confidence for a pass/fail word.
pub const CONFIDENCE_PASS_FAIL: f64 = 0.75;
/// Readings at or below this are not trusted.
pub const ACCEPT_THRESHOLD: f64 = 0.6;

static PERCENT_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| literal_regex(r"(?i)(\d+(?:\.\d+)?)\s*percent\b"));
static PERCENT_SIGN_RE: LazyLock<Regex> =
    LazyLock::new(|| literal_regex(r"(\d+(?:\.\d+)?)\s*%"));
static FRACTION_RE: LazyLock<Regex> =
    LazyLock::new(|| literal_regex(r"\d+(?:\.\d+)?\s*/\s*\d+(?:\.\d+)?"));

/// Intermediate reading of a grade from free text.
///
/// Exactly one of the four raw fields is set when `confidence > 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeReading {
    /// Fraction score such as "45/50", kept verbatim.
    pub raw_score: Option<String>,
    /// Percentage value.
    pub percentage: Option<f64>,
    /// Upper-cased letter grade.
    pub letter_grade: Option<String>,
    /// Pass (`true`) or fail (`false`).
    pub pass_fail: Option<bool>,
    /// Display form; never empty for non-empty input.
    pub normalized: String,
    /// How explicit the matched pattern was, 0.0–1.0.
    pub confidence: f64,
}

impl GradeReading {
    /// Whether the reading clears [`ACCEPT_THRESHOLD`].
    pub fn is_confident(&self) -> bool {
        self.confidence > ACCEPT_THRESHOLD
    }

    /// Whether any pattern matched at all.
    pub fn matched(&self) -> bool {
        self.confidence > 0.0
    }

    fn empty(text: &str) -> Self {
        Self {
            raw_score: None,
            percentage: None,
            letter_grade: None,
            pass_fail: None,
            normalized: text.to_owned(),
            confidence: 0.0,
        }
    }

    fn percentage(value: f64, confidence: f64, text: &str) -> Self {
        Self {
            percentage: Some(value),
            normalized: format!("{value:.1}%"),
            confidence,
            ..Self::empty(text)
        }
    }
}

/// Read a grade from sanitized text.
pub fn extract_grade(text: &str) -> GradeReading {
    if let Some(value) = first_number(&PERCENT_WORD_RE, text) {
        return GradeReading::percentage(value, CONFIDENCE_PERCENT_WORD, text);
    }
    if let Some(value) = first_number(&PERCENT_SIGN_RE, text) {
        return GradeReading::percentage(value, CONFIDENCE_PERCENT_SIGN, text);
    }
    if let Some(letter) = find_letter_grade(text) {
        return GradeReading {
            letter_grade: Some(letter.clone()),
            normalized: letter,
            confidence: CONFIDENCE_LETTER,
            ..GradeReading::empty(text)
        };
    }
    if let Some(fraction) = FRACTION_RE.find(text) {
        let raw: String = fraction.as_str().split_whitespace().collect();
        return GradeReading {
            raw_score: Some(raw.clone()),
            normalized: raw,
            confidence: CONFIDENCE_FRACTION,
            ..GradeReading::empty(text)
        };
    }
    if let Some(value) = find_bare_number(text) {
        return GradeReading::percentage(value, CONFIDENCE_BARE_NUMBER, text);
    }
    if let Some(passed) = find_pass_fail(text) {
        return GradeReading {
            pass_fail: Some(passed),
            normalized: if passed { "Pass" } else { "Fail" }.to_owned(),
            confidence: CONFIDENCE_PASS_FAIL,
            ..GradeReading::empty(text)
        };
    }
    GradeReading::empty(text)
}

/// Whether the text carries an explicit grade shape (percent, letter, fraction, pass/fail).
pub fn has_explicit_grade(text: &str) -> bool {
    PERCENT_WORD_RE.is_match(text)
        || PERCENT_SIGN_RE.is_match(text)
        || find_letter_grade(text).is_some()
        || FRACTION_RE.is_match(text)
        || find_pass_fail(text).is_some()
}

/// Whether the text carries a bare number that could be a grade.
pub fn has_bare_number(text: &str) -> bool {
    find_bare_number(text).is_some()
}

fn first_number(re: &Regex, text: &str) -> Option<f64> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn strip_token(token: &str) -> &str {
    token
        .trim_start_matches(|c: char| matches!(c, '"' | '\'' | '(' | '['))
        .trim_end_matches(|c: char| {
            matches!(c, '.' | ',' | '!' | '?' | ';' | ':' | '"' | '\'' | ')' | ']')
        })
}

/// First standalone letter grade token, upper-cased.
///
/// A lone lowercase "a" is the article, not a grade.
fn find_letter_grade(text: &str) -> Option<String> {
    text.split_whitespace().map(strip_token).find_map(|token| {
        let mut chars = token.chars();
        let letter = chars.next()?;
        let sign = chars.next();
        if chars.next().is_some() || !matches!(letter.to_ascii_uppercase(), 'A'..='F') {
            return None;
        }
        if !matches!(sign, None | Some('+') | Some('-')) {
            return None;
        }
        if letter == 'a' && sign.is_none() {
            return None;
        }
        Some(token.to_uppercase())
    })
}

/// First unsigned number token no greater than 100.
fn find_bare_number(text: &str) -> Option<f64> {
    text.split_whitespace().map(strip_token).find_map(|token| {
        if !token.starts_with(|c: char| c.is_ascii_digit()) {
            return None;
        }
        if !token.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return None;
        }
        let value: f64 = token.parse().ok()?;
        (value <= 100.0).then_some(value)
    })
}

fn find_pass_fail(text: &str) -> Option<bool> {
    text.split_whitespace()
        .map(|t| strip_token(t).to_lowercase())
        .find_map(|token| match token.as_str() {
            "pass" | "passed" => Some(true),
            "fail" | "failed" => Some(false),
            _ => None,
        })
}
