//! Assignment-name extraction for grade reports.

use std::sync::LazyLock;

use regex::Regex;

use super::{contains_word, literal_regex};

/// Keywords in priority order, specific before general, with display names.
const ASSIGNMENT_KEYWORDS: &[(&str, &str)] = &[
    ("final exam", "Final Exam"),
    ("midterm", "Midterm"),
    ("final", "Final"),
    ("lab report", "Lab Report"),
    ("problem set", "Problem Set"),
    ("pset", "Problem Set"),
    ("homework", "Homework"),
    ("hw", "Homework"),
    ("assignment", "Assignment"),
    ("project", "Project"),
    ("presentation", "Presentation"),
    ("essay", "Essay"),
    ("paper", "Paper"),
    ("report", "Report"),
    ("portfolio", "Portfolio"),
    ("quiz", "Quiz"),
    ("exam", "Exam"),
    ("test", "Test"),
    ("lab", "Lab"),
];

/// Per keyword: the keyword, its display name, and "keyword N" with an
/// optional score marker after the number.
static NUMBERED_RES: LazyLock<Vec<(&str, &str, Regex)>> = LazyLock::new(|| {
    ASSIGNMENT_KEYWORDS
        .iter()
        .map(|(keyword, display)| {
            let re = literal_regex(&format!(
                r"\b{}s?\s*#?\s*(\d{{1,2}})\b(\s*(?:%|/|percent))?",
                regex::escape(keyword)
            ));
            (*keyword, *display, re)
        })
        .collect()
});

/// Assignment name such as "Midterm" or "Quiz 2".
///
/// A number directly after the keyword is appended unless it reads as a
/// score ("quiz 95%", "quiz 45/50").
pub fn extract_assignment_name(text: &str) -> Option<String> {
    let lower = text.to_lowercase();
    let (display, numbered) = NUMBERED_RES
        .iter()
        .find(|(keyword, _, _)| contains_word(&lower, keyword))
        .map(|(_, display, re)| (*display, re))?;

    let suffix = numbered
        .captures(&lower)
        .filter(|caps| caps.get(2).is_none())
        .and_then(|caps| caps.get(1).map(|m| m.as_str().to_owned()));

    Some(match suffix {
        Some(number) => format!("{display} {number}"),
        None => display.to_owned(),
    })
}
