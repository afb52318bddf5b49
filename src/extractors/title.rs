//! Title derivation for events and schedule items.
//!
//! Titles are what remains of the utterance after leading filler phrases and
//! date, time and recurrence phrases are stripped. Too little left over falls
//! back to a generic title picked by keyword.

use std::sync::LazyLock;

use regex::Regex;

use super::{capitalize_first, contains_word, literal_regex};

/// Titles shorter than this fall back to a generic one.
const MIN_TITLE_CHARS: usize = 3;

static LEADING_FILLER_RE: LazyLock<Regex> = LazyLock::new(|| {
    literal_regex(
        r"(?i)^(?:i\s+have\s+got\s+|i\s+have\s+to\s+|i\s+have\s+|i've\s+got\s+|i\s+got\s+|have\s+to\s+|there(?:'s|\s+is)\s+|i\s+need\s+to\s+|need\s+to\s+|remind\s+me\s+to\s+|remember\s+to\s+|don't\s+forget\s+to\s+|i'm\s+going\s+to\s+|going\s+to\s+|i\s+go\s+to\s+|go\s+to\s+|i\s+attend\s+|attend\s+|add\s+|schedule\s+|a\s+|an\s+|my\s+|the\s+)",
    )
});

static REMIND_CLAUSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    literal_regex(r"(?i)[,;.]?\s*\b(?:and\s+)?(?:please\s+)?remind(?:er)?\b.*$")
});

static TRAILING_DANGLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    literal_regex(r"(?i)(?:[\s,.;:!?-]+(?:on|at|by|due|this|next|for|in|from|the|is|and|to|every|each|until))+[\s,.;:!?-]*$|[\s,.;:!?-]+$")
});

const MONTHS: &str = "january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sept|sep|oct|nov|dec";
const DAYS: &str = "sundays?|mondays?|tuesdays?|wednesdays?|thursdays?|fridays?|saturdays?|sun|mon|tues|tue|wed|thurs|thur|thu|fri|sat";

/// Date and time phrases removed from event titles.
static EVENT_STRIP_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        literal_regex(r"(?i)\b(?:on\s+|by\s+)?\d{4}-\d{1,2}-\d{1,2}\b"),
        literal_regex(&format!(
            r"(?i)\b(?:on\s+|by\s+)?(?:{MONTHS})\.?\s+\d{{1,2}}(?:st|nd|rd|th)?\b(?:,?\s+\d{{4}})?"
        )),
        literal_regex(&format!(
            r"(?i)\b(?:on\s+|by\s+)?(?:the\s+)?\d{{1,2}}(?:st|nd|rd|th)?\s+(?:of\s+)?(?:{MONTHS})\b(?:,?\s+\d{{4}})?"
        )),
        literal_regex(r"(?i)\b(?:on\s+|by\s+)?\d{1,2}/\d{1,2}(?:/\d{2,4})?\b"),
        literal_regex(r"(?i)\b(?:today|tonight|tomorrow|tmrw|tmr|tmw|next\s+week)\b"),
        literal_regex(r"(?i)\bin\s+(?:\d+|an?|one|two|three|four|five|six|seven|eight|nine|ten)\s+(?:days?|weeks?)\b"),
        literal_regex(
            r"(?i)\b(?:this|next|on|by)\s+(?:sunday|monday|tuesday|wednesday|thursday|friday|saturday|sun|mon|tues|tue|wed|thurs|thur|thu|fri|sat)\b",
        ),
        literal_regex(r"(?i)\b(?:sunday|monday|tuesday|wednesday|thursday|friday|saturday)\b"),
        literal_regex(
            r"(?i)\b(?:from\s+)?\d{1,2}(?::[0-5]\d)?\s*(?:[ap]\.?\s?m\.?)?\s*(?:to|until|till|-|–)\s*\d{1,2}(?::[0-5]\d)?\s*(?:[ap]\.?\s?m\b\.?)",
        ),
        literal_regex(r"(?i)(?:\b(?:at|by|from)\s+|@\s*)?\b\d{1,2}(?::[0-5]\d)?\s*[ap]\.?\s?m\b\.?"),
        literal_regex(r"(?i)(?:\b(?:at|by|from)\s+|@\s*)?\b\d{1,2}:[0-5]\d\b"),
        literal_regex(r"(?i)\b(?:at\s+)?(?:noon|midnight)\b"),
    ]
});

/// Recurrence, day and time phrases removed from schedule titles.
static SCHEDULE_STRIP_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        literal_regex(
            r"(?i)\b(?:from\s+)?\d{1,2}(?::[0-5]\d)?\s*(?:[ap]\.?\s?m\.?)?\s*(?:to|until|till|-|–)\s*\d{1,2}(?::[0-5]\d)?\s*(?:[ap]\.?\s?m\b\.?)?",
        ),
        literal_regex(r"(?i)\bfor\s+(?:\d+(?:\.5)?|an?|one|two|three)\s*(?:hours?|hrs?|minutes?|mins?)\b"),
        literal_regex(r"(?i)(?:\b(?:at|from|starting\s+at)\s+|@\s*)?\b\d{1,2}(?::[0-5]\d)?\s*[ap]\.?\s?m\b\.?"),
        literal_regex(r"(?i)(?:\b(?:at|from|starting\s+at)\s+|@\s*)?\b\d{1,2}:[0-5]\d\b"),
        literal_regex(r"(?i)\b(?:at\s+)?(?:noon|midnight)\b"),
        literal_regex(&format!(
            r"(?i)\b(?:on\s+)?(?:every\s+|each\s+)?(?:{DAYS})\s*(?:through|thru|to|until|-|–)\s*(?:{DAYS})\b"
        )),
        literal_regex(&format!(
            r"(?i)\b(?:on\s+)?(?:every\s+|each\s+)?(?:{DAYS})(?:\s*(?:,|and|&|/)\s*(?:{DAYS}))*\b"
        )),
        literal_regex(
            r"(?i)\b(?:every\s*day|each\s+day|every\s+week|each\s+week|per\s+week|a\s+week|times\s+a\s+week|every|each|weekly|recurring|daily|weekdays?|weekends?|mwf|mw|tth|tuth|tr|t/th)\b",
        ),
    ]
});

/// Location keywords that override a schedule title.
const LOCATION_TITLES: &[(&str, &str)] = &[
    ("gym", "Gym session"),
    ("workout", "Workout"),
    ("library", "Library study"),
    ("office hours", "Office hours"),
    ("practice", "Practice"),
    ("church", "Church"),
    ("work", "Work shift"),
];

fn strip_leading_fillers(text: &str) -> String {
    let mut current = text.trim().to_owned();
    loop {
        let next = LEADING_FILLER_RE.replace(&current, "").trim().to_owned();
        if next == current {
            return current;
        }
        current = next;
    }
}

fn squeeze(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_all(text: &str, patterns: &[Regex]) -> String {
    let stripped = patterns.iter().fold(text.to_owned(), |acc, re| {
        re.replace_all(&acc, " ").into_owned()
    });
    squeeze(&stripped)
}

fn strip_trailing(text: &str) -> String {
    let mut current = text.trim().to_owned();
    loop {
        let next = TRAILING_DANGLE_RE.replace(&current, "").trim().to_owned();
        if next == current {
            return current;
        }
        current = next;
    }
}

fn is_too_short(title: &str) -> bool {
    title.chars().filter(|c| c.is_alphanumeric()).count() < MIN_TITLE_CHARS
}

/// Generic event title chosen by keyword.
pub fn generic_event_title(text: &str) -> &'static str {
    let lower = text.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| contains_word(&lower, w));
    if has(&["test", "exam", "quiz", "midterm", "final"]) {
        "Test"
    } else if has(&["assignment", "homework", "hw", "essay", "project", "paper", "due"]) {
        "Assignment"
    } else if has(&["meeting", "meet"]) {
        "Meeting"
    } else if has(&["appointment", "doctor", "dentist"]) {
        "Appointment"
    } else {
        "Event"
    }
}

/// Title for a one-off event.
pub fn event_title(text: &str) -> String {
    let without_fillers = strip_leading_fillers(text);
    let without_remind = REMIND_CLAUSE_RE.replace(&without_fillers, "").into_owned();
    let stripped = strip_all(&without_remind, &EVENT_STRIP_RES);
    let title = strip_trailing(&strip_leading_fillers(&stripped));

    if is_too_short(&title) {
        return generic_event_title(text).to_owned();
    }
    capitalize_first(&title)
}

/// Title for a recurring schedule item.
pub fn schedule_title(text: &str) -> String {
    let without_fillers = strip_leading_fillers(text);
    let without_remind = REMIND_CLAUSE_RE.replace(&without_fillers, "").into_owned();
    let stripped = strip_all(&without_remind, &SCHEDULE_STRIP_RES);
    let title = strip_trailing(&strip_leading_fillers(&stripped));

    let lower_title = title.to_lowercase();
    if let Some((_, location)) = LOCATION_TITLES
        .iter()
        .find(|(keyword, _)| contains_word(&lower_title, keyword))
    {
        return (*location).to_owned();
    }

    if is_too_short(&title) {
        let lower = text.to_lowercase();
        if let Some((_, location)) = LOCATION_TITLES
            .iter()
            .find(|(keyword, _)| contains_word(&lower, keyword))
        {
            return (*location).to_owned();
        }
        return if contains_word(&lower, "class") {
            "Class".to_owned()
        } else {
            "Recurring event".to_owned()
        };
    }
    capitalize_first(&title)
}
