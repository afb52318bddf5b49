//! Reminder offsets, inline ("remind me 30 minutes before") or as an answer.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{contains_word, is_decline, literal_regex, numbers};
use crate::types::Reminder;

const MINUTES_PER_HOUR: u32 = 60;
const MINUTES_PER_DAY: u32 = 1440;

const AMOUNT: &str = r"(\d+|an?|one|two|three|four|five|six|seven|eight|nine|ten|twelve|fifteen|twenty|thirty|forty|forty-five|forty five)";
const UNIT: &str = r"(minutes?|mins?|hours?|hrs?|h|days?)";

/// `N unit before|ahead|early`, required in first-turn text.
static INLINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    literal_regex(&format!(
        r"(?i)\b{AMOUNT}\s*{UNIT}\s+(?:before|ahead|early|prior|in advance)\b"
    ))
});

/// `N unit`, enough in an answer to "want a reminder?".
static ANSWER_RE: LazyLock<Regex> =
    LazyLock::new(|| literal_regex(&format!(r"(?i)\b{AMOUNT}\s*{UNIT}\b")));

static AT_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    literal_regex(r"(?i)\b(?:at the time|on time|when it starts|at start|at the start)\b")
});

static AFFIRMATIVE_RE: LazyLock<Regex> =
    LazyLock::new(|| literal_regex(r"(?i)^(?:yes|yeah|yep|sure|ok|okay|please|y)\b"));

/// Answer to a reminder question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderAnswer {
    /// A concrete offset.
    Set(Reminder),
    /// The user does not want one.
    Declined,
    /// Nothing usable; ask again.
    Unclear,
}

fn minutes_from(caps: &Captures<'_>) -> Option<u32> {
    let amount = numbers::quantity(caps.get(1)?.as_str())?;
    let unit = caps.get(2)?.as_str().to_lowercase();
    let per_unit = if unit.starts_with('d') {
        MINUTES_PER_DAY
    } else if unit.starts_with('h') {
        MINUTES_PER_HOUR
    } else {
        1
    };
    amount.checked_mul(per_unit)
}

/// Reminder stated inline in a first-turn utterance.
pub fn extract_inline_reminder(text: &str) -> Option<Reminder> {
    let caps = INLINE_RE.captures(text)?;
    minutes_from(&caps).map(|minutes_before| Reminder { minutes_before })
}

/// Whether the text asks for a reminder at all.
pub fn mentions_reminder(text: &str) -> bool {
    let lower = text.to_lowercase();
    contains_word(&lower, "remind") || contains_word(&lower, "reminder")
}

/// Interpret an answer to "do you want a reminder?".
pub fn parse_reminder_answer(text: &str, default_minutes: u32) -> ReminderAnswer {
    if is_decline(text) {
        return ReminderAnswer::Declined;
    }
    if let Some(minutes_before) = ANSWER_RE.captures(text).and_then(|caps| minutes_from(&caps)) {
        return ReminderAnswer::Set(Reminder { minutes_before });
    }
    if AT_TIME_RE.is_match(text) {
        return ReminderAnswer::Set(Reminder { minutes_before: 0 });
    }
    if AFFIRMATIVE_RE.is_match(text.trim()) {
        return ReminderAnswer::Set(Reminder {
            minutes_before: default_minutes,
        });
    }
    ReminderAnswer::Unclear
}
