//! One-off events: "calc exam on friday at 10am".

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use super::{Step, Turn};
use crate::extractors::category::match_category;
use crate::extractors::date::{detect_date, extract_date, relative_date};
use crate::extractors::days::extract_days;
use crate::extractors::reminder::extract_inline_reminder;
use crate::extractors::title::event_title;
use crate::extractors::{contains_word, literal_regex, word_tokens};
use crate::types::{KnownCourse, ParseContext, ParseResult, ParsedEvent, Reminder};

/// Words that name a one-off happening.
const EVENT_KEYWORDS: &[&str] = &[
    "exam", "test", "quiz", "midterm", "final", "meeting", "appointment", "due", "deadline",
    "party", "birthday", "dinner", "lunch", "breakfast", "interview", "event", "presentation",
    "assignment", "homework", "essay", "project", "paper", "dentist", "doctor", "concert",
    "game", "trip", "flight", "submit", "call", "match",
];

/// Prepositions and phrasings that announce something on a date.
const EVENT_CUES: &[&str] = &["on", "at", "have"];

/// Words that mark a sentence as recurring rather than one-off.
const RECURRENCE_MARKERS: &[&str] = &[
    "every", "weekly", "recurring", "daily", "each", "weekdays", "weekends", "everyday",
];

static PLURAL_DAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    literal_regex(r"(?i)\b(?:sun|mon|tues|wednes|thurs|fri|satur)days\b")
});

/// Whether the text describes something that repeats.
pub fn is_recurring(text: &str) -> bool {
    let lower = text.to_lowercase();
    let tokens = word_tokens(&lower);
    RECURRENCE_MARKERS
        .iter()
        .any(|m| tokens.iter().any(|t| t == m))
        || PLURAL_DAY_RE.is_match(text)
        || extract_days(text).len() > 1
}

fn passes_gate(turn: &Turn<'_>) -> bool {
    if is_recurring(turn.text) {
        return false;
    }
    let lower = turn.text.to_lowercase();
    EVENT_KEYWORDS.iter().any(|k| contains_word(&lower, k))
        || EVENT_CUES.iter().any(|c| contains_word(&lower, c))
        || lower.contains("need to")
        || detect_date(turn.text, turn.now.date()).is_some()
        || relative_date(turn.text, turn.now.date()).is_some()
}

/// Fields of an event gathered so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    /// Title.
    pub title: String,
    /// Date and time, once known.
    pub date: Option<NaiveDateTime>,
    /// Matched category.
    pub category_name: Option<String>,
    /// Reminder, if given.
    pub reminder: Option<Reminder>,
}

impl EventDraft {
    /// Ask for the date, then a reminder, or finish.
    pub fn resolve(self, courses: &[KnownCourse]) -> Step {
        let Some(date) = self.date else {
            return Step::ask(
                ParseContext::EventNeedsDate {
                    title: self.title,
                    category_name: self.category_name,
                    reminder: self.reminder,
                },
                courses,
            );
        };
        match self.reminder {
            None => Step::ask(
                ParseContext::EventNeedsReminder {
                    title: self.title,
                    date,
                    category_name: self.category_name,
                },
                courses,
            ),
            reminder => Step::Done(ParseResult::Event(ParsedEvent {
                title: self.title,
                date: Some(date),
                category_name: self.category_name,
                reminder,
            })),
        }
    }
}

/// Classify a one-off event.
pub fn classify(turn: &Turn<'_>) -> Option<Step> {
    if !passes_gate(turn) {
        return None;
    }
    let draft = EventDraft {
        title: event_title(turn.text),
        date: extract_date(turn.text, turn.now, turn.settings.default_event_hour),
        category_name: match_category(turn.text, turn.categories).map(|c| c.name.clone()),
        reminder: extract_inline_reminder(turn.text),
    };
    Some(draft.resolve(turn.courses))
}
