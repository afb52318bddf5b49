//! Core types shared by the extractors, the intent classifiers and the
//! conversation machine.
//!
//! Everything here is plain data: results and contexts are immutable values
//! that the host application stores between turns and hands back on the next
//! follow-up. They derive `Serialize`/`Deserialize` so a host can persist a
//! pending context alongside its own conversation state.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── Reference lists ─────────────────────────────────────────────

/// A category the host application already knows about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownCategory {
    /// Display name, e.g. "Exams".
    pub name: String,
    /// Opaque host identifier, passed through untouched.
    pub id: String,
}

/// A course the host application already knows about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownCourse {
    /// Display name, e.g. "Calculus II".
    pub name: String,
    /// Opaque host identifier, passed through untouched.
    pub id: String,
}

// ── Days ────────────────────────────────────────────────────────

/// Day of the week, ordered Sunday first (ordinal 1) to Saturday (ordinal 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    /// Ordinal 1.
    Sunday,
    /// Ordinal 2.
    Monday,
    /// Ordinal 3.
    Tuesday,
    /// Ordinal 4.
    Wednesday,
    /// Ordinal 5.
    Thursday,
    /// Ordinal 6.
    Friday,
    /// Ordinal 7.
    Saturday,
}

impl DayOfWeek {
    /// All days in ordinal order.
    pub const ALL: [DayOfWeek; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Calendar ordinal, Sunday = 1 .. Saturday = 7.
    pub fn ordinal(self) -> u8 {
        match self {
            Self::Sunday => 1,
            Self::Monday => 2,
            Self::Tuesday => 3,
            Self::Wednesday => 4,
            Self::Thursday => 5,
            Self::Friday => 6,
            Self::Saturday => 7,
        }
    }

    /// Inverse of [`ordinal`](Self::ordinal).
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            1 => Some(Self::Sunday),
            2 => Some(Self::Monday),
            3 => Some(Self::Tuesday),
            4 => Some(Self::Wednesday),
            5 => Some(Self::Thursday),
            6 => Some(Self::Friday),
            7 => Some(Self::Saturday),
            _ => None,
        }
    }

    /// Capitalized English name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// The following day, wrapping Saturday to Sunday.
    pub fn succ(self) -> Self {
        self.ordinal()
            .checked_rem(7)
            .and_then(|o| o.checked_add(1))
            .and_then(Self::from_ordinal)
            .unwrap_or(Self::Sunday)
    }

    /// Monday through Friday.
    pub fn weekdays() -> BTreeSet<DayOfWeek> {
        [
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
        ]
        .into_iter()
        .collect()
    }

    /// Saturday and Sunday.
    pub fn weekend() -> BTreeSet<DayOfWeek> {
        [Self::Saturday, Self::Sunday].into_iter().collect()
    }

    /// Every day of the week.
    pub fn every_day() -> BTreeSet<DayOfWeek> {
        Self::ALL.into_iter().collect()
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Sun => Self::Sunday,
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Records ─────────────────────────────────────────────────────

/// How long before an event or class the host should notify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    /// Minutes before the start; zero means "at the time".
    pub minutes_before: u32,
}

/// A one-off calendar event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedEvent {
    /// Human title, first letter capitalized.
    pub title: String,
    /// Local wall-clock date and time of the event.
    pub date: Option<NaiveDateTime>,
    /// Name of the matched known category.
    pub category_name: Option<String>,
    /// Reminder preference; `None` when declined.
    pub reminder: Option<Reminder>,
}

/// A weekly recurring schedule entry, such as a class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedScheduleItem {
    /// Human title, first letter capitalized.
    pub title: String,
    /// Days the item repeats on.
    pub days: BTreeSet<DayOfWeek>,
    /// Local start time.
    pub start_time: Option<NaiveTime>,
    /// Local end time.
    pub end_time: Option<NaiveTime>,
    /// Length in seconds, when given as "for N hours" instead of an end time.
    pub duration_secs: Option<u32>,
    /// Reminder preference.
    pub reminder: Option<Reminder>,
}

/// A graded-assignment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedGrade {
    /// Matched course name.
    pub course_name: String,
    /// Assignment name such as "Midterm" or "Quiz 2".
    pub assignment_name: String,
    /// Normalized grade, e.g. "95.0%", "B+", "45/50".
    pub grade: String,
    /// Weight as an integer percentage string, e.g. "20".
    pub weight: Option<String>,
}

// ── Conversation context ────────────────────────────────────────

/// Which schedule field a [`ParseContext::ScheduleNeedsMoreTime`] is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleField {
    /// No recurrence days yet.
    Days,
    /// No start time yet.
    StartTime,
    /// Neither an end time nor a duration yet.
    EndTime,
}

/// Schedule fields gathered so far across turns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingSchedule {
    /// Title derived from the first utterance.
    pub title: String,
    /// Days resolved so far; may be empty.
    pub days: BTreeSet<DayOfWeek>,
    /// Start time, once known.
    pub start_time: Option<NaiveTime>,
    /// End time, once known.
    pub end_time: Option<NaiveTime>,
    /// Duration in seconds, once known.
    pub duration_secs: Option<u32>,
    /// Reminder, if one was given inline.
    pub reminder: Option<Reminder>,
    /// The user asked to be reminded but did not say when.
    pub reminder_requested: bool,
}

impl PendingSchedule {
    /// Finish into a record.
    pub fn into_item(self) -> ParsedScheduleItem {
        ParsedScheduleItem {
            title: self.title,
            days: self.days,
            start_time: self.start_time,
            end_time: self.end_time,
            duration_secs: self.duration_secs,
            reminder: self.reminder,
        }
    }
}

/// What an in-progress conversation still needs.
///
/// Every variant carries the fields already resolved. A context is never
/// mutated; each turn produces a fresh one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ParseContext {
    /// Grade, course and assignment known; weight missing.
    GradeNeedsWeight {
        /// Normalized grade.
        grade: String,
        /// Resolved course.
        course_name: String,
        /// Resolved assignment.
        assignment_name: String,
    },
    /// Grade and course known; assignment name missing.
    GradeNeedsAssignmentName {
        /// Normalized grade.
        grade: String,
        /// Resolved course.
        course_name: String,
        /// Weight, if already given.
        weight: Option<String>,
    },
    /// Grade known; course missing.
    GradeNeedsCourse {
        /// Normalized grade.
        grade: String,
        /// Assignment, if already given.
        assignment_name: Option<String>,
        /// Weight, if already given.
        weight: Option<String>,
    },
    /// Event has a date; reminder preference missing.
    EventNeedsReminder {
        /// Event title.
        title: String,
        /// Resolved date and time.
        date: NaiveDateTime,
        /// Matched category.
        category_name: Option<String>,
    },
    /// Event has no date yet.
    EventNeedsDate {
        /// Event title.
        title: String,
        /// Matched category.
        category_name: Option<String>,
        /// Reminder, if one was given inline.
        reminder: Option<Reminder>,
    },
    /// Schedule is complete except for the reminder the user asked for.
    ScheduleNeedsReminder {
        /// Gathered schedule fields.
        schedule: PendingSchedule,
    },
    /// Schedule is missing days or times.
    ScheduleNeedsMoreTime {
        /// Gathered schedule fields.
        schedule: PendingSchedule,
        /// The single field asked about next.
        missing: ScheduleField,
    },
}

// ── Parse result ────────────────────────────────────────────────

/// Outcome of a parse or follow-up call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseResult {
    /// A complete one-off event.
    Event(ParsedEvent),
    /// A complete recurring schedule entry.
    ScheduleItem(ParsedScheduleItem),
    /// A complete grade record.
    Grade(ParsedGrade),
    /// Something is missing; ask `prompt` and route the answer through a follow-up.
    NeedsMoreInfo {
        /// Question for the user, naming exactly one missing field.
        prompt: String,
        /// Sanitized text of the turn that produced this question.
        original_input: String,
        /// Context to hand back on the next follow-up.
        context: Option<ParseContext>,
        /// Conversation handle used for expiry.
        session_id: Option<Uuid>,
    },
    /// No intent recognized, or the conversation ended without a record.
    Unrecognized {
        /// Sanitized input.
        original_input: String,
        /// Explanation when the conversation expired or was cancelled.
        message: Option<String>,
    },
    /// Input was empty after sanitizing.
    NotAttempted,
}

/// Discriminant of a [`ParseResult`], for comparisons that ignore payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    /// [`ParseResult::Event`].
    Event,
    /// [`ParseResult::ScheduleItem`].
    ScheduleItem,
    /// [`ParseResult::Grade`].
    Grade,
    /// [`ParseResult::NeedsMoreInfo`].
    NeedsMoreInfo,
    /// [`ParseResult::Unrecognized`].
    Unrecognized,
    /// [`ParseResult::NotAttempted`].
    NotAttempted,
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Event => "event",
            Self::ScheduleItem => "schedule_item",
            Self::Grade => "grade",
            Self::NeedsMoreInfo => "needs_more_info",
            Self::Unrecognized => "unrecognized",
            Self::NotAttempted => "not_attempted",
        };
        f.write_str(label)
    }
}

impl ParseResult {
    /// Payload-free discriminant.
    pub fn kind(&self) -> ResultKind {
        match self {
            Self::Event(_) => ResultKind::Event,
            Self::ScheduleItem(_) => ResultKind::ScheduleItem,
            Self::Grade(_) => ResultKind::Grade,
            Self::NeedsMoreInfo { .. } => ResultKind::NeedsMoreInfo,
            Self::Unrecognized { .. } => ResultKind::Unrecognized,
            Self::NotAttempted => ResultKind::NotAttempted,
        }
    }

    /// Pending context, if this result asks a follow-up question.
    pub fn context(&self) -> Option<&ParseContext> {
        match self {
            Self::NeedsMoreInfo { context, .. } => context.as_ref(),
            _ => None,
        }
    }

    /// Session handle, if this result opened or continued a conversation.
    pub fn session_id(&self) -> Option<Uuid> {
        match self {
            Self::NeedsMoreInfo { session_id, .. } => *session_id,
            _ => None,
        }
    }

    /// One-line human summary, used by the CLI.
    pub fn summary(&self) -> String {
        match self {
            Self::Event(event) => {
                let when = event
                    .date
                    .map(|d| d.format("%a %b %-d %Y %H:%M").to_string())
                    .unwrap_or_else(|| "no date".to_owned());
                format!(
                    "event \"{}\" on {when}{}{}",
                    event.title,
                    event
                        .category_name
                        .as_deref()
                        .map(|c| format!(" [{c}]"))
                        .unwrap_or_default(),
                    describe_reminder(event.reminder),
                )
            }
            Self::ScheduleItem(item) => {
                let days: Vec<&str> = item.days.iter().map(|d| d.name()).collect();
                let start = item
                    .start_time
                    .map(|t| t.format("%H:%M").to_string())
                    .unwrap_or_else(|| "?".to_owned());
                let end = match (item.end_time, item.duration_secs) {
                    (Some(t), _) => t.format("%H:%M").to_string(),
                    (None, Some(secs)) => format!("+{}m", secs.checked_div(60).unwrap_or(0)),
                    (None, None) => "?".to_owned(),
                };
                format!(
                    "schedule \"{}\" every {} {start}-{end}{}",
                    item.title,
                    days.join(", "),
                    describe_reminder(item.reminder),
                )
            }
            Self::Grade(grade) => format!(
                "grade {} for {} in {}{}",
                grade.grade,
                grade.assignment_name,
                grade.course_name,
                grade
                    .weight
                    .as_deref()
                    .map(|w| format!(" (weight {w}%)"))
                    .unwrap_or_default(),
            ),
            Self::NeedsMoreInfo { prompt, .. } => prompt.clone(),
            Self::Unrecognized { message, .. } => message
                .clone()
                .unwrap_or_else(|| "Sorry, I couldn't understand that.".to_owned()),
            Self::NotAttempted => String::new(),
        }
    }
}

fn describe_reminder(reminder: Option<Reminder>) -> String {
    match reminder {
        Some(Reminder { minutes_before: 0 }) => ", remind at start".to_owned(),
        Some(Reminder { minutes_before }) => format!(", remind {minutes_before}m before"),
        None => String::new(),
    }
}
