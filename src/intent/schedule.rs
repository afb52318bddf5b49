//! Recurring schedule items: "chem lab every tuesday and thursday 2pm to 3:30pm".

use super::event::is_recurring;
use super::{Step, Turn};
use crate::extractors::days::extract_days;
use crate::extractors::reminder::{extract_inline_reminder, mentions_reminder};
use crate::extractors::time::{extract_duration_secs, extract_time, extract_time_range};
use crate::extractors::title::schedule_title;
use crate::extractors::word_tokens;
use crate::types::{KnownCourse, ParseContext, ParseResult, PendingSchedule, ScheduleField};

/// Words that open the schedule gate.
const SCHEDULE_KEYWORDS: &[&str] = &[
    "every", "weekly", "schedule", "class", "classes", "recurring", "each", "daily", "lecture",
    "seminar",
];

fn passes_gate(text: &str) -> bool {
    let tokens = word_tokens(text);
    SCHEDULE_KEYWORDS
        .iter()
        .any(|k| tokens.iter().any(|t| t == k))
        || is_recurring(text)
}

/// Fold any time information in `text` into the fields still missing.
///
/// A range sets both ends; otherwise a lone clock time fills the start, or
/// the end once the start is known. Known fields are never overwritten.
pub fn absorb_times(mut schedule: PendingSchedule, text: &str) -> PendingSchedule {
    if let Some((start, end)) = extract_time_range(text) {
        schedule.start_time.get_or_insert(start);
        if schedule.duration_secs.is_none() {
            schedule.end_time.get_or_insert(end);
        }
    } else if let Some(time) = extract_time(text) {
        if schedule.start_time.is_none() {
            schedule.start_time = Some(time);
        } else if schedule.end_time.is_none() && schedule.duration_secs.is_none() {
            schedule.end_time = Some(time);
        }
    }
    if schedule.end_time.is_none() && schedule.duration_secs.is_none() {
        schedule.duration_secs = extract_duration_secs(text);
    }
    schedule
}

/// Ask for days, start, end and then a requested reminder, or finish.
pub fn resolve(schedule: PendingSchedule, courses: &[KnownCourse]) -> Step {
    let missing = if schedule.days.is_empty() {
        Some(ScheduleField::Days)
    } else if schedule.start_time.is_none() {
        Some(ScheduleField::StartTime)
    } else if schedule.end_time.is_none() && schedule.duration_secs.is_none() {
        Some(ScheduleField::EndTime)
    } else {
        None
    };
    if let Some(missing) = missing {
        return Step::ask(
            ParseContext::ScheduleNeedsMoreTime { schedule, missing },
            courses,
        );
    }
    if schedule.reminder_requested && schedule.reminder.is_none() {
        return Step::ask(ParseContext::ScheduleNeedsReminder { schedule }, courses);
    }
    Step::Done(ParseResult::ScheduleItem(schedule.into_item()))
}

/// Classify a recurring schedule item.
pub fn classify(turn: &Turn<'_>) -> Option<Step> {
    if !passes_gate(&turn.text.to_lowercase()) {
        return None;
    }
    let reminder = extract_inline_reminder(turn.text);
    let pending = PendingSchedule {
        title: schedule_title(turn.text),
        days: extract_days(turn.text),
        start_time: None,
        end_time: None,
        duration_secs: None,
        reminder,
        reminder_requested: reminder.is_none() && mentions_reminder(turn.text),
    };
    Some(resolve(absorb_times(pending, turn.text), turn.courses))
}
