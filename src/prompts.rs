//! Follow-up questions.
//!
//! Every question is derived from the pending context alone, so asking again
//! after an unusable answer repeats the exact same wording.

use crate::extractors::course::course_examples;
use crate::types::{KnownCourse, ParseContext, ScheduleField};

/// Asked when a grade report was recognized but the grade itself was not.
pub const RESTATE_GRADE: &str =
    "What grade did you get? Please state it explicitly (e.g. 92%, B+, or 45/50).";

/// Reply to "cancel".
pub const CANCELLED: &str = "Okay, cancelled. Nothing was added.";

/// The question that asks for the single field `context` is missing.
pub fn question(context: &ParseContext, courses: &[KnownCourse]) -> String {
    match context {
        ParseContext::GradeNeedsCourse { .. } => {
            if courses.is_empty() {
                "Which course is this grade for?".to_owned()
            } else {
                format!(
                    "Which course is this grade for? (e.g. {})",
                    course_examples(courses)
                )
            }
        }
        ParseContext::GradeNeedsAssignmentName { course_name, .. } => {
            format!("Which assignment in {course_name} was this for? (e.g. Midterm, Quiz 2)")
        }
        ParseContext::GradeNeedsWeight { .. } => {
            "What's the weight of this assignment? (e.g. 20%, or say \"skip\")".to_owned()
        }
        ParseContext::EventNeedsDate { title, .. } => {
            format!("When is \"{title}\"? (e.g. tomorrow at 3pm, Friday, March 12)")
        }
        ParseContext::EventNeedsReminder { title, .. } => format!(
            "Would you like a reminder for \"{title}\"? (e.g. 30 minutes before, or say \"no\")"
        ),
        ParseContext::ScheduleNeedsReminder { schedule } => format!(
            "How long before \"{}\" should I remind you? (e.g. 15 minutes, or say \"no\")",
            schedule.title
        ),
        ParseContext::ScheduleNeedsMoreTime { schedule, missing } => match missing {
            ScheduleField::Days => format!(
                "Which days does \"{}\" repeat on? (e.g. MWF, Tuesday and Thursday)",
                schedule.title
            ),
            ScheduleField::StartTime => format!(
                "What time does \"{}\" start? (e.g. 2pm, or 2pm to 3:30pm)",
                schedule.title
            ),
            ScheduleField::EndTime => format!(
                "When does \"{}\" end? (e.g. 3:30pm, or for 1 hour)",
                schedule.title
            ),
        },
    }
}
