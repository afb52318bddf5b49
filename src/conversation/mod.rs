//! Conversation context machine.
//!
//! One follow-up utterance plus the pending [`ParseContext`] produces the next
//! [`Step`]: a narrower context, a finished record, or the same question again
//! when the answer did not supply the missing field. Every context variant is
//! handled in [`advance`]; adding a variant without a transition does not
//! compile.

use crate::extractors::assignment::extract_assignment_name;
use crate::extractors::date::extract_date;
use crate::extractors::days::extract_days;
use crate::extractors::is_decline;
use crate::extractors::reminder::{extract_inline_reminder, parse_reminder_answer, ReminderAnswer};
use crate::extractors::weight::{extract_follow_up_weight, extract_initial_weight};
use crate::extractors::{capitalize_first, title_case};
use crate::intent::event::EventDraft;
use crate::intent::grade::{find_course, GradeDraft};
use crate::intent::schedule::{absorb_times, resolve};
use crate::intent::{Step, Turn};
use crate::types::{
    ParseContext, ParseResult, ParsedEvent, ParsedGrade, PendingSchedule, Reminder,
    ScheduleField,
};

/// Apply one follow-up utterance to a pending context.
pub fn advance(context: ParseContext, turn: &Turn<'_>) -> Step {
    match context {
        ParseContext::GradeNeedsCourse {
            grade,
            assignment_name,
            weight,
        } => {
            let course = find_course(turn.text, turn.courses).or_else(|| {
                // With no known list any non-empty answer names the course.
                turn.courses.is_empty().then(|| title_case(turn.text))
            });
            match course {
                Some(course_name) => GradeDraft {
                    grade,
                    course_name: Some(course_name),
                    assignment_name: assignment_name.or_else(|| extract_assignment_name(turn.text)),
                    weight: weight.or_else(|| extract_initial_weight(turn.text)),
                }
                .resolve(turn.courses),
                None => Step::ask(
                    ParseContext::GradeNeedsCourse {
                        grade,
                        assignment_name,
                        weight,
                    },
                    turn.courses,
                ),
            }
        }

        ParseContext::GradeNeedsAssignmentName {
            grade,
            course_name,
            weight,
        } => {
            let assignment_name = extract_assignment_name(turn.text)
                .unwrap_or_else(|| capitalize_first(turn.text));
            GradeDraft {
                grade,
                course_name: Some(course_name),
                assignment_name: Some(assignment_name),
                weight: weight.or_else(|| extract_initial_weight(turn.text)),
            }
            .resolve(turn.courses)
        }

        ParseContext::GradeNeedsWeight {
            grade,
            course_name,
            assignment_name,
        } => {
            let weight = if is_decline(turn.text) {
                None
            } else {
                match extract_follow_up_weight(turn.text) {
                    Some(weight) => Some(weight),
                    None => {
                        return Step::ask(
                            ParseContext::GradeNeedsWeight {
                                grade,
                                course_name,
                                assignment_name,
                            },
                            turn.courses,
                        )
                    }
                }
            };
            Step::Done(ParseResult::Grade(ParsedGrade {
                course_name,
                assignment_name,
                grade,
                weight,
            }))
        }

        ParseContext::EventNeedsDate {
            title,
            category_name,
            reminder,
        } => match extract_date(turn.text, turn.now, turn.settings.default_event_hour) {
            Some(date) => EventDraft {
                title,
                date: Some(date),
                category_name,
                reminder: reminder.or_else(|| extract_inline_reminder(turn.text)),
            }
            .resolve(turn.courses),
            None => Step::ask(
                ParseContext::EventNeedsDate {
                    title,
                    category_name,
                    reminder,
                },
                turn.courses,
            ),
        },

        ParseContext::EventNeedsReminder {
            title,
            date,
            category_name,
        } => {
            let reminder = match parse_reminder_answer(turn.text, turn.settings.default_reminder_minutes) {
                ReminderAnswer::Set(reminder) => Some(reminder),
                ReminderAnswer::Declined => None,
                ReminderAnswer::Unclear => {
                    return Step::ask(
                        ParseContext::EventNeedsReminder {
                            title,
                            date,
                            category_name,
                        },
                        turn.courses,
                    )
                }
            };
            Step::Done(ParseResult::Event(ParsedEvent {
                title,
                date: Some(date),
                category_name,
                reminder,
            }))
        }

        ParseContext::ScheduleNeedsReminder { schedule } => {
            match parse_reminder_answer(turn.text, turn.settings.default_reminder_minutes) {
                ReminderAnswer::Set(reminder) => finish_schedule(schedule, Some(reminder)),
                ReminderAnswer::Declined => finish_schedule(schedule, None),
                ReminderAnswer::Unclear => {
                    Step::ask(ParseContext::ScheduleNeedsReminder { schedule }, turn.courses)
                }
            }
        }

        ParseContext::ScheduleNeedsMoreTime { schedule, missing } => {
            let updated = fill_schedule_field(schedule.clone(), missing, turn.text);
            if still_missing(&updated, missing) {
                return Step::ask(
                    ParseContext::ScheduleNeedsMoreTime { schedule, missing },
                    turn.courses,
                );
            }
            resolve(updated, turn.courses)
        }
    }
}

fn finish_schedule(schedule: PendingSchedule, reminder: Option<Reminder>) -> Step {
    Step::Done(ParseResult::ScheduleItem(
        PendingSchedule {
            reminder,
            reminder_requested: false,
            ..schedule
        }
        .into_item(),
    ))
}

fn fill_schedule_field(
    mut schedule: PendingSchedule,
    missing: ScheduleField,
    text: &str,
) -> PendingSchedule {
    if missing == ScheduleField::Days {
        schedule.days = extract_days(text);
    }
    if schedule.reminder.is_none() {
        schedule.reminder = extract_inline_reminder(text);
    }
    absorb_times(schedule, text)
}

fn still_missing(schedule: &PendingSchedule, field: ScheduleField) -> bool {
    match field {
        ScheduleField::Days => schedule.days.is_empty(),
        ScheduleField::StartTime => schedule.start_time.is_none(),
        ScheduleField::EndTime => schedule.end_time.is_none() && schedule.duration_secs.is_none(),
    }
}
