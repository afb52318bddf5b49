//! Schedule conversations: days, start, end, then a requested reminder.

use std::collections::BTreeSet;

use quickadd::types::ScheduleField;
use quickadd::{DayOfWeek, ParseContext, ParseResult, ParsedScheduleItem, Reminder};

use crate::support::{hm, parser};

#[test]
fn chem_lab_needs_no_follow_up() {
    let (parser, _clock) = parser();
    let result = parser.parse("chem lab every tuesday and thursday 2pm to 3:30pm", &[], &[]);
    assert_eq!(
        result,
        ParseResult::ScheduleItem(ParsedScheduleItem {
            title: "Chem lab".to_owned(),
            days: [DayOfWeek::Tuesday, DayOfWeek::Thursday].into_iter().collect(),
            start_time: Some(hm(14, 0)),
            end_time: Some(hm(15, 30)),
            duration_secs: None,
            reminder: None,
        })
    );
    assert!(parser.sessions().is_empty());
}

#[test]
fn days_then_times_are_asked_in_order() {
    let (parser, _clock) = parser();

    let (context, id) = match parser.parse("yoga every week", &[], &[]) {
        ParseResult::NeedsMoreInfo {
            context:
                Some(
                    context @ ParseContext::ScheduleNeedsMoreTime {
                        missing: ScheduleField::Days,
                        ..
                    },
                ),
            session_id,
            ..
        } => (context, session_id),
        other => panic!("expected days question, got {other:?}"),
    };

    let (context, id) = match parser.parse_follow_up("tuesdays and thursdays", context, id, &[]) {
        ParseResult::NeedsMoreInfo {
            context:
                Some(
                    context @ ParseContext::ScheduleNeedsMoreTime {
                        missing: ScheduleField::StartTime,
                        ..
                    },
                ),
            session_id,
            ..
        } => (context, session_id),
        other => panic!("expected start question, got {other:?}"),
    };

    match parser.parse_follow_up("6pm to 7pm", context, id, &[]) {
        ParseResult::ScheduleItem(item) => {
            let days: BTreeSet<DayOfWeek> =
                [DayOfWeek::Tuesday, DayOfWeek::Thursday].into_iter().collect();
            assert_eq!(item.title, "Yoga");
            assert_eq!(item.days, days);
            assert_eq!(item.start_time, Some(hm(18, 0)));
            assert_eq!(item.end_time, Some(hm(19, 0)));
        }
        other => panic!("expected schedule item, got {other:?}"),
    }
}

#[test]
fn requested_reminder_is_asked_last() {
    let (parser, _clock) = parser();
    let first = parser.parse("bio lecture MWF 10am to 11am, remind me", &[], &[]);
    let (context, id) = match first {
        ParseResult::NeedsMoreInfo {
            context: Some(context @ ParseContext::ScheduleNeedsReminder { .. }),
            session_id,
            ..
        } => (context, session_id),
        other => panic!("expected reminder question, got {other:?}"),
    };

    match parser.parse_follow_up("10 minutes", context, id, &[]) {
        ParseResult::ScheduleItem(item) => {
            assert_eq!(item.reminder, Some(Reminder { minutes_before: 10 }));
            assert_eq!(item.start_time, Some(hm(10, 0)));
        }
        other => panic!("expected schedule item, got {other:?}"),
    }
}
