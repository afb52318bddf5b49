//! Event conversations: date first, then reminder.

use quickadd::{ParseContext, ParseResult, ParsedEvent, Reminder};

use crate::support::{at, categories, parser};

#[test]
fn dated_event_asks_reminder_then_completes() {
    let (parser, _clock) = parser();
    let cats = categories();
    let first = parser.parse("dentist appointment tomorrow at 3pm", &cats, &[]);
    let (context, id) = match first {
        ParseResult::NeedsMoreInfo {
            context: Some(context @ ParseContext::EventNeedsReminder { .. }),
            session_id,
            ..
        } => (context, session_id),
        other => panic!("expected reminder question, got {other:?}"),
    };

    let done = parser.parse_follow_up("30 minutes before", context, id, &[]);
    assert_eq!(
        done,
        ParseResult::Event(ParsedEvent {
            title: "Dentist appointment".to_owned(),
            date: Some(at(2026, 3, 5, 15, 0)),
            category_name: Some("Personal".to_owned()),
            reminder: Some(Reminder { minutes_before: 30 }),
        })
    );
}

#[test]
fn undated_event_asks_date_before_reminder() {
    let (parser, _clock) = parser();
    let first = parser.parse("I have a calc exam", &categories(), &[]);
    let (context, id) = match first {
        ParseResult::NeedsMoreInfo {
            context: Some(context @ ParseContext::EventNeedsDate { .. }),
            session_id,
            ..
        } => (context, session_id),
        other => panic!("expected date question, got {other:?}"),
    };

    let second = parser.parse_follow_up("next tuesday at 9am", context, id, &[]);
    let (context, id) = match second {
        ParseResult::NeedsMoreInfo {
            context: Some(context @ ParseContext::EventNeedsReminder { .. }),
            session_id,
            ..
        } => (context, session_id),
        other => panic!("expected reminder question, got {other:?}"),
    };

    match parser.parse_follow_up("no thanks", context, id, &[]) {
        ParseResult::Event(event) => {
            assert_eq!(event.title, "Calc exam");
            assert_eq!(event.date, Some(at(2026, 3, 10, 9, 0)));
            assert_eq!(event.category_name.as_deref(), Some("Exams"));
            assert_eq!(event.reminder, None);
        }
        other => panic!("expected event, got {other:?}"),
    }
}
