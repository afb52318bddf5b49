//! `IntentParser::parse` contract: kinds, idempotence, empty input.

use quickadd::clock::Clock;
use quickadd::{ParseResult, ParsedGrade, ResultKind};

use crate::support::{categories, courses, parser, without_session};

#[test]
fn blank_input_is_not_attempted() {
    let (parser, _clock) = parser();
    assert_eq!(parser.parse("", &[], &[]), ParseResult::NotAttempted);
    assert_eq!(parser.parse("   \t  ", &[], &[]), ParseResult::NotAttempted);
    assert!(parser.sessions().is_empty());
}

#[test]
fn chatter_is_unrecognized() {
    let (parser, _clock) = parser();
    match parser.parse("hello there", &categories(), &courses()) {
        ParseResult::Unrecognized {
            original_input,
            message,
        } => {
            assert_eq!(original_input, "hello there");
            assert_eq!(message, None);
        }
        other => panic!("expected unrecognized, got {other:?}"),
    }
}

#[test]
fn complete_grade_in_one_turn() {
    let (parser, _clock) = parser();
    let result = parser.parse("I got a B+ on the calc final, worth 30%", &[], &courses());
    assert_eq!(
        result,
        ParseResult::Grade(ParsedGrade {
            course_name: "Calculus II".to_owned(),
            assignment_name: "Final".to_owned(),
            grade: "B+".to_owned(),
            weight: Some("30".to_owned()),
        })
    );
}

#[test]
fn same_input_same_result() {
    let (parser, _clock) = parser();
    let cats = categories();
    let list = courses();
    for text in [
        "calc exam on friday at 10am",
        "I got 95% on the Midterm in Calculus",
        "chem lab every tuesday and thursday 2pm to 3:30pm",
        "hello there",
    ] {
        let first = without_session(parser.parse(text, &cats, &list));
        let second = without_session(parser.parse(text, &cats, &list));
        assert_eq!(first, second, "{text}");
    }
}

#[test]
fn question_opens_one_session() {
    let (parser, clock) = parser();
    let result = parser.parse("calc exam on friday at 10am", &categories(), &[]);
    assert_eq!(result.kind(), ResultKind::NeedsMoreInfo);
    let id = match result.session_id() {
        Some(id) => id,
        None => panic!("a question should carry a session"),
    };
    assert_eq!(parser.sessions().len(), 1);
    assert!(parser.sessions().check(&id, clock.now()).is_ok());
}

#[test]
fn overlong_input_is_truncated() {
    let (parser, _clock) = parser();
    let long = format!("hello {}", "x".repeat(500));
    match parser.parse(&long, &[], &[]) {
        ParseResult::Unrecognized { original_input, .. } => {
            assert_eq!(
                original_input.chars().count(),
                parser.settings().max_input_len
            );
        }
        other => panic!("expected unrecognized, got {other:?}"),
    }
}

#[test]
fn present_tense_get_reaches_event_path() {
    let (parser, _clock) = parser();
    match parser.parse("Get the 2 art project pieces done on friday", &categories(), &[]) {
        ParseResult::NeedsMoreInfo {
            context: Some(context),
            ..
        } => assert!(
            matches!(context, quickadd::ParseContext::EventNeedsReminder { .. }),
            "{context:?}"
        ),
        other => panic!("expected event reminder question, got {other:?}"),
    }
}
