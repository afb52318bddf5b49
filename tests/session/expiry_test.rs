//! A follow-up after the timeout ends the conversation.

use chrono::Duration;
use quickadd::{ParseContext, ParseResult};

use crate::support::{courses, parser};

fn weight_question(parser: &quickadd::IntentParser) -> (ParseContext, Option<uuid::Uuid>) {
    match parser.parse("I got 95% on the Midterm in Calculus", &[], &courses()) {
        ParseResult::NeedsMoreInfo {
            context: Some(context),
            session_id,
            ..
        } => (context, session_id),
        other => panic!("expected weight question, got {other:?}"),
    }
}

#[test]
fn answer_after_timeout_is_rejected() {
    let (parser, clock) = parser();
    let (context, id) = weight_question(&parser);

    clock.advance(Duration::seconds(301));
    match parser.parse_follow_up("20%", context, id, &courses()) {
        ParseResult::Unrecognized {
            message: Some(message),
            ..
        } => {
            assert!(message.contains("timed out"), "{message}");
            assert!(message.contains("start over"), "{message}");
        }
        other => panic!("expected expiry, got {other:?}"),
    }
    assert!(parser.sessions().is_empty());
}

#[test]
fn answer_just_before_timeout_is_accepted() {
    let (parser, clock) = parser();
    let (context, id) = weight_question(&parser);

    clock.advance(Duration::seconds(299));
    let result = parser.parse_follow_up("20%", context, id, &courses());
    assert!(matches!(result, ParseResult::Grade(_)), "{result:?}");
}

#[test]
fn unknown_session_is_rejected() {
    let (parser, _clock) = parser();
    let (context, _) = weight_question(&parser);

    match parser.parse_follow_up("20%", context, Some(uuid::Uuid::new_v4()), &courses()) {
        ParseResult::Unrecognized {
            message: Some(message),
            ..
        } => assert!(message.contains("no longer active"), "{message}"),
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn new_parse_sweeps_expired_sessions() {
    let (parser, clock) = parser();
    let _ = weight_question(&parser);
    assert_eq!(parser.sessions().len(), 1);

    clock.advance(Duration::minutes(10));
    let _ = parser.parse("hello there", &[], &[]);
    assert!(parser.sessions().is_empty());
}

#[test]
fn follow_up_without_session_still_advances() {
    let (parser, _clock) = parser();
    let (context, _) = weight_question(&parser);
    let result = parser.parse_follow_up("no", context, None, &courses());
    assert!(matches!(result, ParseResult::Grade(_)), "{result:?}");
}
