//! Grade conversations: course, then assignment, then weight.

use quickadd::{ParseContext, ParseResult, ParsedGrade};
use uuid::Uuid;

use crate::support::{courses, parser};

fn question(result: ParseResult) -> (String, ParseContext, Uuid) {
    match result {
        ParseResult::NeedsMoreInfo {
            prompt,
            context: Some(context),
            session_id: Some(id),
            ..
        } => (prompt, context, id),
        other => panic!("expected a follow-up question, got {other:?}"),
    }
}

fn midterm(weight: Option<&str>) -> ParseResult {
    ParseResult::Grade(ParsedGrade {
        course_name: "Calculus II".to_owned(),
        assignment_name: "Midterm".to_owned(),
        grade: "95.0%".to_owned(),
        weight: weight.map(str::to_owned),
    })
}

#[test]
fn missing_weight_then_skip() {
    let (parser, _clock) = parser();
    let list = courses();
    let (_, context, id) =
        question(parser.parse("I got 95% on the Midterm in Calculus", &[], &list));
    assert!(matches!(context, ParseContext::GradeNeedsWeight { .. }));

    let done = parser.parse_follow_up("skip", context, Some(id), &list);
    assert_eq!(done, midterm(None));
}

#[test]
fn missing_weight_then_percentage() {
    let (parser, _clock) = parser();
    let list = courses();
    let (_, context, id) =
        question(parser.parse("I got 95% on the Midterm in Calculus", &[], &list));

    let done = parser.parse_follow_up("20%", context, Some(id), &list);
    assert_eq!(done, midterm(Some("20")));
}

#[test]
fn unusable_answer_repeats_question() {
    let (parser, _clock) = parser();
    let list = courses();
    let (prompt, context, id) =
        question(parser.parse("I got 95% on the Midterm in Calculus", &[], &list));

    let again = parser.parse_follow_up("what do you mean", context.clone(), Some(id), &list);
    let (prompt_again, context_again, id_again) = question(again);
    assert_eq!(prompt_again, prompt);
    assert_eq!(context_again, context);
    assert_eq!(id_again, id);
}

#[test]
fn fields_are_asked_one_at_a_time() {
    let (parser, _clock) = parser();
    let list = courses();

    let (prompt, context, id) = question(parser.parse("I got a B+", &[], &list));
    assert!(matches!(context, ParseContext::GradeNeedsCourse { .. }));
    assert!(prompt.contains("Calculus II"));

    let (_, context, id) = question(parser.parse_follow_up("world history", context, Some(id), &list));
    assert_eq!(
        context,
        ParseContext::GradeNeedsAssignmentName {
            grade: "B+".to_owned(),
            course_name: "World History".to_owned(),
            weight: None,
        }
    );

    let (_, context, id) = question(parser.parse_follow_up("the essay", context, Some(id), &list));
    assert!(matches!(context, ParseContext::GradeNeedsWeight { .. }));

    let done = parser.parse_follow_up("15", context, Some(id), &list);
    assert_eq!(
        done,
        ParseResult::Grade(ParsedGrade {
            course_name: "World History".to_owned(),
            assignment_name: "Essay".to_owned(),
            grade: "B+".to_owned(),
            weight: Some("15".to_owned()),
        })
    );
    assert!(parser.sessions().is_empty());
}

#[test]
fn cancel_discards_conversation() {
    let (parser, _clock) = parser();
    let list = courses();
    let (_, context, id) = question(parser.parse("I got a B+", &[], &list));

    let result = parser.parse_follow_up("never mind, cancel", context, Some(id), &list);
    assert!(matches!(
        result,
        ParseResult::Unrecognized {
            message: Some(_),
            ..
        }
    ));
    assert!(parser.sessions().is_empty());
}
