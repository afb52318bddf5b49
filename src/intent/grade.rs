//! Grade reports: "I got 95% on the Midterm in Calculus".

use super::{Step, Turn};
use crate::extractors::assignment::extract_assignment_name;
use crate::extractors::course::{match_course, vocabulary_course};
use crate::extractors::grade::{extract_grade, has_bare_number, has_explicit_grade};
use crate::extractors::weight::{extract_initial_weight, strip_weight_phrases};
use crate::extractors::{contains_word, word_tokens};
use crate::prompts;
use crate::types::{KnownCourse, ParseContext, ParseResult, ParsedGrade};

/// Past-tense verbs that report a grade.
const GRADE_VERBS: &[&str] = &["got", "received", "earned", "scored", "made", "achieved"];

/// Nouns that open the gate on their own and make a bare number read as a grade.
const GRADE_NOUNS: &[&str] = &[
    "grade", "graded", "score", "mark", "marks", "result", "results",
];

/// Fields of a grade record gathered so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeDraft {
    /// Normalized grade.
    pub grade: String,
    /// Course, once known.
    pub course_name: Option<String>,
    /// Assignment, once known.
    pub assignment_name: Option<String>,
    /// Weight, once known.
    pub weight: Option<String>,
}

impl GradeDraft {
    /// Ask for the first missing field (course, assignment, weight) or finish.
    pub fn resolve(self, courses: &[KnownCourse]) -> Step {
        let Some(course_name) = self.course_name else {
            return Step::ask(
                ParseContext::GradeNeedsCourse {
                    grade: self.grade,
                    assignment_name: self.assignment_name,
                    weight: self.weight,
                },
                courses,
            );
        };
        let Some(assignment_name) = self.assignment_name else {
            return Step::ask(
                ParseContext::GradeNeedsAssignmentName {
                    grade: self.grade,
                    course_name,
                    weight: self.weight,
                },
                courses,
            );
        };
        match self.weight {
            None => Step::ask(
                ParseContext::GradeNeedsWeight {
                    grade: self.grade,
                    course_name,
                    assignment_name,
                },
                courses,
            ),
            weight => Step::Done(ParseResult::Grade(ParsedGrade {
                course_name,
                assignment_name,
                grade: self.grade,
                weight,
            })),
        }
    }
}

/// Course named in the text: a known course, or the subject vocabulary when
/// the host supplied none.
pub fn find_course(text: &str, courses: &[KnownCourse]) -> Option<String> {
    if courses.is_empty() {
        return vocabulary_course(text);
    }
    match_course(text, courses).map(|course| course.name.clone())
}

fn passes_gate(turn: &Turn<'_>) -> bool {
    let lower = turn.text.to_lowercase();
    let tokens = word_tokens(&lower);
    let signalled = GRADE_VERBS
        .iter()
        .chain(GRADE_NOUNS)
        .any(|s| tokens.iter().any(|t| t == s));
    if !signalled {
        return false;
    }
    let scored = strip_weight_phrases(turn.text);
    if has_explicit_grade(&scored) {
        return true;
    }
    let grade_noun = GRADE_NOUNS.iter().any(|n| contains_word(&lower, n));
    let assignment = extract_assignment_name(turn.text).is_some();
    if has_bare_number(&scored) {
        return assignment || grade_noun || find_course(turn.text, turn.courses).is_some();
    }
    grade_noun && assignment
}

/// Classify a grade report.
pub fn classify(turn: &Turn<'_>) -> Option<Step> {
    if !passes_gate(turn) {
        return None;
    }

    let reading = extract_grade(&strip_weight_phrases(turn.text));
    if !reading.is_confident() {
        return Some(Step::Ask {
            prompt: prompts::RESTATE_GRADE.to_owned(),
            context: None,
        });
    }

    let draft = GradeDraft {
        grade: reading.normalized,
        course_name: find_course(turn.text, turn.courses),
        assignment_name: extract_assignment_name(turn.text),
        weight: extract_initial_weight(turn.text),
    };
    Some(draft.resolve(turn.courses))
}
