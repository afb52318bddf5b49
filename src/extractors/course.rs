//! Course matching against the host's known courses.
//!
//! Strategies, first match wins:
//! 1. a course-name token (≥ 3 chars) appears in the input;
//! 2. a subject abbreviation in the input ("calc", "cs") expands to words
//!    found in a course name;
//! 3. conservative fuzzy containment between tokens of ≥ 4 chars.

use super::{contains_word, title_case, word_tokens};
use crate::types::KnownCourse;

/// Minimum course-name token length for direct matching.
const MIN_DIRECT_TOKEN: usize = 3;
/// Minimum token length on both sides for fuzzy matching.
const MIN_FUZZY_TOKEN: usize = 4;
/// How many course names a clarifying question lists.
pub const PROMPT_COURSE_LIMIT: usize = 5;

/// Tokens too common to identify a course on their own.
const STOP_WORDS: &[&str] = &["the", "and", "for", "intro", "introduction"];

/// Subject abbreviations and the course-name words they stand for.
const ABBREVIATIONS: &[(&str, &[&str])] = &[
    ("calc", &["calculus"]),
    ("chem", &["chemistry"]),
    ("ochem", &["organic"]),
    ("orgo", &["organic"]),
    ("bio", &["biology"]),
    ("phys", &["physics"]),
    ("cs", &["computer", "science", "programming"]),
    ("compsci", &["computer"]),
    ("comp sci", &["computer"]),
    ("econ", &["economics"]),
    ("psych", &["psychology"]),
    ("stats", &["statistics"]),
    ("stat", &["statistics"]),
    ("hist", &["history"]),
    ("lit", &["literature"]),
    ("eng", &["english", "engineering"]),
    ("math", &["math", "calculus", "algebra", "geometry", "statistics"]),
    ("gov", &["government"]),
    ("polisci", &["political"]),
    ("poli sci", &["political"]),
    ("soc", &["sociology"]),
    ("phil", &["philosophy"]),
    ("anthro", &["anthropology"]),
    ("astro", &["astronomy"]),
];

/// Subject vocabulary used when the host supplies no course list.
const SUBJECTS: &[&str] = &[
    "computer science",
    "calculus",
    "chemistry",
    "biology",
    "physics",
    "history",
    "english",
    "geography",
    "economics",
    "psychology",
    "statistics",
    "philosophy",
    "sociology",
    "engineering",
    "marketing",
    "finance",
    "anthropology",
    "astronomy",
    "neuroscience",
    "journalism",
    "robotics",
    "nutrition",
    "algebra",
    "geometry",
    "business",
    "drama",
    "music",
    "logic",
    "ethics",
    "math",
    "art",
    "law",
];

fn course_tokens(name: &str, min_len: usize) -> Vec<String> {
    word_tokens(name)
        .into_iter()
        .filter(|t| t.chars().count() >= min_len && !STOP_WORDS.contains(&t.as_str()))
        .collect()
}

/// Best known course for the text.
pub fn match_course<'a>(text: &str, courses: &'a [KnownCourse]) -> Option<&'a KnownCourse> {
    let lower = text.to_lowercase();

    let direct = courses.iter().find(|course| {
        course_tokens(&course.name, MIN_DIRECT_TOKEN)
            .iter()
            .any(|token| lower.contains(token.as_str()))
    });
    if direct.is_some() {
        return direct;
    }

    let by_abbreviation = ABBREVIATIONS
        .iter()
        .filter(|(abbr, _)| contains_word(&lower, abbr))
        .find_map(|(_, words)| {
            courses.iter().find(|course| {
                let name = course.name.to_lowercase();
                words.iter().any(|w| name.contains(w))
            })
        });
    if by_abbreviation.is_some() {
        return by_abbreviation;
    }

    let input_tokens: Vec<String> = word_tokens(&lower)
        .into_iter()
        .filter(|t| t.chars().count() >= MIN_FUZZY_TOKEN)
        .collect();
    courses.iter().find(|course| {
        course_tokens(&course.name, MIN_FUZZY_TOKEN).iter().any(|c| {
            input_tokens
                .iter()
                .any(|i| i.contains(c.as_str()) || c.contains(i.as_str()))
        })
    })
}

/// Subject name from the fixed vocabulary, title-cased.
///
/// Abbreviations expand to their first subject word ("calc" → "Calculus").
pub fn vocabulary_course(text: &str) -> Option<String> {
    let lower = text.to_lowercase();
    if let Some(subject) = SUBJECTS.iter().find(|s| contains_word(&lower, s)) {
        return Some(title_case(subject));
    }
    ABBREVIATIONS
        .iter()
        .find(|(abbr, _)| contains_word(&lower, abbr))
        .and_then(|(abbr, words)| match *abbr {
            "cs" | "compsci" | "comp sci" => Some("Computer Science".to_owned()),
            _ => words.first().map(|w| title_case(w)),
        })
}

/// Up to [`PROMPT_COURSE_LIMIT`] course names, comma-separated.
pub fn course_examples(courses: &[KnownCourse]) -> String {
    courses
        .iter()
        .take(PROMPT_COURSE_LIMIT)
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
