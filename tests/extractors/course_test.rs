//! Course and category matching against reference lists.

use quickadd::extractors::category::match_category;
use quickadd::extractors::course::match_course;

use crate::support::{categories, courses};

fn course_id(text: &str) -> Option<String> {
    let list = courses();
    match_course(text, &list).map(|c| c.id.clone())
}

#[test]
fn direct_abbreviation_and_fuzzy() {
    assert_eq!(course_id("my history essay").as_deref(), Some("course-hist"));
    assert_eq!(course_id("calc quiz").as_deref(), Some("course-calc"));
    assert_eq!(course_id("compsci project").as_deref(), Some("course-cs"));
    assert_eq!(course_id("orgo midterm").as_deref(), Some("course-ochem"));
    assert_eq!(course_id("chemistry lab").as_deref(), Some("course-ochem"));
}

#[test]
fn unmatched_course_is_none() {
    assert_eq!(course_id("pottery midterm"), None);
}

#[test]
fn categories_by_name_then_bucket() {
    let list = categories();
    let name = |text: &str| match_category(text, &list).map(|c| c.name.clone());
    assert_eq!(name("lab report due friday").as_deref(), Some("Labs"));
    assert_eq!(name("midterm on monday").as_deref(), Some("Exams"));
    assert_eq!(name("homework due tomorrow").as_deref(), Some("Assignments"));
    assert_eq!(name("haircut saturday").as_deref(), Some("Personal"));
    assert_eq!(name("coffee with sam"), None);
}
