//! Day-of-week extraction precedence.

use std::collections::BTreeSet;

use quickadd::extractors::days::extract_days;
use quickadd::DayOfWeek::{self, Friday, Monday, Saturday, Sunday, Thursday, Tuesday, Wednesday};

fn set(days: &[DayOfWeek]) -> BTreeSet<DayOfWeek> {
    days.iter().copied().collect()
}

#[test]
fn mwf_is_exactly_three_days() {
    assert_eq!(extract_days("MWF"), set(&[Monday, Wednesday, Friday]));
    assert_eq!(extract_days("bio lecture mwf 10am"), set(&[Monday, Wednesday, Friday]));
}

#[test]
fn monday_through_friday_overrides_other_days() {
    let weekdays = set(&[Monday, Tuesday, Wednesday, Thursday, Friday]);
    assert_eq!(extract_days("Monday through Friday"), weekdays);
    assert_eq!(
        extract_days("work Monday through Friday, and sunday brunch"),
        weekdays
    );
    assert_eq!(extract_days("monday to friday"), weekdays);
}

#[test]
fn individual_days_win_over_compounds() {
    assert_eq!(extract_days("tuesday and thursday"), set(&[Tuesday, Thursday]));
    assert_eq!(extract_days("MW and also friday"), set(&[Friday]));
}

#[test]
fn weekend_and_daily() {
    assert_eq!(extract_days("weekends"), set(&[Saturday, Sunday]));
    assert_eq!(extract_days("every day"), DayOfWeek::every_day());
}

#[test]
fn lone_abbreviation_in_prose_is_not_a_day() {
    assert!(extract_days("I sat in class every week").is_empty());
    assert!(extract_days("my sun hat, wed to nothing").is_empty());
    assert_eq!(extract_days("swim on sat and sun"), set(&[Saturday, Sunday]));
    assert_eq!(extract_days("class every wed"), set(&[Wednesday]));
}
