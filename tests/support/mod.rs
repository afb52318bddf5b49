//! Shared fixtures: a frozen clock, a parser wired to it, and reference lists.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use quickadd::clock::FixedClock;
use quickadd::{IntentParser, KnownCategory, KnownCourse, ParseResult};

/// Wednesday 2026-03-04 12:00.
pub fn wednesday_noon() -> NaiveDateTime {
    match NaiveDate::from_ymd_opt(2026, 3, 4).and_then(|d| d.and_hms_opt(12, 0, 0)) {
        Some(now) => now,
        None => panic!("fixture date should be valid"),
    }
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    match NaiveDate::from_ymd_opt(y, m, d).and_then(|d| d.and_hms_opt(h, min, 0)) {
        Some(dt) => dt,
        None => panic!("fixture datetime should be valid"),
    }
}

pub fn hm(h: u32, m: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(h, m, 0) {
        Some(t) => t,
        None => panic!("fixture time should be valid"),
    }
}

/// Parser frozen at [`wednesday_noon`], plus the clock to advance it.
pub fn parser() -> (IntentParser, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::at(wednesday_noon()));
    let parser = IntentParser::default().with_clock(clock.clone());
    (parser, clock)
}

pub fn courses() -> Vec<KnownCourse> {
    [
        ("Calculus II", "course-calc"),
        ("Intro to Computer Science", "course-cs"),
        ("Organic Chemistry", "course-ochem"),
        ("World History", "course-hist"),
    ]
    .iter()
    .map(|(name, id)| KnownCourse {
        name: (*name).to_owned(),
        id: (*id).to_owned(),
    })
    .collect()
}

pub fn categories() -> Vec<KnownCategory> {
    [
        ("Exams", "cat-exams"),
        ("Assignments", "cat-assignments"),
        ("Labs", "cat-labs"),
        ("Personal", "cat-personal"),
    ]
    .iter()
    .map(|(name, id)| KnownCategory {
        name: (*name).to_owned(),
        id: (*id).to_owned(),
    })
    .collect()
}

/// Same result with any session id blanked out.
pub fn without_session(result: ParseResult) -> ParseResult {
    match result {
        ParseResult::NeedsMoreInfo {
            prompt,
            original_input,
            context,
            ..
        } => ParseResult::NeedsMoreInfo {
            prompt,
            original_input,
            context,
            session_id: None,
        },
        other => other,
    }
}
