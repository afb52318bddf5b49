//! Date extraction: explicit calendar dates first, relative phrases second.
//!
//! [`detect_date`] recognizes written-out dates ("March 15", "3/15",
//! "2026-03-15", "15th of March"). When it finds nothing, relative phrases
//! are tried: "today", "tonight", "tomorrow", "next week", "in N days", and
//! "this/next/on <weekday>". A clock time anywhere in the text is combined
//! with the date into one timestamp.

use std::sync::LazyLock;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use regex::{Captures, Regex};

use super::time::extract_time;
use super::{contains_word, literal_regex, numbers};
use crate::types::DayOfWeek;

/// Hour used for "tonight" when no clock time is given.
pub const TONIGHT_HOUR: u32 = 20;

const MONTHS: &str = "january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sept|sep|oct|nov|dec";

static ISO_RE: LazyLock<Regex> =
    LazyLock::new(|| literal_regex(r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b"));

static MONTH_DAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    literal_regex(&format!(
        r"(?i)\b({MONTHS})\.?\s+(\d{{1,2}})(?:st|nd|rd|th)?\b(?:,?\s+(\d{{4}}))?"
    ))
});

static DAY_MONTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    literal_regex(&format!(
        r"(?i)\b(\d{{1,2}})(?:st|nd|rd|th)?\s+(?:of\s+)?({MONTHS})\b(?:,?\s+(\d{{4}}))?"
    ))
});

static NUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| literal_regex(r"\b(\d{1,2})/(\d{1,2})(?:/(\d{4}|\d{2}))?\b"));

static IN_N_RE: LazyLock<Regex> = LazyLock::new(|| {
    literal_regex(r"(?i)\bin\s+(\d+|an?|one|two|three|four|five|six|seven|eight|nine|ten)\s+(days?|weeks?)\b")
});

static WEEKDAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    literal_regex(
        r"(?i)\b(?:(this|next|on)\s+)?(sunday|monday|tuesday|wednesday|thursday|friday|saturday|sun|mon|tues|tue|wed|thurs|thur|thu|fri|sat)\b",
    )
});

/// Weekday name or abbreviation to day.
pub fn weekday_from_name(name: &str) -> Option<DayOfWeek> {
    let lower = name.to_lowercase();
    let day = match lower.trim_end_matches('s') {
        "sunday" | "sun" => DayOfWeek::Sunday,
        "monday" | "mon" => DayOfWeek::Monday,
        "tuesday" | "tue" | "tues" | "tu" => DayOfWeek::Tuesday,
        "wednesday" | "wed" => DayOfWeek::Wednesday,
        "thursday" | "thu" | "thur" | "thurs" | "th" => DayOfWeek::Thursday,
        "friday" | "fri" => DayOfWeek::Friday,
        "saturday" | "sat" => DayOfWeek::Saturday,
        _ => return None,
    };
    Some(day)
}

fn month_from_name(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    let month = match lower.get(..3)? {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// Build a date; without an explicit year, roll a date already past into next year.
fn resolve_date(year: Option<i32>, month: u32, day: u32, today: NaiveDate) -> Option<NaiveDate> {
    if let Some(year) = year {
        return NaiveDate::from_ymd_opt(year, month, day);
    }
    let this_year = NaiveDate::from_ymd_opt(today.year(), month, day)?;
    if this_year < today {
        NaiveDate::from_ymd_opt(today.year().checked_add(1)?, month, day)
    } else {
        Some(this_year)
    }
}

fn parse_year(caps: &Captures<'_>, index: usize) -> Option<Option<i32>> {
    match caps.get(index) {
        None => Some(None),
        Some(m) => {
            let year: i32 = m.as_str().parse().ok()?;
            if m.as_str().len() == 2 {
                Some(Some(year.checked_add(2000)?))
            } else {
                Some(Some(year))
            }
        }
    }
}

fn number(caps: &Captures<'_>, index: usize) -> Option<u32> {
    caps.get(index)?.as_str().parse().ok()
}

/// Explicit calendar date written in the text.
pub fn detect_date(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    if let Some(caps) = ISO_RE.captures(text) {
        let year: i32 = caps.get(1)?.as_str().parse().ok()?;
        if let Some(date) = NaiveDate::from_ymd_opt(year, number(&caps, 2)?, number(&caps, 3)?) {
            return Some(date);
        }
    }
    let month_day = MONTH_DAY_RE.captures_iter(text).find_map(|caps| {
        let month = month_from_name(caps.get(1)?.as_str())?;
        resolve_date(parse_year(&caps, 3)?, month, number(&caps, 2)?, today)
    });
    if month_day.is_some() {
        return month_day;
    }
    let day_month = DAY_MONTH_RE.captures_iter(text).find_map(|caps| {
        let month = month_from_name(caps.get(2)?.as_str())?;
        resolve_date(parse_year(&caps, 3)?, month, number(&caps, 1)?, today)
    });
    if day_month.is_some() {
        return day_month;
    }
    NUMERIC_RE.captures_iter(text).find_map(|caps| {
        resolve_date(parse_year(&caps, 3)?, number(&caps, 1)?, number(&caps, 2)?, today)
    })
}

/// Days from `today` to the requested weekday.
///
/// "this"/"on"/bare: nearest occurrence from today on. "next": this week's
/// occurrence plus seven, so a day already past lands on the coming one.
fn weekday_offset(today: NaiveDate, target: DayOfWeek, qualifier: Option<&str>) -> u64 {
    let current = u64::from(DayOfWeek::from(today.weekday()).ordinal());
    let target = u64::from(target.ordinal());
    let this_week = 7u64.saturating_add(target).saturating_sub(current);
    match qualifier {
        Some("next") => this_week,
        _ => this_week.checked_rem(7).unwrap_or(0),
    }
}

/// Relative date phrase, resolved against `today`.
pub fn relative_date(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let lower = text.to_lowercase();

    if contains_word(&lower, "today") || contains_word(&lower, "tonight") {
        return Some(today);
    }
    if ["tomorrow", "tmrw", "tmr", "tmw"]
        .iter()
        .any(|w| contains_word(&lower, w))
    {
        return today.checked_add_days(Days::new(1));
    }
    if lower.contains("next week") {
        return today.checked_add_days(Days::new(7));
    }
    if let Some(caps) = IN_N_RE.captures(&lower) {
        let amount = u64::from(numbers::quantity(caps.get(1)?.as_str())?);
        let days = if caps.get(2)?.as_str().starts_with("week") {
            amount.checked_mul(7)?
        } else {
            amount
        };
        return today.checked_add_days(Days::new(days));
    }
    WEEKDAY_RE.captures_iter(&lower).find_map(|caps| {
        let qualifier = caps.get(1).map(|m| m.as_str());
        let day = weekday_from_name(caps.get(2)?.as_str())?;
        // Abbreviations like "sat" or "wed" only count with a qualifier.
        if qualifier.is_none() && !is_full_name(day, &caps) {
            return None;
        }
        today.checked_add_days(Days::new(weekday_offset(today, day, qualifier)))
    })
}

fn is_full_name(day: DayOfWeek, caps: &Captures<'_>) -> bool {
    caps.get(2)
        .is_some_and(|m| m.as_str().eq_ignore_ascii_case(day.name()))
}

/// Date and time mentioned in the text.
///
/// Explicit dates win over relative phrases. A clock time without any date
/// means today, or tomorrow when that time has already passed. When only a
/// date is found, `default_hour` (or [`TONIGHT_HOUR`] for "tonight") is used.
pub fn extract_date(text: &str, now: NaiveDateTime, default_hour: u32) -> Option<NaiveDateTime> {
    let today = now.date();
    let time = extract_time(text);
    let date = detect_date(text, today).or_else(|| relative_date(text, today));

    match (date, time) {
        (Some(date), Some(time)) => Some(date.and_time(time)),
        (Some(date), None) => {
            let hour = if contains_word(&text.to_lowercase(), "tonight") {
                TONIGHT_HOUR
            } else {
                default_hour
            };
            Some(date.and_time(NaiveTime::from_hms_opt(hour, 0, 0)?))
        }
        (None, Some(time)) => {
            let candidate = today.and_time(time);
            if candidate < now {
                Some(today.checked_add_days(Days::new(1))?.and_time(time))
            } else {
                Some(candidate)
            }
        }
        (None, None) => None,
    }
}
