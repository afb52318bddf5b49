//! Clock times, time ranges and durations.

use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::{Captures, Regex};

use super::{literal_regex, numbers};

const SECS_PER_MINUTE: u32 = 60;
const SECS_PER_HOUR: u32 = 3600;

/// Morning or afternoon marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    /// Before noon.
    Am,
    /// Noon and after.
    Pm,
}

impl Meridiem {
    fn parse(marker: &str) -> Option<Self> {
        match marker.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('a') => Some(Self::Am),
            Some('p') => Some(Self::Pm),
            _ => None,
        }
    }
}

/// Clock time: hour with optional `:mm` and optional am/pm.
static CLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    literal_regex(r"(?i)\b(\d{1,2})(?::([0-5]\d))?\s*(?:([ap])\.?\s?m\b\.?)?")
});

/// `<start> [am|pm] (to|-|until) <end> [am|pm]`.
static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    literal_regex(
        r"(?i)\b(\d{1,2})(?::([0-5]\d))?\s*(?:([ap])\.?\s?m\.?)?\s*(?:to|until|till|through|-|–)\s*(\d{1,2})(?::([0-5]\d))?\s*(?:([ap])\.?\s?m\b\.?)?",
    )
});

static NOON_RE: LazyLock<Regex> = LazyLock::new(|| literal_regex(r"(?i)\b(noon|midday|midnight)\b"));

/// `for N (hour|hr|minute|min)s`, with an optional `.5`.
static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    literal_regex(
        r"(?i)\bfor\s+(\d+|an?|one|two|three|four|five|six|ten|fifteen|twenty|thirty|forty|fifty)(?:\.(5))?\s*(hours?|hrs?|minutes?|mins?)\b",
    )
});

/// Apply the 12-hour rules: pm keeps 12 and adds 12 otherwise; am maps 12 to 0.
pub fn to_24_hour(hour: u32, meridiem: Option<Meridiem>) -> Option<u32> {
    match meridiem {
        None => (hour <= 23).then_some(hour),
        Some(_) if !(1..=12).contains(&hour) => None,
        Some(Meridiem::Pm) if hour == 12 => Some(12),
        Some(Meridiem::Pm) => hour.checked_add(12),
        Some(Meridiem::Am) if hour == 12 => Some(0),
        Some(Meridiem::Am) => Some(hour),
    }
}

fn build_time(hour: &str, minute: Option<&str>, meridiem: Option<Meridiem>) -> Option<NaiveTime> {
    let hour = to_24_hour(hour.parse().ok()?, meridiem)?;
    let minute = match minute {
        Some(m) => m.parse().ok()?,
        None => 0,
    };
    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn group<'t>(caps: &Captures<'t>, index: usize) -> Option<&'t str> {
    caps.get(index).map(|m| m.as_str())
}

/// First clock time in the text.
///
/// A bare number counts only with `:mm` or an am/pm marker, so dates and
/// counts are not read as times. "noon" and "midnight" are recognized.
pub fn extract_time(text: &str) -> Option<NaiveTime> {
    let clock = CLOCK_RE.captures_iter(text).find_map(|caps| {
        let minute = group(&caps, 2);
        let meridiem = group(&caps, 3).and_then(Meridiem::parse);
        if minute.is_none() && meridiem.is_none() {
            return None;
        }
        build_time(group(&caps, 1)?, minute, meridiem)
    });
    clock.or_else(|| {
        let word = NOON_RE.captures(text)?.get(1)?.as_str().to_lowercase();
        if word == "midnight" {
            NaiveTime::from_hms_opt(0, 0, 0)
        } else {
            NaiveTime::from_hms_opt(12, 0, 0)
        }
    })
}

/// First `start to end` range.
///
/// The end must carry am/pm unless both ends are written as `h:mm`. A start
/// without a marker inherits the end's marker.
pub fn extract_time_range(text: &str) -> Option<(NaiveTime, NaiveTime)> {
    RANGE_RE.captures_iter(text).find_map(|caps| {
        let start_minute = group(&caps, 2);
        let end_minute = group(&caps, 5);
        let end_meridiem = group(&caps, 6).and_then(Meridiem::parse);
        let start_meridiem = group(&caps, 3).and_then(Meridiem::parse).or(end_meridiem);

        let both_clock = start_minute.is_some() && end_minute.is_some();
        if end_meridiem.is_none() && !both_clock {
            return None;
        }

        let start = build_time(group(&caps, 1)?, start_minute, start_meridiem)?;
        let end = build_time(group(&caps, 4)?, end_minute, end_meridiem)?;
        Some((start, end))
    })
}

/// `for N hours|minutes`, in seconds.
pub fn extract_duration_secs(text: &str) -> Option<u32> {
    let caps = DURATION_RE.captures(text)?;
    let amount = numbers::quantity(group(&caps, 1)?)?;
    let unit = group(&caps, 3)?.to_lowercase();
    let unit_secs = if unit.starts_with('h') {
        SECS_PER_HOUR
    } else {
        SECS_PER_MINUTE
    };
    let half = if group(&caps, 2).is_some() {
        unit_secs.checked_div(2)?
    } else {
        0
    };
    amount.checked_mul(unit_secs)?.checked_add(half)
}
