//! Days-of-week extraction for recurring schedules.
//!
//! Precedence:
//! 1. A day range ("Monday through Friday", "mon-fri") overrides everything.
//! 2. Individual day names. An abbreviation ("sat", "wed") only counts after
//!    "on", "every" or "each", or directly next to another day in a list.
//! 3. Only when no individual day matched: compound shorthands (MWF, MW,
//!    TTh/TR, weekdays, weekends, daily).
//!
//! Individual hits and compound shorthands are never mixed.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::date::weekday_from_name;
use super::literal_regex;
use crate::types::DayOfWeek;

const DAY_PATTERN: &str = "sundays?|mondays?|tuesdays?|wednesdays?|thursdays?|fridays?|saturdays?|sun|mon|tues|tue|wed|thurs|thur|thu|fri|sat";

static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    literal_regex(&format!(
        r"(?i)\b({DAY_PATTERN})\s*(?:through|thru|to|until|-|–)\s*({DAY_PATTERN})\b"
    ))
});

static DAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    literal_regex(&format!(
        r"(?i)\b(?:(on|every|each)\s+)?({DAY_PATTERN})\b"
    ))
});

/// Text allowed between two days of one list: "mon, wed and fri", "tue/thu".
static LIST_GAP_RE: LazyLock<Regex> =
    LazyLock::new(|| literal_regex(r"(?i)^(?:[\s,/&+]|\band\b|\bor\b)*$"));

static COMPOUNDS: LazyLock<Vec<(Regex, BTreeSet<DayOfWeek>)>> = LazyLock::new(|| {
    use DayOfWeek::{Friday, Monday, Thursday, Tuesday, Wednesday};
    vec![
        (
            literal_regex(r"(?i)\bmwf\b"),
            [Monday, Wednesday, Friday].into_iter().collect(),
        ),
        (
            literal_regex(r"(?i)\bmw\b"),
            [Monday, Wednesday].into_iter().collect(),
        ),
        (
            literal_regex(r"(?i)\b(?:tth|tuth|tr|t/th)\b"),
            [Tuesday, Thursday].into_iter().collect(),
        ),
        (literal_regex(r"(?i)\bweekdays?\b"), DayOfWeek::weekdays()),
        (literal_regex(r"(?i)\bweekends?\b"), DayOfWeek::weekend()),
        (
            literal_regex(r"(?i)\b(?:daily|every\s*day|each\s+day)\b"),
            DayOfWeek::every_day(),
        ),
    ]
});

/// Inclusive, wrapping range of days.
fn day_range(from: DayOfWeek, to: DayOfWeek) -> BTreeSet<DayOfWeek> {
    let mut days = BTreeSet::new();
    let mut day = from;
    for _ in 0..DayOfWeek::ALL.len() {
        days.insert(day);
        if day == to {
            break;
        }
        day = day.succ();
    }
    days
}

/// Days named in the text; empty when none.
pub fn extract_days(text: &str) -> BTreeSet<DayOfWeek> {
    if let Some(caps) = RANGE_RE.captures(text) {
        let from = caps.get(1).and_then(|m| weekday_from_name(m.as_str()));
        let to = caps.get(2).and_then(|m| weekday_from_name(m.as_str()));
        if let (Some(from), Some(to)) = (from, to) {
            return day_range(from, to);
        }
    }

    let individual = individual_days(text);
    if !individual.is_empty() {
        return individual;
    }

    COMPOUNDS
        .iter()
        .find(|(re, _)| re.is_match(text))
        .map(|(_, days)| days.clone())
        .unwrap_or_default()
}

/// One day mention found by [`DAY_RE`].
struct Mention {
    day: DayOfWeek,
    start: usize,
    end: usize,
    trusted: bool,
}

fn individual_days(text: &str) -> BTreeSet<DayOfWeek> {
    let mentions: Vec<Mention> = DAY_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let name = caps.get(2)?;
            let day = weekday_from_name(name.as_str())?;
            let full = name
                .as_str()
                .to_lowercase()
                .trim_end_matches('s')
                .eq_ignore_ascii_case(day.name());
            Some(Mention {
                day,
                start: name.start(),
                end: name.end(),
                trusted: full || caps.get(1).is_some(),
            })
        })
        .collect();

    let listed = |a: &Mention, b: &Mention| {
        text.get(a.end..b.start)
            .is_some_and(|gap| LIST_GAP_RE.is_match(gap))
    };
    mentions
        .iter()
        .enumerate()
        .filter(|(i, mention)| {
            mention.trusted
                || i.checked_sub(1)
                    .and_then(|prev| mentions.get(prev))
                    .is_some_and(|prev| listed(prev, mention))
                || i.checked_add(1)
                    .and_then(|next| mentions.get(next))
                    .is_some_and(|next| listed(mention, next))
        })
        .map(|(_, mention)| mention.day)
        .collect()
}
