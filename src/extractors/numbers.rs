//! Small closed vocabulary of spelled-out numbers.

/// Number words accepted in follow-up answers, longest phrases first.
const NUMBER_WORDS: &[(&str, u32)] = &[
    ("twenty five", 25),
    ("twenty-five", 25),
    ("thirty five", 35),
    ("thirty-five", 35),
    ("forty five", 45),
    ("forty-five", 45),
    ("fifteen", 15),
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("twelve", 12),
    ("eleven", 11),
    ("three", 3),
    ("seven", 7),
    ("eight", 8),
    ("four", 4),
    ("five", 5),
    ("nine", 9),
    ("one", 1),
    ("two", 2),
    ("six", 6),
    ("ten", 10),
];

/// Value of a single number word or hyphenated/spaced compound, e.g. "twenty-five".
pub fn word_value(word: &str) -> Option<u32> {
    let lower = word.trim().to_lowercase();
    NUMBER_WORDS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, value)| *value)
}

/// First number word found anywhere in `lower`, preferring compounds.
pub fn find_number_word(lower: &str) -> Option<u32> {
    NUMBER_WORDS
        .iter()
        .find(|(name, _)| super::contains_word(lower, name))
        .map(|(_, value)| *value)
}

/// Parse a numeric token or a number word; "a"/"an" count as one.
pub fn quantity(token: &str) -> Option<u32> {
    let lower = token.trim().to_lowercase();
    if let Ok(n) = lower.parse::<u32>() {
        return Some(n);
    }
    match lower.as_str() {
        "a" | "an" => Some(1),
        other => word_value(other),
    }
}
