//! Input sanitizing applied before any heuristic runs.

/// Length cap for a first-turn utterance, in characters.
pub const MAX_INPUT_LEN: usize = 200;

/// Length cap for a follow-up answer, in characters.
pub const MAX_FOLLOW_UP_LEN: usize = 100;

/// Collapse whitespace runs to single spaces, trim, and cap at `max_len` chars.
///
/// Whitespace-only input yields an empty string, which callers treat as
/// "nothing to parse".
pub fn sanitize(raw: &str, max_len: usize) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_len {
        return collapsed;
    }
    let truncated: String = collapsed.chars().take(max_len).collect();
    truncated.trim_end().to_owned()
}
