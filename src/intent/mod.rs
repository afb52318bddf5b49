//! Intent classifiers: grade, event and schedule, tried in that order.
//!
//! Each classifier has a keyword gate. When the gate passes the classifier
//! owns the input: it either completes a record or asks for the first missing
//! field. When no gate passes the input is unrecognized.

use chrono::NaiveDateTime;

use crate::config::ParserSettings;
use crate::prompts;
use crate::types::{KnownCategory, KnownCourse, ParseContext, ParseResult};

pub mod event;
pub mod grade;
pub mod schedule;

/// Everything a classifier or transition may look at for one turn.
#[derive(Debug, Clone, Copy)]
pub struct Turn<'a> {
    /// Sanitized input.
    pub text: &'a str,
    /// Local wall-clock time the turn is evaluated at.
    pub now: NaiveDateTime,
    /// Known categories, read-only.
    pub categories: &'a [KnownCategory],
    /// Known courses, read-only.
    pub courses: &'a [KnownCourse],
    /// Parser tuning.
    pub settings: &'a ParserSettings,
}

/// Outcome of one classifier or conversation step.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Terminal result; any open session ends.
    Done(ParseResult),
    /// Ask one question. With a context the conversation continues under a session.
    Ask {
        /// Question for the user.
        prompt: String,
        /// What is still missing, if the answer can be routed back.
        context: Option<ParseContext>,
    },
}

impl Step {
    /// Ask the question that belongs to `context`.
    pub fn ask(context: ParseContext, courses: &[KnownCourse]) -> Self {
        Self::Ask {
            prompt: prompts::question(&context, courses),
            context: Some(context),
        }
    }
}

/// Run the classifiers in priority order.
pub fn classify(turn: &Turn<'_>) -> Option<Step> {
    grade::classify(turn)
        .or_else(|| event::classify(turn))
        .or_else(|| schedule::classify(turn))
}
