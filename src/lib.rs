//! QuickAdd: natural-language quick entry for events, class schedules and grades.
//!
//! Turns a line such as "chem lab every tuesday and thursday 2pm to 3:30pm"
//! into a structured record, or into one follow-up question when something
//! is missing. Follow-up answers are routed back with the returned context
//! until the record is complete, cancelled, or the session times out.
//!
//! Entry point: [`IntentParser`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod clock;
pub mod config;
pub mod conversation;
pub mod extractors;
pub mod intent;
pub mod logging;
pub mod normalizer;
pub mod parser;
pub mod prompts;
pub mod robustness;
pub mod session;
pub mod types;

pub use parser::IntentParser;
pub use robustness::{Perturbation, TestResult};
pub use types::{
    DayOfWeek, KnownCategory, KnownCourse, ParseContext, ParseResult, ParsedEvent, ParsedGrade,
    ParsedScheduleItem, Reminder, ResultKind,
};
