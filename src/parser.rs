//! Public entry points: first-turn parsing, follow-ups and the robustness run.
//!
//! The parser is synchronous and does no I/O. Its only mutable state is the
//! [`SessionStore`], which is safe to share across threads, so one
//! `IntentParser` can serve concurrent callers behind an `Arc`.

use std::sync::Arc;

use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::config::{Config, ParserSettings, RobustnessSettings};
use crate::conversation;
use crate::intent::{self, Step, Turn};
use crate::normalizer::sanitize;
use crate::prompts;
use crate::robustness::{self, TestResult};
use crate::session::SessionStore;
use crate::types::{KnownCategory, KnownCourse, ParseContext, ParseResult};

/// Natural-language parser for events, schedule items and grades.
#[derive(Debug)]
pub struct IntentParser {
    sessions: SessionStore,
    settings: ParserSettings,
    robustness: RobustnessSettings,
    clock: Arc<dyn Clock>,
}

impl Default for IntentParser {
    fn default() -> Self {
        Self::new(ParserSettings::default())
    }
}

impl IntentParser {
    /// Parser with the given settings and the system clock.
    pub fn new(settings: ParserSettings) -> Self {
        Self {
            sessions: SessionStore::new(settings.session_timeout_secs),
            settings,
            robustness: RobustnessSettings::default(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Parser configured from a loaded [`Config`].
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.parser.clone()).with_robustness(config.robustness.clone())
    }

    /// Replace the time source.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the robustness harness settings.
    #[must_use]
    pub fn with_robustness(mut self, robustness: RobustnessSettings) -> Self {
        self.robustness = robustness;
        self
    }

    /// Active settings.
    pub fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    /// Session registry, exposed for inspection.
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Parse a first-turn utterance.
    pub fn parse(
        &self,
        text: &str,
        categories: &[KnownCategory],
        courses: &[KnownCourse],
    ) -> ParseResult {
        self.sessions.purge_expired(self.clock.now());

        let input = sanitize(text, self.settings.max_input_len);
        if input.is_empty() {
            return ParseResult::NotAttempted;
        }

        let turn = Turn {
            text: &input,
            now: self.clock.local_now(),
            categories,
            courses,
            settings: &self.settings,
        };
        match intent::classify(&turn) {
            Some(step) => self.finish(step, &input, None),
            None => ParseResult::Unrecognized {
                original_input: input,
                message: None,
            },
        }
    }

    /// Continue a conversation with the answer to a previous question.
    ///
    /// A referenced session is checked before anything else; an expired or
    /// unknown session ends the conversation regardless of the answer.
    pub fn parse_follow_up(
        &self,
        text: &str,
        context: ParseContext,
        session_id: Option<Uuid>,
        courses: &[KnownCourse],
    ) -> ParseResult {
        let now = self.clock.now();
        if let Some(id) = session_id {
            if let Err(err) = self.sessions.check(&id, now) {
                self.sessions.remove(&id);
                return ParseResult::Unrecognized {
                    original_input: sanitize(text, self.settings.max_follow_up_len),
                    message: Some(format!("{err} Please start over.")),
                };
            }
        }
        self.sessions.purge_expired(now);

        let input = sanitize(text, self.settings.max_follow_up_len);
        if input.is_empty() {
            return ParseResult::NotAttempted;
        }

        if input.to_lowercase().contains("cancel") {
            if let Some(id) = session_id {
                self.sessions.remove(&id);
            }
            return ParseResult::Unrecognized {
                original_input: input,
                message: Some(prompts::CANCELLED.to_owned()),
            };
        }

        let turn = Turn {
            text: &input,
            now: self.clock.local_now(),
            categories: &[],
            courses,
            settings: &self.settings,
        };
        let step = conversation::advance(context, &turn);
        self.finish(step, &input, session_id)
    }

    /// Parse `text` and a set of perturbations of it, reporting whether each
    /// perturbation lands on the same kind of result.
    ///
    /// Runs against a private session store; no live session is created.
    pub fn run_robustness_tests(
        &self,
        text: &str,
        categories: &[KnownCategory],
        courses: &[KnownCourse],
    ) -> Vec<TestResult> {
        let scratch = Self {
            sessions: SessionStore::new(self.settings.session_timeout_secs),
            settings: self.settings.clone(),
            robustness: self.robustness.clone(),
            clock: Arc::clone(&self.clock),
        };
        robustness::run(text, &self.robustness, |variant| {
            scratch.parse(variant, categories, courses).kind()
        })
    }

    /// Turn a step into a result, opening, keeping or closing the session.
    fn finish(&self, step: Step, input: &str, session_id: Option<Uuid>) -> ParseResult {
        match step {
            Step::Done(result) => {
                if let Some(id) = session_id {
                    self.sessions.remove(&id);
                }
                result
            }
            Step::Ask {
                prompt,
                context: Some(context),
            } => {
                let id = session_id.unwrap_or_else(|| self.sessions.start(self.clock.now()));
                ParseResult::NeedsMoreInfo {
                    prompt,
                    original_input: input.to_owned(),
                    context: Some(context),
                    session_id: Some(id),
                }
            }
            Step::Ask {
                prompt,
                context: None,
            } => {
                if let Some(id) = session_id {
                    self.sessions.remove(&id);
                }
                ParseResult::NeedsMoreInfo {
                    prompt,
                    original_input: input.to_owned(),
                    context: None,
                    session_id: None,
                }
            }
        }
    }
}
