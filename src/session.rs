//! Time-bounded registry of in-progress conversations.
//!
//! A session maps an opaque [`Uuid`] to the instant its conversation started.
//! It is live while `now - created < timeout`. Expired entries are swept
//! lazily by [`SessionStore::purge_expired`] before every parse call; there is
//! no background timer.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

/// Default conversation lifetime in seconds.
pub const DEFAULT_SESSION_TIMEOUT_SECS: u64 = 300;

/// Why a referenced session cannot continue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The id was never issued, already completed, or already swept.
    #[error("That conversation is no longer active.")]
    Unknown(Uuid),
    /// The session outlived the timeout.
    #[error("That conversation timed out after {age_secs} seconds.")]
    Expired {
        /// Session id.
        id: Uuid,
        /// Age at the time of the check.
        age_secs: i64,
    },
}

/// Thread-safe session map.
///
/// Uses a sync [`Mutex`]; every lock covers a single map operation and is
/// never held across parsing.
#[derive(Debug)]
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, DateTime<Utc>>>,
    timeout: Duration,
}

impl SessionStore {
    /// Create an empty store whose sessions live for `timeout_secs`.
    pub fn new(timeout_secs: u64) -> Self {
        let secs = i64::try_from(timeout_secs).unwrap_or(i64::MAX);
        Self {
            sessions: Mutex::new(HashMap::new()),
            timeout: Duration::try_seconds(secs).unwrap_or(Duration::MAX),
        }
    }

    /// Open a session created at `now` and return its id.
    pub fn start(&self, now: DateTime<Utc>) -> Uuid {
        let id = Uuid::new_v4();
        if let Ok(mut map) = self.sessions.lock() {
            map.insert(id, now);
        }
        debug!(session_id = %id, "conversation session started");
        id
    }

    /// Check that `id` is known and still live at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Unknown`] for ids not in the store and
    /// [`SessionError::Expired`] when the session has reached the timeout.
    pub fn check(&self, id: &Uuid, now: DateTime<Utc>) -> Result<(), SessionError> {
        let created = match self.sessions.lock() {
            Ok(map) => map.get(id).copied(),
            Err(_) => None,
        };
        let Some(created) = created else {
            return Err(SessionError::Unknown(*id));
        };

        let age = now.signed_duration_since(created);
        if age >= self.timeout {
            debug!(session_id = %id, age_secs = age.num_seconds(), "conversation session expired");
            return Err(SessionError::Expired {
                id: *id,
                age_secs: age.num_seconds(),
            });
        }
        Ok(())
    }

    /// Forget a session; returns whether it existed.
    pub fn remove(&self, id: &Uuid) -> bool {
        let removed = match self.sessions.lock() {
            Ok(mut map) => map.remove(id).is_some(),
            Err(_) => false,
        };
        if removed {
            debug!(session_id = %id, "conversation session closed");
        }
        removed
    }

    /// Drop every session that is no longer live at `now`; returns how many.
    pub fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let purged = match self.sessions.lock() {
            Ok(mut map) => {
                let before = map.len();
                let timeout = self.timeout;
                map.retain(|_, created| now.signed_duration_since(*created) < timeout);
                before.saturating_sub(map.len())
            }
            Err(_) => 0,
        };
        if purged > 0 {
            debug!(purged, "expired conversation sessions purged");
        }
        purged
    }

    /// Number of tracked sessions, live or not yet swept.
    pub fn len(&self) -> usize {
        match self.sessions.lock() {
            Ok(map) => map.len(),
            Err(_) => 0,
        }
    }

    /// Whether no sessions are tracked.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_TIMEOUT_SECS)
    }
}
