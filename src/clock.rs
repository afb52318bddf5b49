//! Time source for relative dates and session expiry.
//!
//! Production code uses [`SystemClock`]. Tests use [`FixedClock`] so that
//! "tomorrow" and the session timeout are deterministic.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Local, NaiveDateTime, Utc};

/// Source of the current time.
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// Current instant, used for session bookkeeping.
    fn now(&self) -> DateTime<Utc>;

    /// Current local wall-clock time, used to resolve relative dates.
    fn local_now(&self) -> NaiveDateTime;
}

/// Wall clock of the host machine.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn local_now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Manually driven clock. Local time equals UTC time.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    /// Freeze the clock at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Freeze the clock at a naive wall-clock time, interpreted as UTC.
    pub fn at(local: NaiveDateTime) -> Self {
        Self::new(local.and_utc())
    }

    /// Move the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        if let Ok(mut now) = self.now.lock() {
            *now = now.checked_add_signed(by).unwrap_or(*now);
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        match self.now.lock() {
            Ok(now) => *now,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    fn local_now(&self) -> NaiveDateTime {
        self.now().naive_utc()
    }
}
