//! Manually driven clock for deterministic time.
//!
//! Services take any [`mockable::Clock`]; production hosts pass
//! [`mockable::DefaultClock`]. [`ManualClock`] pins time to a chosen instant
//! and only moves when told to, which makes calendar-day bucketing and
//! due-date windows reproducible.

use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::Clock;
use std::sync::{Arc, RwLock};

/// Clock that reports a fixed instant until advanced.
///
/// Clones share the same underlying instant.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<RwLock<DateTime<Utc>>>,
}

impl ManualClock {
    /// Creates a clock pinned at `now`.
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(RwLock::new(now)),
        }
    }

    /// Moves the clock to `now`.
    pub fn set(&self, now: DateTime<Utc>) {
        match self.now.write() {
            Ok(mut guard) => *guard = now,
            Err(poisoned) => *poisoned.into_inner() = now,
        }
    }

    /// Moves the clock forward by `delta`.
    pub fn advance(&self, delta: TimeDelta) {
        let next = self.current() + delta;
        self.set(next);
    }

    fn current(&self) -> DateTime<Utc> {
        match self.now.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

impl Clock for ManualClock {
    fn local(&self) -> DateTime<Local> {
        self.current().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.current()
    }
}
