//! Clock adapters

use application::ports::Clock;
use chrono::{DateTime, TimeDelta, Utc};
use parking_lot::Mutex;

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to
///
/// Lets cache expiry be exercised without sleeping.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Start the clock at `start`
    #[must_use]
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Jump to an absolute instant
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.now.lock() = instant;
    }

    /// Move the clock forward (or back, for a negative delta)
    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.lock();
        *now += delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}
