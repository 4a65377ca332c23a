use std::sync::Arc;

use chrono::{Duration, NaiveTime, TimeZone, Utc};
use parking_lot::RwLock;
use tickermap_core::{Date, Timestamp};
use tickermap_ports::Clock;

/// Clock that only moves when told to
///
/// Used for deterministic tests and for replaying resolution as of a past
/// date. Clones share the same underlying time.
#[derive(Debug, Clone)]
pub struct FixedClock {
    inner: Arc<RwLock<Timestamp>>,
}

impl FixedClock {
    /// Create a clock frozen at `time`
    pub fn at(time: Timestamp) -> Self {
        Self {
            inner: Arc::new(RwLock::new(time)),
        }
    }

    /// Create a clock frozen at midnight UTC of `date`
    pub fn on_date(date: Date) -> Self {
        Self::at(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
    }

    /// Move the clock to `time`
    pub fn set(&self, time: Timestamp) {
        *self.inner.write() = time;
    }

    /// Move the clock to midnight UTC of `date`
    pub fn set_date(&self, date: Date) {
        self.set(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
    }

    /// Jump forward (or back, for negative values) by whole days
    pub fn advance_days(&self, days: i64) {
        let mut time = self.inner.write();
        *time += Duration::days(days);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self.inner.read()
    }

    fn name(&self) -> &str {
        "FixedClock"
    }
}
