use tickermap_core::{Date, Timestamp};

/// Port for time abstraction
///
/// This allows the system to use different time sources:
/// - Real system time for production
/// - Fixed time for deterministic tests and historical replays
pub trait Clock: Send + Sync {
    /// Get the current time according to this clock
    fn now(&self) -> Timestamp;

    /// Calendar date of `now()` in UTC, the implicit as-of date of queries
    fn today(&self) -> Date {
        self.now().date_naive()
    }

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}
