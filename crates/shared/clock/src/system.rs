use chrono::{FixedOffset, Offset, Utc};
use tickermap_core::{Date, Timestamp};
use tickermap_ports::Clock;

/// Wall clock for production use
///
/// `today()` is the calendar date at the configured UTC offset, so a master
/// serving one market rolls over to the next snapshot at that market's
/// midnight rather than at UTC midnight.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    /// Wall clock whose day boundary is UTC midnight
    pub fn new() -> Self {
        Self::with_offset(Utc.fix())
    }

    /// Wall clock whose day boundary is midnight at `offset`
    pub fn with_offset(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn today(&self) -> Date {
        self.now().with_timezone(&self.offset).date_naive()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}
