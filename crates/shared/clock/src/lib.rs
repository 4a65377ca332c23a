//! Tickermap Clock Infrastructure
//!
//! Provides the time source that decides "today" for instrument master
//! queries:
//!
//! - [`SystemClock`]: wall-clock time, for production
//! - [`FixedClock`]: settable time, for tests and historical replays
//!
//! ## Usage
//!
//! ```ignore
//! use tickermap_clock::{Clock, FixedClock};
//! use chrono::NaiveDate;
//!
//! let clock = FixedClock::on_date(NaiveDate::from_ymd_opt(1976, 6, 6).unwrap());
//! assert_eq!(clock.today().to_string(), "1976-06-06");
//! clock.advance_days(1);
//! ```

mod fixed;
mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use tickermap_ports::Clock;
