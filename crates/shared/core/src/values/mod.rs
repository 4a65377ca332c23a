use chrono::{DateTime, NaiveDate, Utc};

mod instrument_id;
mod symbol;

pub use instrument_id::InstrumentId;
pub use symbol::Symbol;

/// Calendar date used for validity ranges and as-of lookups
pub type Date = NaiveDate;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;
