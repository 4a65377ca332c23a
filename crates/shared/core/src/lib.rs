//! Tickermap Core Domain
//!
//! Pure domain types for resolving instruments and ticker symbols at a
//! point in time. This crate contains no I/O and no locking, and is 100%
//! unit testable.
//!
//! Data flows upward:
//!
//! ```text
//! SymbolPeriod facts
//!     └── InstrumentTimeline (contiguous range map per instrument)
//!             └── UnindexedSnapshot (all timelines for one as-of date)
//!                     └── InstrumentMasterIndexer
//!                             └── SymbolIndex (non-contiguous range map per symbol)
//! IndexedSnapshot = UnindexedSnapshot + SymbolIndex
//! ```

pub mod error;
pub mod master_data;
pub mod ranges;
pub mod values;

pub use error::{MasterDataError, Result};
pub use master_data::{
    IndexedSnapshot, InstrumentMasterIndexer, InstrumentTimeline, SymbolIndex, SymbolPeriod,
    UnindexedSnapshot,
};
pub use ranges::{
    ContiguousDiscreteRangeMap, DateRange, DiscreteDomain, KeyRange, NonContiguousRangeMap,
    NonContiguousRangeMapBuilder,
};
pub use values::{Date, InstrumentId, Symbol, Timestamp};
