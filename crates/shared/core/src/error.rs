//! Construction-time errors for core domain types

use thiserror::Error;

/// Invariant violations detected while building range maps, timelines,
/// snapshots or the symbol index.
///
/// These signal bad source data or a programming error. Nothing in the core
/// catches or retries them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MasterDataError {
    #[error("Range map must contain at least one range")]
    EmptyRangeMap,

    #[error("Range map needs one value per range: {ranges} ranges, {values} values")]
    LengthMismatch { ranges: usize, values: usize },

    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: String, end: String },

    #[error("Ranges are not contiguous: {previous} is followed by {next}")]
    NotContiguous { previous: String, next: String },

    #[error("Unbounded range {range} must be the last range (found at position {position})")]
    UnboundedNotLast { range: String, position: usize },

    #[error("Overlapping ranges: {first} and {second}")]
    Overlap { first: String, second: String },

    #[error("Conflicting periods for symbol {symbol}: {source}")]
    SymbolConflict {
        symbol: String,
        #[source]
        source: Box<MasterDataError>,
    },

    #[error("Invalid timeline for instrument {instrument_id}: {source}")]
    InvalidTimeline {
        instrument_id: String,
        #[source]
        source: Box<MasterDataError>,
    },

    #[error("Period for instrument {found} stored in timeline of instrument {expected}")]
    InstrumentMismatch { expected: String, found: String },

    #[error(
        "Period range {period_range} of instrument {instrument_id} does not match its map range {map_range}"
    )]
    PeriodRangeMismatch {
        instrument_id: String,
        map_range: String,
        period_range: String,
    },

    #[error("Snapshot key {key} does not match timeline instrument {timeline}")]
    SnapshotKeyMismatch { key: String, timeline: String },

    #[error("Duplicate timeline for instrument {0}")]
    DuplicateInstrument(String),

    #[error("Snapshot must contain at least one instrument")]
    EmptySnapshot,

    #[error("Symbol index must contain at least one symbol")]
    EmptyIndex,
}

pub type Result<T> = std::result::Result<T, MasterDataError>;
