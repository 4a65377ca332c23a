//! Instrument master data: per-instrument timelines, snapshots and the
//! symbol index derived from them

mod index;
mod indexer;
mod snapshot;
mod symbol_period;
mod timeline;

pub use index::SymbolIndex;
pub use indexer::InstrumentMasterIndexer;
pub use snapshot::{IndexedSnapshot, UnindexedSnapshot};
pub use symbol_period::SymbolPeriod;
pub use timeline::InstrumentTimeline;
