//! Range-keyed collections
//!
//! Two flavors with different invariants and lookup rules:
//! - [`ContiguousDiscreteRangeMap`]: ranges abut with no gaps (per-instrument timelines)
//! - [`NonContiguousRangeMap`]: ranges may leave gaps but never overlap (symbol index)

mod contiguous;
mod discrete;
mod key_range;
mod non_contiguous;

pub use contiguous::ContiguousDiscreteRangeMap;
pub use discrete::DiscreteDomain;
pub use key_range::{DateRange, KeyRange};
pub use non_contiguous::{NonContiguousRangeMap, NonContiguousRangeMapBuilder};
