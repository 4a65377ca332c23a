use std::collections::BTreeMap;

use log::debug;

use super::{SymbolIndex, UnindexedSnapshot};
use crate::error::{MasterDataError, Result};
use crate::ranges::NonContiguousRangeMapBuilder;
use crate::values::{Date, InstrumentId, Symbol};

/// Inverts per-instrument timelines into a per-symbol index
#[derive(Debug, Clone, Copy, Default)]
pub struct InstrumentMasterIndexer;

impl InstrumentMasterIndexer {
    pub fn new() -> Self {
        Self
    }

    /// Build the symbol index for `snapshot`
    ///
    /// Every period of every timeline lands under its symbol. Adjacent
    /// periods for the same symbol are kept as separate ranges. Two periods
    /// claiming the same symbol on overlapping dates fail with
    /// [`MasterDataError::SymbolConflict`].
    pub fn generate_index(&self, snapshot: &UnindexedSnapshot) -> Result<SymbolIndex> {
        let mut builders: BTreeMap<Symbol, NonContiguousRangeMapBuilder<Date, InstrumentId>> =
            BTreeMap::new();
        let mut period_count = 0usize;

        for timeline in snapshot.timelines() {
            for period in timeline.periods().values() {
                builders
                    .entry(period.symbol.clone())
                    .or_default()
                    .push(period.range, period.instrument_id.clone());
                period_count += 1;
            }
        }

        let mut by_symbol = BTreeMap::new();
        for (symbol, builder) in builders {
            let ranges = builder
                .build()
                .map_err(|source| MasterDataError::SymbolConflict {
                    symbol: symbol.to_string(),
                    source: Box::new(source),
                })?;
            by_symbol.insert(symbol, ranges);
        }

        debug!(
            "Indexed {} periods of {} instruments under {} symbols",
            period_count,
            snapshot.len(),
            by_symbol.len()
        );

        SymbolIndex::new(by_symbol)
    }
}
