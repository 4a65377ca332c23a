use std::collections::BTreeMap;

use super::{InstrumentMasterIndexer, InstrumentTimeline, SymbolIndex, SymbolPeriod};
use crate::error::{MasterDataError, Result};
use crate::values::InstrumentId;

/// Every instrument's timeline for one as-of date, without the reverse index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnindexedSnapshot {
    timelines: BTreeMap<InstrumentId, InstrumentTimeline>,
}

impl UnindexedSnapshot {
    /// Wrap a keyed map of timelines; each key must match its timeline
    pub fn new(timelines: BTreeMap<InstrumentId, InstrumentTimeline>) -> Result<Self> {
        if timelines.is_empty() {
            return Err(MasterDataError::EmptySnapshot);
        }
        for (key, timeline) in &timelines {
            if key != timeline.instrument_id() {
                return Err(MasterDataError::SnapshotKeyMismatch {
                    key: key.to_string(),
                    timeline: timeline.instrument_id().to_string(),
                });
            }
        }
        Ok(Self { timelines })
    }

    /// Key timelines by their own instrument id, rejecting duplicates
    pub fn from_timelines(timelines: impl IntoIterator<Item = InstrumentTimeline>) -> Result<Self> {
        let mut keyed = BTreeMap::new();
        for timeline in timelines {
            let id = timeline.instrument_id().clone();
            if keyed.insert(id.clone(), timeline).is_some() {
                return Err(MasterDataError::DuplicateInstrument(id.to_string()));
            }
        }
        Self::new(keyed)
    }

    /// Group a flat list of facts by instrument and build each timeline
    pub fn from_periods(periods: impl IntoIterator<Item = SymbolPeriod>) -> Result<Self> {
        let mut grouped: BTreeMap<InstrumentId, Vec<SymbolPeriod>> = BTreeMap::new();
        for period in periods {
            grouped
                .entry(period.instrument_id.clone())
                .or_default()
                .push(period);
        }

        let timelines = grouped
            .into_iter()
            .map(|(id, periods)| InstrumentTimeline::from_periods(id, periods))
            .collect::<Result<Vec<_>>>()?;

        Self::from_timelines(timelines)
    }

    pub fn get(&self, instrument_id: &InstrumentId) -> Option<&InstrumentTimeline> {
        self.timelines.get(instrument_id)
    }

    pub fn timelines(&self) -> impl Iterator<Item = &InstrumentTimeline> {
        self.timelines.values()
    }

    pub fn instrument_ids(&self) -> impl Iterator<Item = &InstrumentId> {
        self.timelines.keys()
    }

    pub fn len(&self) -> usize {
        self.timelines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timelines.is_empty()
    }
}

/// Timelines plus the symbol index derived from them
///
/// The unit a data supplier hands back for one as-of date. Immutable once
/// built, so it can be shared freely between readers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedSnapshot {
    unindexed: UnindexedSnapshot,
    index: SymbolIndex,
}

impl IndexedSnapshot {
    /// Derive the index from `unindexed`
    pub fn new(unindexed: UnindexedSnapshot) -> Result<Self> {
        let index = InstrumentMasterIndexer::new().generate_index(&unindexed)?;
        Ok(Self { unindexed, index })
    }

    /// Pair a snapshot with an externally built index
    ///
    /// Consistency between the two is the caller's responsibility.
    pub fn from_parts(unindexed: UnindexedSnapshot, index: SymbolIndex) -> Self {
        Self { unindexed, index }
    }

    pub fn unindexed(&self) -> &UnindexedSnapshot {
        &self.unindexed
    }

    pub fn index(&self) -> &SymbolIndex {
        &self.index
    }
}
