//! Snapshot supplier that loads, indexes and memoizes per as-of date

use std::sync::Arc;
use std::time::Instant;

use log::{debug, info, warn};
use tickermap_core::{Date, IndexedSnapshot, UnindexedSnapshot};
use tickermap_ports::{AllInstrumentMasterDataSupplier, FactSource, SupplierResult};

use crate::cache::CachingSupplier;

/// Builds the indexed snapshot for each as-of date at most once
///
/// On first request for a date, facts are loaded from the source, grouped
/// into timelines and indexed by symbol. The result is shared by every
/// later request for the same date, including ones that arrive while the
/// build is still running.
pub struct IndexingDataSupplier<S> {
    source: S,
    snapshots: CachingSupplier<Date, Arc<IndexedSnapshot>>,
}

impl<S: FactSource> IndexingDataSupplier<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            snapshots: CachingSupplier::new(),
        }
    }

    /// Number of as-of dates with a cached snapshot
    pub fn cached_dates(&self) -> usize {
        self.snapshots.len()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn build_snapshot(&self, date: Date) -> SupplierResult<Arc<IndexedSnapshot>> {
        let started = Instant::now();

        let facts = self.source.facts_as_of(date)?;
        debug!("Loaded {} symbol facts as of {}", facts.len(), date);

        let unindexed = UnindexedSnapshot::from_periods(facts)?;
        let snapshot = IndexedSnapshot::new(unindexed)?;

        info!(
            "Built master data snapshot as of {}: {} instruments, {} symbols in {:?}",
            date,
            snapshot.unindexed().len(),
            snapshot.index().len(),
            started.elapsed()
        );

        Ok(Arc::new(snapshot))
    }
}

impl<S: FactSource> AllInstrumentMasterDataSupplier for IndexingDataSupplier<S> {
    fn get_all_master_data_as_of(&self, date: Date) -> SupplierResult<Arc<IndexedSnapshot>> {
        self.snapshots
            .get_or_compute(date, || self.build_snapshot(date))
            .inspect_err(|e| warn!("Master data snapshot as of {} not built: {}", date, e))
    }
}
