use std::sync::Arc;

use tickermap_core::{Date, IndexedSnapshot, SymbolPeriod};

use crate::error::SupplierResult;

/// Port for obtaining the indexed snapshot current as of a date
///
/// Implementations are expected to memoize: building a snapshot is
/// expensive, and the same as-of date is requested by every query that day.
pub trait AllInstrumentMasterDataSupplier: Send + Sync {
    fn get_all_master_data_as_of(&self, date: Date) -> SupplierResult<Arc<IndexedSnapshot>>;
}

/// Port for loading raw symbol facts
///
/// Backed by files, databases or fixed in-memory lists.
pub trait FactSource: Send + Sync {
    /// All facts known as of `date`
    fn facts_as_of(&self, date: Date) -> SupplierResult<Vec<SymbolPeriod>>;
}
