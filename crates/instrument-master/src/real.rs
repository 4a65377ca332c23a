//! Instrument master backed by the current indexed snapshot

use std::sync::Arc;

use tickermap_core::{Date, IndexedSnapshot, InstrumentId, Symbol};
use tickermap_ports::{
    AllInstrumentMasterDataSupplier, Clock, InstrumentMaster, InstrumentMasterResult,
};

/// Resolves symbols and instruments against today's snapshot
///
/// "Today" comes from the injected clock and picks which snapshot to use;
/// the `date` argument of each query picks the point in that snapshot's
/// history. Each query fetches the snapshot independently, so a master
/// that lives across midnight moves to the new day's data on its own.
pub struct RealInstrumentMaster {
    name: String,
    supplier: Arc<dyn AllInstrumentMasterDataSupplier>,
    clock: Arc<dyn Clock>,
}

impl RealInstrumentMaster {
    pub fn new(
        name: impl Into<String>,
        supplier: Arc<dyn AllInstrumentMasterDataSupplier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            name: name.into(),
            supplier,
            clock,
        }
    }

    fn current_snapshot(&self) -> InstrumentMasterResult<Arc<IndexedSnapshot>> {
        Ok(self
            .supplier
            .get_all_master_data_as_of(self.clock.today())?)
    }
}

impl InstrumentMaster for RealInstrumentMaster {
    fn get_instrument_id(
        &self,
        symbol: &Symbol,
        date: Date,
    ) -> InstrumentMasterResult<Option<InstrumentId>> {
        let snapshot = self.current_snapshot()?;
        Ok(snapshot.index().instrument_on(symbol.as_str(), &date).cloned())
    }

    fn get_symbol(
        &self,
        instrument_id: &InstrumentId,
        date: Date,
    ) -> InstrumentMasterResult<Option<Symbol>> {
        let snapshot = self.current_snapshot()?;
        Ok(snapshot
            .unindexed()
            .get(instrument_id)
            .and_then(|timeline| timeline.period_on(&date))
            .map(|period| period.symbol.clone()))
    }

    fn get_latest_valid_symbol(
        &self,
        instrument_id: &InstrumentId,
        date: Date,
    ) -> InstrumentMasterResult<Option<Symbol>> {
        let snapshot = self.current_snapshot()?;
        Ok(snapshot
            .unindexed()
            .get(instrument_id)
            .and_then(|timeline| timeline.latest_valid_period_on(&date))
            .map(|period| period.symbol.clone()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fact_source::InMemoryFactSource;
    use crate::supplier::IndexingDataSupplier;
    use tickermap_clock::FixedClock;
    use tickermap_core::{KeyRange, SymbolPeriod};
    use tickermap_ports::{FactSource, InstrumentMasterError, SupplierError, SupplierResult};

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd_opt(y, m, day).unwrap()
    }

    fn stock_a_master() -> RealInstrumentMaster {
        let source = InMemoryFactSource::new(vec![
            SymbolPeriod::new(
                "STOCK_A",
                "A",
                KeyRange::with_end(d(1974, 4, 4), d(1975, 5, 4)).unwrap(),
            ),
            SymbolPeriod::new(
                "STOCK_A",
                "AX",
                KeyRange::with_end(d(1975, 5, 5), d(1976, 6, 5)).unwrap(),
            ),
        ]);
        RealInstrumentMaster::new(
            "test",
            Arc::new(IndexingDataSupplier::new(source)),
            Arc::new(FixedClock::on_date(d(2024, 1, 2))),
        )
    }

    #[test]
    fn test_renamed_stock() {
        let master = stock_a_master();
        let stock_a = InstrumentId::new("STOCK_A");

        assert_eq!(master.get_symbol(&stock_a, d(1976, 6, 6)), Ok(None));
        assert_eq!(
            master.get_latest_valid_symbol(&stock_a, d(1976, 6, 6)),
            Ok(Some(Symbol::new("AX")))
        );
        assert_eq!(
            master.get_instrument_id(&Symbol::new("AX"), d(1976, 6, 6)),
            Ok(None)
        );
        assert_eq!(
            master.get_instrument_id(&Symbol::new("AX"), d(1975, 5, 5)),
            Ok(Some(stock_a.clone()))
        );
        assert_eq!(
            master.get_symbol(&stock_a, d(1975, 5, 4)),
            Ok(Some(Symbol::new("A")))
        );
    }

    #[test]
    fn test_no_backward_extension() {
        let master = stock_a_master();
        let stock_a = InstrumentId::new("STOCK_A");

        assert_eq!(master.get_symbol(&stock_a, d(1974, 4, 3)), Ok(None));
        assert_eq!(
            master.get_latest_valid_symbol(&stock_a, d(1974, 4, 3)),
            Ok(None)
        );
        assert_eq!(
            master.get_instrument_id(&Symbol::new("A"), d(1974, 4, 3)),
            Ok(None)
        );
    }

    #[test]
    fn test_unknown_keys_are_not_errors() {
        let master = stock_a_master();

        assert_eq!(
            master.get_symbol(&InstrumentId::new("NOPE"), d(1975, 1, 1)),
            Ok(None)
        );
        assert_eq!(
            master.get_latest_valid_symbol(&InstrumentId::new("NOPE"), d(1975, 1, 1)),
            Ok(None)
        );
        assert_eq!(
            master.get_instrument_id(&Symbol::new("NOPE"), d(1975, 1, 1)),
            Ok(None)
        );
        assert_eq!(master.name(), "test");
    }

    struct FailingSource;

    impl FactSource for FailingSource {
        fn facts_as_of(&self, _date: Date) -> SupplierResult<Vec<SymbolPeriod>> {
            Err(SupplierError::Source("database offline".to_string()))
        }
    }

    #[test]
    fn test_supplier_failure_propagates() {
        let master = RealInstrumentMaster::new(
            "failing",
            Arc::new(IndexingDataSupplier::new(FailingSource)),
            Arc::new(FixedClock::on_date(d(2024, 1, 2))),
        );

        assert_eq!(
            master.get_symbol(&InstrumentId::new("STOCK_A"), d(1975, 1, 1)),
            Err(InstrumentMasterError::Supplier(SupplierError::Source(
                "database offline".to_string()
            )))
        );
    }
}
