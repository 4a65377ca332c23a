//! Fallback composition of instrument masters

use std::sync::Arc;

use log::trace;
use tickermap_core::{Date, InstrumentId, Symbol};
use tickermap_ports::{InstrumentMaster, InstrumentMasterResult};

/// Tries several masters in order; the first non-empty answer wins
///
/// Each query cascades on its own: `get_instrument_id` may be answered by
/// the second master right after `get_symbol` was answered by the first.
/// An error from any master stops the cascade and is returned as-is.
pub struct CascadingInstrumentMaster {
    masters: Vec<Arc<dyn InstrumentMaster>>,
}

impl CascadingInstrumentMaster {
    /// Masters are consulted in the order given
    pub fn new(masters: Vec<Arc<dyn InstrumentMaster>>) -> Self {
        Self { masters }
    }

    /// Append a lower-priority fallback
    pub fn with_fallback(mut self, master: Arc<dyn InstrumentMaster>) -> Self {
        self.masters.push(master);
        self
    }

    pub fn len(&self) -> usize {
        self.masters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masters.is_empty()
    }

    fn first_match<T>(
        &self,
        query: impl Fn(&dyn InstrumentMaster) -> InstrumentMasterResult<Option<T>>,
    ) -> InstrumentMasterResult<Option<T>> {
        for master in &self.masters {
            if let Some(found) = query(master.as_ref())? {
                trace!("Resolved by {}", master.name());
                return Ok(Some(found));
            }
        }
        Ok(None)
    }
}

impl InstrumentMaster for CascadingInstrumentMaster {
    fn get_instrument_id(
        &self,
        symbol: &Symbol,
        date: Date,
    ) -> InstrumentMasterResult<Option<InstrumentId>> {
        self.first_match(|master| master.get_instrument_id(symbol, date))
    }

    fn get_symbol(
        &self,
        instrument_id: &InstrumentId,
        date: Date,
    ) -> InstrumentMasterResult<Option<Symbol>> {
        self.first_match(|master| master.get_symbol(instrument_id, date))
    }

    fn get_latest_valid_symbol(
        &self,
        instrument_id: &InstrumentId,
        date: Date,
    ) -> InstrumentMasterResult<Option<Symbol>> {
        self.first_match(|master| master.get_latest_valid_symbol(instrument_id, date))
    }

    fn name(&self) -> &str {
        "CascadingInstrumentMaster"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tickermap_ports::{InstrumentMasterError, SupplierError};

    /// Answers from fixed tables, ignoring dates, and counts calls
    #[derive(Default)]
    struct TableMaster {
        ids: HashMap<String, String>,
        symbols: HashMap<String, String>,
        latest: HashMap<String, String>,
        calls: AtomicUsize,
    }

    impl TableMaster {
        fn id(mut self, symbol: &str, id: &str) -> Self {
            self.ids.insert(symbol.into(), id.into());
            self
        }

        fn symbol(mut self, id: &str, symbol: &str) -> Self {
            self.symbols.insert(id.into(), symbol.into());
            self
        }

        fn latest(mut self, id: &str, symbol: &str) -> Self {
            self.latest.insert(id.into(), symbol.into());
            self
        }
    }

    impl InstrumentMaster for TableMaster {
        fn get_instrument_id(
            &self,
            symbol: &Symbol,
            _date: Date,
        ) -> InstrumentMasterResult<Option<InstrumentId>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.ids.get(symbol.as_str()).map(InstrumentId::new))
        }

        fn get_symbol(
            &self,
            instrument_id: &InstrumentId,
            _date: Date,
        ) -> InstrumentMasterResult<Option<Symbol>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.symbols.get(instrument_id.as_str()).map(Symbol::new))
        }

        fn get_latest_valid_symbol(
            &self,
            instrument_id: &InstrumentId,
            _date: Date,
        ) -> InstrumentMasterResult<Option<Symbol>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.latest.get(instrument_id.as_str()).map(Symbol::new))
        }
    }

    struct BrokenMaster;

    impl InstrumentMaster for BrokenMaster {
        fn get_instrument_id(
            &self,
            _symbol: &Symbol,
            _date: Date,
        ) -> InstrumentMasterResult<Option<InstrumentId>> {
            Err(SupplierError::Source("unreachable".to_string()).into())
        }

        fn get_symbol(
            &self,
            _instrument_id: &InstrumentId,
            _date: Date,
        ) -> InstrumentMasterResult<Option<Symbol>> {
            Err(SupplierError::Source("unreachable".to_string()).into())
        }

        fn get_latest_valid_symbol(
            &self,
            _instrument_id: &InstrumentId,
            _date: Date,
        ) -> InstrumentMasterResult<Option<Symbol>> {
            Err(SupplierError::Source("unreachable".to_string()).into())
        }
    }

    fn today() -> Date {
        Date::from_ymd_opt(2024, 1, 2).unwrap()
    }

    #[test]
    fn test_first_match_wins() {
        let primary = Arc::new(TableMaster::default().id("A", "FROM_PRIMARY"));
        let fallback = Arc::new(TableMaster::default().id("A", "FROM_FALLBACK"));
        let cascade = CascadingInstrumentMaster::new(vec![
            primary.clone() as Arc<dyn InstrumentMaster>,
            fallback.clone(),
        ]);

        assert_eq!(
            cascade.get_instrument_id(&Symbol::new("A"), today()),
            Ok(Some(InstrumentId::new("FROM_PRIMARY")))
        );
        assert_eq!(fallback.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_methods_cascade_independently() {
        let primary = Arc::new(TableMaster::default().symbol("STOCK_A", "A"));
        let fallback = Arc::new(
            TableMaster::default()
                .id("A", "STOCK_A")
                .symbol("STOCK_A", "IGNORED")
                .latest("STOCK_A", "AX"),
        );
        let cascade = CascadingInstrumentMaster::new(vec![primary as Arc<dyn InstrumentMaster>])
            .with_fallback(fallback);
        let stock_a = InstrumentId::new("STOCK_A");

        assert_eq!(
            cascade.get_symbol(&stock_a, today()),
            Ok(Some(Symbol::new("A")))
        );
        assert_eq!(
            cascade.get_instrument_id(&Symbol::new("A"), today()),
            Ok(Some(stock_a.clone()))
        );
        assert_eq!(
            cascade.get_latest_valid_symbol(&stock_a, today()),
            Ok(Some(Symbol::new("AX")))
        );
    }

    #[test]
    fn test_all_empty_is_empty() {
        let cascade = CascadingInstrumentMaster::new(vec![
            Arc::new(TableMaster::default()) as Arc<dyn InstrumentMaster>,
            Arc::new(TableMaster::default()),
            Arc::new(TableMaster::default()),
        ]);
        assert_eq!(cascade.len(), 3);
        assert_eq!(
            cascade.get_symbol(&InstrumentId::new("X"), today()),
            Ok(None)
        );

        let nothing = CascadingInstrumentMaster::new(Vec::new());
        assert!(nothing.is_empty());
        assert_eq!(
            nothing.get_instrument_id(&Symbol::new("X"), today()),
            Ok(None)
        );
    }

    #[test]
    fn test_error_stops_the_cascade() {
        let fallback = Arc::new(TableMaster::default().id("A", "STOCK_A"));
        let cascade = CascadingInstrumentMaster::new(vec![
            Arc::new(BrokenMaster) as Arc<dyn InstrumentMaster>,
            fallback.clone(),
        ]);

        assert!(matches!(
            cascade.get_instrument_id(&Symbol::new("A"), today()),
            Err(InstrumentMasterError::Supplier(_))
        ));
        assert_eq!(fallback.calls.load(Ordering::SeqCst), 0);
    }
}
