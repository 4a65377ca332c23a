use std::collections::BTreeMap;

use crate::error::{MasterDataError, Result};
use crate::ranges::NonContiguousRangeMap;
use crate::values::{Date, InstrumentId, Symbol};

/// Reverse index: symbol -> date ranges -> instrument
///
/// Each symbol maps to a non-contiguous range map, since a ticker may go
/// unused for a while or pass to another instrument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolIndex {
    by_symbol: BTreeMap<Symbol, NonContiguousRangeMap<Date, InstrumentId>>,
}

impl SymbolIndex {
    pub fn new(
        by_symbol: BTreeMap<Symbol, NonContiguousRangeMap<Date, InstrumentId>>,
    ) -> Result<Self> {
        if by_symbol.is_empty() {
            return Err(MasterDataError::EmptyIndex);
        }
        Ok(Self { by_symbol })
    }

    /// Every range this symbol was in use, and by whom
    pub fn get(&self, symbol: &str) -> Option<&NonContiguousRangeMap<Date, InstrumentId>> {
        self.by_symbol.get(symbol)
    }

    /// Instrument holding `symbol` on `date`, strictly within a recorded range
    pub fn instrument_on(&self, symbol: &str, date: &Date) -> Option<&InstrumentId> {
        self.get(symbol)?.get(date)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.by_symbol.keys()
    }

    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (&Symbol, &NonContiguousRangeMap<Date, InstrumentId>)> {
        self.by_symbol.iter()
    }

    pub fn len(&self) -> usize {
        self.by_symbol.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_rejects_empty_index() {
        assert_eq!(SymbolIndex::new(BTreeMap::new()), Err(MasterDataError::EmptyIndex));
    }

    #[test]
    fn test_symbols_and_lookup() {
        let mut by_symbol = BTreeMap::new();
        by_symbol.insert(
            Symbol::new("B"),
            NonContiguousRangeMap::with_no_end(d(1980, 1, 1), InstrumentId::new("STOCK_B")),
        );
        by_symbol.insert(
            Symbol::new("A"),
            NonContiguousRangeMap::with_end(
                d(1974, 4, 4),
                d(1975, 5, 4),
                InstrumentId::new("STOCK_A"),
            )
            .unwrap(),
        );
        let index = SymbolIndex::new(by_symbol).unwrap();

        let symbols: Vec<_> = index.symbols().map(|s| s.as_str()).collect();
        assert_eq!(symbols, vec!["A", "B"]);
        assert_eq!(
            index.instrument_on("A", &d(1975, 1, 1)),
            Some(&InstrumentId::new("STOCK_A"))
        );
        assert_eq!(index.instrument_on("A", &d(1975, 5, 5)), None);
        assert_eq!(index.instrument_on("C", &d(1975, 1, 1)), None);
    }
}
