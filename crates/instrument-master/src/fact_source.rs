//! In-memory fact source

use tickermap_core::{Date, SymbolPeriod};
use tickermap_ports::{FactSource, SupplierResult};

/// Fixed list of facts, returned for every as-of date
///
/// Backs configuration-driven masters and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFactSource {
    facts: Vec<SymbolPeriod>,
}

impl InMemoryFactSource {
    pub fn new(facts: Vec<SymbolPeriod>) -> Self {
        Self { facts }
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

impl FactSource for InMemoryFactSource {
    fn facts_as_of(&self, _date: Date) -> SupplierResult<Vec<SymbolPeriod>> {
        Ok(self.facts.clone())
    }
}
