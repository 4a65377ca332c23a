use serde::{Deserialize, Serialize};

use crate::ranges::DateRange;
use crate::values::{InstrumentId, Symbol};

/// "This instrument was known by this symbol during this range"
///
/// Immutable fact; the building block of every timeline and of the index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolPeriod {
    pub instrument_id: InstrumentId,
    pub symbol: Symbol,
    pub range: DateRange,
}

impl SymbolPeriod {
    pub fn new(
        instrument_id: impl Into<InstrumentId>,
        symbol: impl Into<Symbol>,
        range: DateRange,
    ) -> Self {
        Self {
            instrument_id: instrument_id.into(),
            symbol: symbol.into(),
            range,
        }
    }
}

impl std::fmt::Display for SymbolPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} as {} {}", self.instrument_id, self.symbol, self.range)
    }
}
