use tickermap_core::{Date, InstrumentId, Symbol};

use crate::error::InstrumentMasterResult;

/// Port for point-in-time instrument/symbol resolution
///
/// All three lookups return `Ok(None)` when nothing is known for the
/// requested key and date. `Err` is reserved for failures to obtain the
/// underlying master data.
pub trait InstrumentMaster: Send + Sync {
    /// Instrument that traded under `symbol` on `date`
    ///
    /// Strict: an expired ticker does not resolve to whoever held it last.
    fn get_instrument_id(
        &self,
        symbol: &Symbol,
        date: Date,
    ) -> InstrumentMasterResult<Option<InstrumentId>>;

    /// Symbol the instrument traded under on `date`
    ///
    /// Strict: nothing before the first known period or after a closed
    /// last period.
    fn get_symbol(
        &self,
        instrument_id: &InstrumentId,
        date: Date,
    ) -> InstrumentMasterResult<Option<Symbol>>;

    /// Like [`get_symbol`](Self::get_symbol), but the last known symbol stays
    /// valid indefinitely after its period ends
    fn get_latest_valid_symbol(
        &self,
        instrument_id: &InstrumentId,
        date: Date,
    ) -> InstrumentMasterResult<Option<Symbol>>;

    /// Get the resolver's name for debugging
    fn name(&self) -> &str {
        "InstrumentMaster"
    }
}
