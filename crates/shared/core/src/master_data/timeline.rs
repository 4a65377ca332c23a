use super::SymbolPeriod;
use crate::error::{MasterDataError, Result};
use crate::ranges::ContiguousDiscreteRangeMap;
use crate::values::{Date, InstrumentId};

/// The sequence of symbols one instrument has held, and when
///
/// Periods are keyed by their own validity range in a contiguous map, so
/// from its first recorded day onwards the instrument has exactly one symbol
/// at a time until the last period ends (or forever, if it is unbounded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentTimeline {
    instrument_id: InstrumentId,
    periods: ContiguousDiscreteRangeMap<Date, SymbolPeriod>,
}

impl InstrumentTimeline {
    /// Wrap an already-built range map
    ///
    /// Every period must belong to `instrument_id` and carry the same range
    /// it is keyed under.
    pub fn new(
        instrument_id: InstrumentId,
        periods: ContiguousDiscreteRangeMap<Date, SymbolPeriod>,
    ) -> Result<Self> {
        for (range, period) in periods.iter() {
            if period.instrument_id != instrument_id {
                return Err(MasterDataError::InstrumentMismatch {
                    expected: instrument_id.to_string(),
                    found: period.instrument_id.to_string(),
                });
            }
            if &period.range != range {
                return Err(MasterDataError::PeriodRangeMismatch {
                    instrument_id: instrument_id.to_string(),
                    map_range: range.to_string(),
                    period_range: period.range.to_string(),
                });
            }
        }

        Ok(Self {
            instrument_id,
            periods,
        })
    }

    /// Assemble a timeline from loose facts in any order
    pub fn from_periods(
        instrument_id: InstrumentId,
        mut periods: Vec<SymbolPeriod>,
    ) -> Result<Self> {
        periods.sort_by(|a, b| a.range.start().cmp(b.range.start()));
        let entries = periods.into_iter().map(|p| (p.range, p)).collect();

        let map = ContiguousDiscreteRangeMap::from_entries(entries).map_err(|source| {
            MasterDataError::InvalidTimeline {
                instrument_id: instrument_id.to_string(),
                source: Box::new(source),
            }
        })?;

        Self::new(instrument_id, map)
    }

    pub fn instrument_id(&self) -> &InstrumentId {
        &self.instrument_id
    }

    pub fn periods(&self) -> &ContiguousDiscreteRangeMap<Date, SymbolPeriod> {
        &self.periods
    }

    /// Period in effect on `date`
    ///
    /// Strict: nothing before the first period or after a closed last period.
    pub fn period_on(&self, date: &Date) -> Option<&SymbolPeriod> {
        self.periods.get(date)
    }

    /// Period in effect on `date`, treating the last known period as still
    /// valid once its end has passed
    ///
    /// There is no backward extension: a date before the first period has
    /// no symbol.
    pub fn latest_valid_period_on(&self, date: &Date) -> Option<&SymbolPeriod> {
        if self.periods.last_range().is_before(date) {
            return Some(self.periods.last_value());
        }
        self.periods.get(date)
    }

    /// The most recent period
    pub fn last_period(&self) -> &SymbolPeriod {
        self.periods.last_value()
    }
}
