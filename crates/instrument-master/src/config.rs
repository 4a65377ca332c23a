//! Configuration loading for an instrument master
//!
//! A JSON document names the master and lists its symbol facts:
//!
//! ```json
//! {
//!   "name": "primary",
//!   "facts": [
//!     { "instrument_id": "STOCK_A", "symbol": "A", "start": "1974-04-04", "end": "1975-05-04" },
//!     { "instrument_id": "STOCK_A", "symbol": "AX", "start": "1975-05-05" }
//!   ]
//! }
//! ```
//!
//! A fact without `end` stays valid indefinitely. `utc_offset_minutes` sets
//! where the wall-clock day boundary falls for [`build_system_master`]; it
//! defaults to UTC.
//!
//! [`build_system_master`]: InstrumentMasterConfig::build_system_master

use std::path::Path;
use std::sync::Arc;

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tickermap_clock::SystemClock;
use tickermap_core::{Date, KeyRange, SymbolPeriod};
use tickermap_ports::Clock;

use crate::fact_source::InMemoryFactSource;
use crate::real::RealInstrumentMaster;
use crate::supplier::IndexingDataSupplier;

/// Root configuration for one instrument master
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentMasterConfig {
    /// Master name, used in logs
    #[serde(default = "default_master_name")]
    pub name: String,

    /// Offset from UTC of the market whose midnight starts a new day
    #[serde(default)]
    pub utc_offset_minutes: i32,

    /// Symbol facts
    #[serde(default)]
    pub facts: Vec<SymbolFactConfig>,
}

fn default_master_name() -> String {
    "instrument-master".to_string()
}

impl Default for InstrumentMasterConfig {
    fn default() -> Self {
        Self {
            name: default_master_name(),
            utc_offset_minutes: 0,
            facts: Vec::new(),
        }
    }
}

/// One "instrument traded as symbol from start to end" fact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolFactConfig {
    pub instrument_id: String,
    pub symbol: String,
    pub start: Date,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Date>,
}

impl SymbolFactConfig {
    pub fn to_period(&self) -> Result<SymbolPeriod, ConfigError> {
        let range = match self.end {
            Some(end) => {
                KeyRange::with_end(self.start, end).map_err(|e| ConfigError::InvalidFact {
                    instrument_id: self.instrument_id.clone(),
                    symbol: self.symbol.clone(),
                    reason: e.to_string(),
                })?
            }
            None => KeyRange::with_no_end(self.start),
        };
        Ok(SymbolPeriod::new(
            self.instrument_id.as_str(),
            self.symbol.as_str(),
            range,
        ))
    }
}

impl InstrumentMasterConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Add a fact
    pub fn with_fact(
        mut self,
        instrument_id: &str,
        symbol: &str,
        start: Date,
        end: Option<Date>,
    ) -> Self {
        self.facts.push(SymbolFactConfig {
            instrument_id: instrument_id.to_string(),
            symbol: symbol.to_string(),
            start,
            end,
        });
        self
    }

    /// Validate every fact's range and convert
    pub fn periods(&self) -> Result<Vec<SymbolPeriod>, ConfigError> {
        self.facts.iter().map(SymbolFactConfig::to_period).collect()
    }

    pub fn to_fact_source(&self) -> Result<InMemoryFactSource, ConfigError> {
        Ok(InMemoryFactSource::new(self.periods()?))
    }

    /// Build a ready-to-query master over this configuration's facts
    ///
    /// Timeline and index invariants are checked lazily, when the first
    /// query builds a snapshot.
    pub fn build_master(
        &self,
        clock: Arc<dyn Clock>,
    ) -> Result<RealInstrumentMaster, ConfigError> {
        let supplier = IndexingDataSupplier::new(self.to_fact_source()?);
        Ok(RealInstrumentMaster::new(
            self.name.clone(),
            Arc::new(supplier),
            clock,
        ))
    }

    /// Wall clock whose day starts at midnight at `utc_offset_minutes`
    pub fn system_clock(&self) -> Result<SystemClock, ConfigError> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(SystemClock::with_offset)
            .ok_or(ConfigError::InvalidUtcOffset(self.utc_offset_minutes))
    }

    /// Build a master that takes "today" from the wall clock
    pub fn build_system_master(&self) -> Result<RealInstrumentMaster, ConfigError> {
        let clock = self.system_clock()?;
        self.build_master(Arc::new(clock))
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid fact {instrument_id} as {symbol}: {reason}")]
    InvalidFact {
        instrument_id: String,
        symbol: String,
        reason: String,
    },

    #[error("UTC offset of {0} minutes is out of range")]
    InvalidUtcOffset(i32),
}
