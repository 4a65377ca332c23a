//! Tickermap Instrument Master
//!
//! Point-in-time resolution between instrument ids and ticker symbols.
//!
//! ## Components
//!
//! - [`CachingSupplier`]: keyed memoizing cache with per-key locking
//! - [`IndexingDataSupplier`]: builds and caches one indexed snapshot per as-of date
//! - [`RealInstrumentMaster`]: answers queries against today's snapshot
//! - [`CascadingInstrumentMaster`]: first-match-wins fallback over several masters
//! - [`InstrumentMasterConfig`]: JSON configuration of symbol facts
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use tickermap_master::{CascadingInstrumentMaster, InstrumentMasterConfig};
//! use tickermap_ports::InstrumentMaster;
//!
//! let primary = InstrumentMasterConfig::from_file("primary.json")?.build_system_master()?;
//! let backup = InstrumentMasterConfig::from_file("backup.json")?.build_system_master()?;
//!
//! let master = CascadingInstrumentMaster::new(vec![Arc::new(primary), Arc::new(backup)]);
//! let id = master.get_instrument_id(&"AX".into(), date)?;
//! ```

pub mod cache;
pub mod cascading;
pub mod config;
pub mod fact_source;
pub mod real;
pub mod supplier;

pub use cache::CachingSupplier;
pub use cascading::CascadingInstrumentMaster;
pub use config::{ConfigError, InstrumentMasterConfig, SymbolFactConfig};
pub use fact_source::InMemoryFactSource;
pub use real::RealInstrumentMaster;
pub use supplier::IndexingDataSupplier;
