//! Tickermap Ports
//!
//! Port definitions (traits) for the tickermap instrument master.
//! These define the boundaries between domain logic and infrastructure.

mod clock;
mod error;
mod instrument_master;
mod supplier;

pub use clock::Clock;
pub use error::{InstrumentMasterError, InstrumentMasterResult, SupplierError, SupplierResult};
pub use instrument_master::InstrumentMaster;
pub use supplier::{AllInstrumentMasterDataSupplier, FactSource};
