use thiserror::Error;
use tickermap_core::MasterDataError;

/// Failure to produce a snapshot for an as-of date
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SupplierError {
    #[error("Invalid master data: {0}")]
    MasterData(#[from] MasterDataError),

    #[error("Fact source failed: {0}")]
    Source(String),
}

pub type SupplierResult<T> = std::result::Result<T, SupplierError>;

/// Failure while answering an instrument master query
///
/// "Not found" is never an error; queries return `Ok(None)` for that.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstrumentMasterError {
    #[error("Master data supplier failed: {0}")]
    Supplier(#[from] SupplierError),
}

pub type InstrumentMasterResult<T> = std::result::Result<T, InstrumentMasterError>;
