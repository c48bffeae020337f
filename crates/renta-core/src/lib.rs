pub mod advance;
pub mod brackets;
pub mod config;
pub mod deductions;
pub mod depuration;
pub mod engine;
pub mod error;
pub mod exemptions;
pub mod settlement;
pub mod types;

pub use config::FiscalConfig;
pub use error::RentaError;
pub use types::*;

/// Standard result type for all renta operations
pub type RentaResult<T> = Result<T, RentaError>;
