//! Algorithm Service Provider Interface
//!
//! Defines the contract and error types shared by time series estimators:
//!
//! - [`Predictor`]: fit-predict interface implemented by every estimator
//! - [`TsError`]: standardized error type for estimator operations
//! - [`Result`]: convenient result type alias

pub mod contract;
pub mod error;

// Re-export all public items at crate root for convenience
pub use contract::Predictor;
pub use error::{Result, TsError};
