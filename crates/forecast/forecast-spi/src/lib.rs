//! Forecast Service Provider Interface
//!
//! Types shared between the forecast service, its estimator and its callers:
//!
//! - [`ArimaOrder`] and [`OrderSource`]: how a request names its model
//! - [`Forecast`]: the outcome of one forecast call
//! - [`Estimator`]: seam to the statistical library that fits the model
//! - [`ForecastError`]: everything that can go wrong inside the service

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::Estimator;
pub use error::{ForecastError, Result};
pub use model::{ArimaOrder, FallbackReason, Forecast, OrderSource};
