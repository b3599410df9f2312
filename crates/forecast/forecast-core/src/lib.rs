//! Forecast Core
//!
//! The forecast service and the pieces it is built from:
//!
//! - [`order_table`]: fixed mapping from model names to ARIMA orders
//! - [`estimator`]: [`Estimator`] backed by `algorithm-core`'s ARIMA
//! - [`rounding`]: decimal rounding of estimated values
//! - [`service`]: order resolution, short-series fallback and estimation

pub mod estimator;
pub mod order_table;
pub mod rounding;
pub mod service;

// Re-export SPI types used in the public API
pub use forecast_spi::{
    ArimaOrder, Estimator, FallbackReason, Forecast, ForecastError, OrderSource, Result,
};

// Re-export main types
pub use estimator::ArimaEstimator;
pub use order_table::ModelOrderTable;
pub use rounding::round_to;
pub use service::ForecastService;
