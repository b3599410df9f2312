//! Forecast Facade
//!
//! High-level API for the forecast service. Re-exports all public types
//! from the forecast stack for convenient usage.
//!
//! # Example
//!
//! ```rust
//! use forecast_facade::prelude::*;
//!
//! let service = ForecastService::with_defaults();
//! let forecast = service
//!     .forecast(&[1.0, 2.0, 3.0], &OrderSource::named("suicide"))
//!     .unwrap();
//! assert_eq!(forecast.value(), 3.0);
//! ```

// Re-export everything from API (which includes SPI and core)
pub use forecast_api::*;

// Re-export the estimator library for callers that want to fit directly
pub use algorithm_core as algorithm;
