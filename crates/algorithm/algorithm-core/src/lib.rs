//! Algorithm Core Implementations
//!
//! Statistical estimators behind the forecast service:
//!
//! - [`regression`]: ARIMA estimation and forecasting
//! - [`utils`]: differencing, input validation, Nelder-Mead minimization
//!
//! ## Example
//!
//! ```rust
//! use algorithm_core::prelude::*;
//!
//! let data = vec![12.0, 13.5, 13.1, 14.8, 15.2, 15.0, 16.4, 17.1];
//! let mut model = Arima::new(1, 1, 1).unwrap();
//! model.fit(&data).unwrap();
//! let forecast = model.predict(1).unwrap();
//! assert_eq!(forecast.len(), 1);
//! ```

pub mod regression;
pub mod utils;

// Re-export from SPI
pub use algorithm_spi::{Predictor, Result, TsError};

pub use regression::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::regression::Arima;
    pub use algorithm_spi::{Predictor, Result, TsError};
}
