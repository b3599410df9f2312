//! Forecast error types

use algorithm_spi::TsError;
use thiserror::Error;

use crate::model::ArimaOrder;

/// Result type alias for forecast service operations
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur while serving a forecast
///
/// A short series or an unknown model name is not an error; the service
/// answers those with the last observation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// No observations, so there is no last value to fall back to
    #[error("Empty series: at least one observation is required")]
    EmptySeries,

    /// The estimator could not fit the model or produce a forecast
    #[error("ARIMA{order} estimation failed: {source}")]
    Estimation {
        order: ArimaOrder,
        #[source]
        source: TsError,
    },
}

impl ForecastError {
    /// Whether the caller sent something the service cannot work with
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::EmptySeries)
    }
}
