//! Forecast Consumer API
//!
//! Request and response bodies for `POST /forecast`, plus re-exports from
//! SPI and core for convenience.
//!
//! Two request shapes are accepted and both resolve to an [`OrderSource`]:
//!
//! ```json
//! { "data": [1.0, 2.0, 3.0], "model_name": "suicide" }
//! { "data": [1.0, 2.0, 3.0], "order": [1, 1, 1] }
//! ```
//!
//! `order` may be omitted, in which case ARIMA(1, 1, 1) is used.

// Re-export from core
pub use forecast_core::{
    estimator, order_table, round_to, rounding, service, ArimaEstimator, ForecastService,
    ModelOrderTable,
};

// Re-export from SPI
pub use forecast_spi::{
    ArimaOrder, Estimator, FallbackReason, Forecast, ForecastError, OrderSource, Result,
};

use serde::{Deserialize, Serialize};

/// Body of a forecast request
///
/// Variants are tried in order: a body carrying `model_name` is
/// [`ForecastRequest::Named`]; anything else must match
/// [`ForecastRequest::Explicit`] exactly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ForecastRequest {
    Named(NamedForecastRequest),
    Explicit(ExplicitForecastRequest),
}

/// Series plus a model name from the order table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedForecastRequest {
    pub data: Vec<f64>,
    pub model_name: String,
}

/// Series plus an optional explicit `[p, d, q]` order
///
/// Unknown fields are rejected so that a malformed `model_name` cannot
/// silently fall through to the default order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExplicitForecastRequest {
    pub data: Vec<f64>,
    #[serde(default)]
    pub order: Option<ArimaOrder>,
}

impl ForecastRequest {
    pub fn data(&self) -> &[f64] {
        match self {
            Self::Named(request) => &request.data,
            Self::Explicit(request) => &request.data,
        }
    }

    pub fn order_source(&self) -> OrderSource {
        match self {
            Self::Named(request) => OrderSource::Named(request.model_name.clone()),
            Self::Explicit(request) => OrderSource::Explicit(request.order.unwrap_or_default()),
        }
    }

    /// Split into the series and where its order comes from
    pub fn into_parts(self) -> (Vec<f64>, OrderSource) {
        match self {
            Self::Named(request) => (request.data, OrderSource::Named(request.model_name)),
            Self::Explicit(request) => (
                request.data,
                OrderSource::Explicit(request.order.unwrap_or_default()),
            ),
        }
    }
}

/// Body of a forecast response
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub forecast: f64,
}

impl From<Forecast> for ForecastResponse {
    fn from(forecast: Forecast) -> Self {
        Self {
            forecast: forecast.value(),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ExplicitForecastRequest, ForecastRequest, ForecastResponse, NamedForecastRequest,
    };
    pub use forecast_core::{ArimaEstimator, ForecastService, ModelOrderTable};
    pub use forecast_spi::{ArimaOrder, Estimator, Forecast, ForecastError, OrderSource, Result};
}
