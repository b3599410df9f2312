//! Seam to the statistical library that fits and forecasts

use algorithm_spi::Result;

use crate::model::ArimaOrder;

/// Fits an ARIMA model and produces the next value of a series
///
/// Implementations are shared across request tasks, so they hold no
/// per-call state.
pub trait Estimator: Send + Sync {
    /// Fit ARIMA(`order`) to `data` and return the one-step-ahead forecast
    ///
    /// The value is returned as the estimator produced it; rounding is the
    /// caller's concern.
    fn forecast_next(&self, data: &[f64], order: ArimaOrder) -> Result<f64>;

    /// Short name used in logs and health reports
    fn name(&self) -> &str;
}
