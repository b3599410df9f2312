//! [`Estimator`] backed by `algorithm-core`

use algorithm_core::{Arima, Predictor};
use algorithm_spi::{Result, TsError};
use forecast_spi::{ArimaOrder, Estimator};

/// Fits a fresh [`Arima`] per call and returns its first forecast step
#[derive(Debug, Clone, Copy, Default)]
pub struct ArimaEstimator;

impl ArimaEstimator {
    pub fn new() -> Self {
        Self
    }
}

impl Estimator for ArimaEstimator {
    fn forecast_next(&self, data: &[f64], order: ArimaOrder) -> Result<f64> {
        let mut model = Arima::new(order.p, order.d, order.q)?;
        model.fit(data)?;
        model
            .predict(1)?
            .first()
            .copied()
            .ok_or_else(|| TsError::NumericalError("estimator returned no forecast".to_string()))
    }

    fn name(&self) -> &str {
        "arima-css"
    }
}
