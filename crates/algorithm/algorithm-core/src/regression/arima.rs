//! ARIMA (AutoRegressive Integrated Moving Average) implementation
//!
//! The model combines three components:
//!
//! - **AR (AutoRegressive)**: Uses past values to predict future values
//! - **I (Integrated)**: Differencing to achieve stationarity
//! - **MA (Moving Average)**: Uses past forecast errors
//!
//! ## Parameters
//!
//! - `p`: Order of the autoregressive part
//! - `d`: Degree of differencing
//! - `q`: Order of the moving average part
//!
//! A constant term is estimated only for undifferenced models (`d == 0`);
//! differenced models carry no drift. Coefficients are estimated by
//! minimizing the conditional sum of squares (CSS) with a bounded
//! Nelder-Mead search, which keeps every coefficient inside (-0.99, 0.99).
//!
//! ## Example
//!
//! ```rust
//! use algorithm_core::prelude::*;
//!
//! let data: Vec<f64> = (1..=20).map(|x| x as f64).collect();
//! let mut model = Arima::new(0, 1, 0).unwrap();
//! model.fit(&data).unwrap();
//! let forecast = model.predict(1).unwrap();
//! assert_eq!(forecast, vec![20.0]);
//! ```

use algorithm_spi::{Predictor, Result, TsError};
use tracing::debug;

use crate::utils::{difference, ensure_finite, integrate, nelder_mead, NelderMeadConfig};

/// Largest supported AR order
pub const MAX_AR_ORDER: usize = 10;
/// Largest supported differencing order
pub const MAX_DIFF_ORDER: usize = 3;
/// Largest supported MA order
pub const MAX_MA_ORDER: usize = 10;

const COEFFICIENT_BOUND: f64 = 0.99;

/// ARIMA model for time series forecasting
#[derive(Debug, Clone)]
pub struct Arima {
    /// AR order (p)
    p: usize,
    /// Differencing order (d)
    d: usize,
    /// MA order (q)
    q: usize,
    /// AR coefficients
    ar_coeffs: Vec<f64>,
    /// MA coefficients
    ma_coeffs: Vec<f64>,
    /// Mean of the differenced series; always zero when `d > 0`
    intercept: f64,
    /// Original data (for undifferencing)
    original_data: Vec<f64>,
    /// Differenced data
    differenced_data: Vec<f64>,
    /// In-sample one-step residuals on the differenced scale
    residuals: Vec<f64>,
    residual_variance: Option<f64>,
    fitted: bool,
}

impl Arima {
    /// Create a new ARIMA model with specified orders
    ///
    /// # Arguments
    ///
    /// * `p` - Order of autoregressive component (0-10)
    /// * `d` - Degree of differencing (0-3)
    /// * `q` - Order of moving average component (0-10)
    pub fn new(p: usize, d: usize, q: usize) -> Result<Self> {
        if p > MAX_AR_ORDER {
            return Err(TsError::InvalidParameter {
                name: "p".to_string(),
                reason: format!("AR order must be <= {MAX_AR_ORDER}"),
            });
        }
        if d > MAX_DIFF_ORDER {
            return Err(TsError::InvalidParameter {
                name: "d".to_string(),
                reason: format!("differencing order must be <= {MAX_DIFF_ORDER}"),
            });
        }
        if q > MAX_MA_ORDER {
            return Err(TsError::InvalidParameter {
                name: "q".to_string(),
                reason: format!("MA order must be <= {MAX_MA_ORDER}"),
            });
        }

        Ok(Self {
            p,
            d,
            q,
            ar_coeffs: vec![0.0; p],
            ma_coeffs: vec![0.0; q],
            intercept: 0.0,
            original_data: Vec::new(),
            differenced_data: Vec::new(),
            residuals: Vec::new(),
            residual_variance: None,
            fitted: false,
        })
    }

    /// Minimum number of observations `fit` accepts for this order
    ///
    /// Models with AR or MA terms, and undifferenced models, need at least
    /// one point left after differencing; a pure integration model needs
    /// `d`. Series too short for a CSS search keep zero coefficients.
    pub fn min_observations(&self) -> usize {
        if self.p + self.q > 0 || self.d == 0 {
            self.d + 1
        } else {
            self.d
        }
    }

    fn has_constant(&self) -> bool {
        self.d == 0
    }

    /// Conditional sum of squares and the residuals that produce it
    ///
    /// The first `max(p, q)` observations are conditioned on and carry a
    /// zero residual.
    fn css(series: &[f64], ar: &[f64], ma: &[f64], intercept: f64) -> (f64, Vec<f64>) {
        let start = ar.len().max(ma.len());
        let mut residuals = vec![0.0; series.len()];
        let mut sum = 0.0;

        for t in start..series.len() {
            let mut prediction = intercept;
            for (i, phi) in ar.iter().enumerate() {
                prediction += phi * (series[t - 1 - i] - intercept);
            }
            for (j, theta) in ma.iter().enumerate() {
                prediction += theta * residuals[t - 1 - j];
            }
            residuals[t] = series[t] - prediction;
            sum += residuals[t] * residuals[t];
        }

        (sum, residuals)
    }

    /// Split an optimizer point into (intercept, AR, MA)
    fn unpack<'a>(&self, point: &'a [f64]) -> (f64, &'a [f64], &'a [f64]) {
        let offset = usize::from(self.has_constant());
        let intercept = if self.has_constant() { point[0] } else { 0.0 };
        (
            intercept,
            &point[offset..offset + self.p],
            &point[offset + self.p..offset + self.p + self.q],
        )
    }

    fn estimate(&mut self, series: &[f64]) -> Result<()> {
        let mean = series.iter().sum::<f64>() / series.len().max(1) as f64;

        self.intercept = if self.has_constant() { mean } else { 0.0 };
        self.ar_coeffs = vec![0.0; self.p];
        self.ma_coeffs = vec![0.0; self.q];

        if self.p == 0 && self.q == 0 {
            return Ok(());
        }
        if series.len() <= self.p.max(self.q) {
            debug!(
                order = ?self.params(),
                len = series.len(),
                "series too short for CSS, keeping zero coefficients"
            );
            return Ok(());
        }

        let mut initial = Vec::with_capacity(1 + self.p + self.q);
        let mut bounds = Vec::with_capacity(1 + self.p + self.q);
        if self.has_constant() {
            initial.push(mean);
            bounds.push((f64::NEG_INFINITY, f64::INFINITY));
        }
        for i in 0..self.p + self.q {
            let lag = if i < self.p { i } else { i - self.p };
            initial.push(0.1 / (lag + 1) as f64);
            bounds.push((-COEFFICIENT_BOUND, COEFFICIENT_BOUND));
        }

        let config = NelderMeadConfig {
            max_iter: 2000,
            ..NelderMeadConfig::default()
        };
        let minimum = nelder_mead(
            |point| {
                let (intercept, ar, ma) = self.unpack(point);
                let (sum, _) = Self::css(series, ar, ma, intercept);
                if sum.is_finite() {
                    sum
                } else {
                    f64::INFINITY
                }
            },
            &initial,
            &bounds,
            &config,
        );

        if !minimum.value.is_finite() {
            return Err(TsError::NumericalError(
                "conditional sum of squares is not finite".to_string(),
            ));
        }
        debug!(
            order = ?self.params(),
            iterations = minimum.iterations,
            converged = minimum.converged,
            css = minimum.value,
            "ARIMA coefficients estimated"
        );

        let (intercept, ar, ma) = self.unpack(&minimum.point);
        self.intercept = intercept;
        self.ar_coeffs = ar.to_vec();
        self.ma_coeffs = ma.to_vec();
        Ok(())
    }

    /// Get model parameters
    pub fn params(&self) -> (usize, usize, usize) {
        (self.p, self.d, self.q)
    }

    /// Get AR coefficients
    pub fn ar_coefficients(&self) -> &[f64] {
        &self.ar_coeffs
    }

    /// Get MA coefficients
    pub fn ma_coefficients(&self) -> &[f64] {
        &self.ma_coeffs
    }

    /// Constant term on the differenced scale
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// In-sample residuals on the differenced scale
    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    /// Mean squared residual over the non-conditioned observations
    pub fn residual_variance(&self) -> Option<f64> {
        self.residual_variance
    }

    /// Akaike information criterion from the Gaussian CSS likelihood
    ///
    /// `None` before fitting, or when the residual variance is zero.
    pub fn aic(&self) -> Option<f64> {
        let variance = self.residual_variance.filter(|v| *v > 0.0)?;
        let n = (self.differenced_data.len() - self.p.max(self.q)) as f64;
        let k = (self.p + self.q + usize::from(self.has_constant()) + 1) as f64;
        let log_likelihood =
            -0.5 * n * (1.0 + variance.ln() + (2.0 * std::f64::consts::PI).ln());
        Some(-2.0 * log_likelihood + 2.0 * k)
    }
}

impl Predictor for Arima {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        let required = self.min_observations();
        if data.len() < required {
            return Err(TsError::InsufficientData {
                required,
                actual: data.len(),
            });
        }
        ensure_finite(data)?;

        let differenced = difference(data, self.d);
        self.estimate(&differenced)?;

        let (_, residuals) =
            Self::css(&differenced, &self.ar_coeffs, &self.ma_coeffs, self.intercept);
        let start = self.p.max(self.q);
        self.residual_variance = if differenced.len() > start {
            let tail = &residuals[start..];
            Some(tail.iter().map(|e| e * e).sum::<f64>() / tail.len() as f64)
        } else {
            None
        };

        self.original_data = data.to_vec();
        self.differenced_data = differenced;
        self.residuals = residuals;
        self.fitted = true;
        Ok(())
    }

    fn predict(&self, steps: usize) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(TsError::NotFitted);
        }

        if steps == 0 {
            return Ok(Vec::new());
        }

        let n = self.differenced_data.len();
        let mut extended = self.differenced_data.clone();
        let mut extended_residuals = self.residuals.clone();

        // Generate forecasts on differenced scale; lags before the start
        // of the series contribute nothing
        for _ in 0..steps {
            let mut forecast = self.intercept;

            for (phi, value) in self.ar_coeffs.iter().zip(extended.iter().rev()) {
                forecast += phi * (value - self.intercept);
            }
            for (theta, residual) in self.ma_coeffs.iter().zip(extended_residuals.iter().rev()) {
                forecast += theta * residual;
            }

            extended.push(forecast);
            extended_residuals.push(0.0); // Future residuals are 0
        }

        let forecasts = integrate(&extended[n..], &self.original_data, self.d)?;
        if forecasts.iter().any(|f| !f.is_finite()) {
            return Err(TsError::NumericalError(
                "forecast is not finite".to_string(),
            ));
        }
        Ok(forecasts)
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}
