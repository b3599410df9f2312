//! Predictor trait for time series estimators

use crate::error::Result;

/// Common trait for all time series estimators
///
/// Follows the fit-predict pattern: a model is configured, fitted to a
/// series once, then asked for any number of future steps.
///
/// # Example
///
/// ```rust,ignore
/// use algorithm_spi::Predictor;
///
/// fn next_value<P: Predictor>(predictor: &mut P, data: &[f64]) -> algorithm_spi::Result<f64> {
///     predictor.fit(data)?;
///     Ok(predictor.predict(1)?[0])
/// }
/// ```
pub trait Predictor {
    /// Fit the model to historical data
    ///
    /// # Arguments
    ///
    /// * `data` - Historical observations in time order
    fn fit(&mut self, data: &[f64]) -> Result<()>;

    /// Predict future values
    ///
    /// # Arguments
    ///
    /// * `steps` - Number of future time steps to predict
    ///
    /// # Returns
    ///
    /// Vector of `steps` predicted values, or an error if the model is not
    /// fitted
    fn predict(&self, steps: usize) -> Result<Vec<f64>>;

    /// Check if the model has been fitted
    fn is_fitted(&self) -> bool;
}
