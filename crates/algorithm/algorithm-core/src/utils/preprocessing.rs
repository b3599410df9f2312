//! Differencing and its inverse

use algorithm_spi::{Result, TsError};

/// Compute `order`-th differences of a series
///
/// Each pass shortens the series by one; differencing a series that runs
/// out of points yields an empty vector.
pub fn difference(data: &[f64], order: usize) -> Vec<f64> {
    let mut result = data.to_vec();
    for _ in 0..order {
        if result.len() <= 1 {
            return Vec::new();
        }
        result = result.windows(2).map(|w| w[1] - w[0]).collect();
    }
    result
}

/// Undo `order` differencing passes on values that continue `original`
///
/// `forecasts` are future values of the `order`-th differenced series; the
/// result continues `original` on its own scale. Needs at least `order`
/// observations in `original`.
pub fn integrate(forecasts: &[f64], original: &[f64], order: usize) -> Result<Vec<f64>> {
    let mut result = forecasts.to_vec();
    for level in (0..order).rev() {
        let base = difference(original, level);
        let mut running = *base.last().ok_or(TsError::InsufficientData {
            required: order,
            actual: original.len(),
        })?;
        for value in result.iter_mut() {
            running += *value;
            *value = running;
        }
    }
    Ok(result)
}
