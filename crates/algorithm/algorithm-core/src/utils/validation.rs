//! Input validation helpers

use algorithm_spi::{Result, TsError};

/// Reject series containing NaN or infinite observations
pub fn ensure_finite(data: &[f64]) -> Result<()> {
    match data.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(TsError::InvalidData(format!(
            "non-finite value at index {index}"
        ))),
        None => Ok(()),
    }
}
