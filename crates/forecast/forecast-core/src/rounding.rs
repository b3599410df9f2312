//! Decimal rounding of estimated values

/// Decimal places kept on estimated forecasts
pub const FORECAST_DECIMALS: i32 = 2;

/// Round `value` to `decimals` places
///
/// Exact ties go to the even neighbour, so `0.125` becomes `0.12` and
/// `0.375` becomes `0.38`.
///
/// Values too large to scale without overflowing have no fractional
/// digits left and are returned unchanged.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round_ties_even() / factor
}
