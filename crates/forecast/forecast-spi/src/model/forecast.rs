//! Outcome of a single forecast call

use super::ArimaOrder;

/// Why the service answered with the last observation instead of a fit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// The model name is not in the order table
    UnknownModel { name: String },
    /// The series is shorter than `max(p, d, q)`
    ShortSeries { threshold: usize, actual: usize },
}

/// Result of a forecast call
#[derive(Debug, Clone, PartialEq)]
pub enum Forecast {
    /// One-step ARIMA forecast, rounded to two decimals
    Estimated { value: f64, order: ArimaOrder },
    /// Last observation, returned unchanged
    Fallback { value: f64, reason: FallbackReason },
}

impl Forecast {
    /// The number reported to the caller
    pub fn value(&self) -> f64 {
        match self {
            Self::Estimated { value, .. } | Self::Fallback { value, .. } => *value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_for_both_paths() {
        let estimated = Forecast::Estimated {
            value: 3.25,
            order: ArimaOrder::new(0, 1, 0),
        };
        let fallback = Forecast::Fallback {
            value: 2.5,
            reason: FallbackReason::UnknownModel {
                name: "flu".to_string(),
            },
        };

        assert_eq!(estimated.value(), 3.25);
        assert!(!estimated.is_fallback());
        assert_eq!(fallback.value(), 2.5);
        assert!(fallback.is_fallback());
    }
}
