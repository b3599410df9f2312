//! The forecast service
//!
//! Resolves the requested order, answers short series and unknown model
//! names with the last observation, and otherwise delegates to the
//! [`Estimator`]. Estimated values are rounded to two decimals; fallback
//! values are returned untouched.

use std::sync::Arc;

use forecast_spi::{
    ArimaOrder, Estimator, FallbackReason, Forecast, ForecastError, OrderSource, Result,
};
use tracing::{debug, warn};

use crate::estimator::ArimaEstimator;
use crate::order_table::ModelOrderTable;
use crate::rounding::{round_to, FORECAST_DECIMALS};

/// Stateless one-step forecaster
///
/// Cloning is cheap: the order table and estimator are shared.
#[derive(Clone)]
pub struct ForecastService {
    table: Arc<ModelOrderTable>,
    estimator: Arc<dyn Estimator>,
}

impl ForecastService {
    pub fn new(table: Arc<ModelOrderTable>, estimator: Arc<dyn Estimator>) -> Self {
        Self { table, estimator }
    }

    /// Built-in order table with the ARIMA estimator
    pub fn with_defaults() -> Self {
        Self::new(
            Arc::new(ModelOrderTable::builtin()),
            Arc::new(ArimaEstimator::new()),
        )
    }

    pub fn table(&self) -> &ModelOrderTable {
        &self.table
    }

    pub fn estimator(&self) -> &dyn Estimator {
        self.estimator.as_ref()
    }

    /// Order for `source`, or `None` for an unknown model name
    pub fn resolve(&self, source: &OrderSource) -> Option<ArimaOrder> {
        match source {
            OrderSource::Named(name) => self.table.get(name),
            OrderSource::Explicit(order) => Some(*order),
        }
    }

    /// Forecast the value following `data`
    ///
    /// Runs the estimator synchronously; callers on an async runtime should
    /// move this onto a blocking worker.
    ///
    /// # Errors
    ///
    /// * [`ForecastError::EmptySeries`] when `data` is empty
    /// * [`ForecastError::Estimation`] when the estimator fails; there is no
    ///   retry and no fallback in that case
    pub fn forecast(&self, data: &[f64], source: &OrderSource) -> Result<Forecast> {
        let last = *data.last().ok_or(ForecastError::EmptySeries)?;

        let Some(order) = self.resolve(source) else {
            let name = source.name().unwrap_or_default().to_string();
            debug!(model = %name, "unknown model name, returning last observation");
            return Ok(Forecast::Fallback {
                value: last,
                reason: FallbackReason::UnknownModel { name },
            });
        };

        let threshold = order.threshold();
        if data.len() < threshold {
            debug!(
                %order,
                threshold,
                len = data.len(),
                "series shorter than order threshold, returning last observation"
            );
            return Ok(Forecast::Fallback {
                value: last,
                reason: FallbackReason::ShortSeries {
                    threshold,
                    actual: data.len(),
                },
            });
        }

        let raw = self
            .estimator
            .forecast_next(data, order)
            .map_err(|source| {
                warn!(
                    %order,
                    len = data.len(),
                    estimator = self.estimator.name(),
                    error = %source,
                    "estimation failed"
                );
                ForecastError::Estimation { order, source }
            })?;

        let value = round_to(raw, FORECAST_DECIMALS);
        debug!(%order, raw, value, "estimated one-step forecast");
        Ok(Forecast::Estimated { value, order })
    }
}

impl Default for ForecastService {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for ForecastService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastService")
            .field("models", &self.table.len())
            .field("estimator", &self.estimator.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algorithm_spi::TsError;
    use approx::assert_abs_diff_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns a fixed value and counts calls
    struct FixedEstimator {
        value: f64,
        calls: AtomicUsize,
    }

    impl FixedEstimator {
        fn new(value: f64) -> Arc<Self> {
            Arc::new(Self {
                value,
                calls: AtomicUsize::new(0),
            })
        }
    }

    impl Estimator for FixedEstimator {
        fn forecast_next(&self, _data: &[f64], _order: ArimaOrder) -> algorithm_spi::Result<f64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.value)
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    struct FailingEstimator;

    impl Estimator for FailingEstimator {
        fn forecast_next(&self, _data: &[f64], _order: ArimaOrder) -> algorithm_spi::Result<f64> {
            Err(TsError::NumericalError("singular".to_string()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn service_with(estimator: Arc<dyn Estimator>) -> ForecastService {
        ForecastService::new(Arc::new(ModelOrderTable::builtin()), estimator)
    }

    #[test]
    fn test_resolve_named_and_explicit() {
        let service = ForecastService::with_defaults();

        assert_eq!(
            service.resolve(&OrderSource::named("cancer")),
            Some(ArimaOrder::new(0, 1, 1))
        );
        assert_eq!(service.resolve(&OrderSource::named("flu")), None);
        assert_eq!(
            service.resolve(&OrderSource::explicit((3, 0, 2))),
            Some(ArimaOrder::new(3, 0, 2))
        );
        assert_eq!(
            service.resolve(&OrderSource::default()),
            Some(ArimaOrder::new(1, 1, 1))
        );
    }

    #[test]
    fn test_short_series_returns_last_value_unrounded() {
        let estimator = FixedEstimator::new(99.0);
        let service = service_with(estimator.clone());

        // heart_disease is (0, 2, 0): threshold 2
        let forecast = service
            .forecast(&[1.23456], &OrderSource::named("heart_disease"))
            .unwrap();

        assert_eq!(forecast.value(), 1.23456);
        assert_eq!(
            forecast,
            Forecast::Fallback {
                value: 1.23456,
                reason: FallbackReason::ShortSeries {
                    threshold: 2,
                    actual: 1
                },
            }
        );
        assert_eq!(estimator.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unknown_name_falls_back_regardless_of_length() {
        let estimator = FixedEstimator::new(99.0);
        let service = service_with(estimator.clone());
        let mut data = vec![1.0; 99];
        data.push(12.3456);

        let forecast = service
            .forecast(&data, &OrderSource::named("influenza"))
            .unwrap();

        assert_eq!(forecast.value(), 12.3456);
        assert!(matches!(
            forecast,
            Forecast::Fallback {
                reason: FallbackReason::UnknownModel { .. },
                ..
            }
        ));
        assert_eq!(estimator.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_length_equal_to_threshold_runs_estimator() {
        let estimator = FixedEstimator::new(4.0);
        let service = service_with(estimator.clone());

        let forecast = service
            .forecast(&[1.0, 2.0], &OrderSource::named("heart_disease"))
            .unwrap();

        assert!(!forecast.is_fallback());
        assert_eq!(estimator.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_estimated_value_is_rounded() {
        let service = service_with(FixedEstimator::new(10.45678));

        let forecast = service
            .forecast(&[1.0, 2.0, 3.0], &OrderSource::default())
            .unwrap();

        assert_eq!(
            forecast,
            Forecast::Estimated {
                value: 10.46,
                order: ArimaOrder::new(1, 1, 1)
            }
        );
    }

    #[test]
    fn test_single_point_with_default_order_attempts_estimation() {
        let estimator = FixedEstimator::new(5.0);
        let service = service_with(estimator.clone());

        // threshold 1, len 1: 1 < 1 is false
        service.forecast(&[5.0], &OrderSource::default()).unwrap();
        assert_eq!(estimator.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_estimation_failure_propagates() {
        let service = service_with(Arc::new(FailingEstimator));

        let err = service
            .forecast(&[1.0, 2.0, 3.0], &OrderSource::named("stroke"))
            .unwrap_err();

        assert_eq!(
            err,
            ForecastError::Estimation {
                order: ArimaOrder::new(1, 0, 1),
                source: TsError::NumericalError("singular".to_string()),
            }
        );
    }

    #[test]
    fn test_empty_series_is_rejected() {
        let service = ForecastService::with_defaults();
        assert_eq!(
            service.forecast(&[], &OrderSource::named("flu")),
            Err(ForecastError::EmptySeries)
        );
        assert_eq!(
            service.forecast(&[], &OrderSource::default()),
            Err(ForecastError::EmptySeries)
        );
    }

    #[test]
    fn test_fallback_is_idempotent() {
        let service = ForecastService::with_defaults();
        let source = OrderSource::explicit((3, 0, 0));

        let first = service.forecast(&[8.125, 9.875], &source).unwrap();
        let second = service.forecast(&[8.125, 9.875], &source).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.value(), 9.875);
    }

    #[test]
    fn test_huge_estimate_stays_finite() {
        let service = ForecastService::with_defaults();

        let forecast = service
            .forecast(&[1e307, 1.1e307, 1.2e307], &OrderSource::named("suicide"))
            .unwrap();

        assert!(forecast.value().is_finite());
        assert_eq!(forecast.value(), 1.2e307);
    }

    #[test]
    fn test_real_estimator_short_named_series() {
        let service = ForecastService::with_defaults();

        for (name, data, expected) in [
            ("stroke", vec![4.0], 4.0),
            ("diabetes", vec![4.0], 4.0),
            ("cancer", vec![1.0, 2.0], 2.0),
            ("heart_disease", vec![2.0, 5.0], 8.0),
            ("suicide", vec![6.5], 6.5),
        ] {
            let forecast = service.forecast(&data, &OrderSource::named(name)).unwrap();
            assert!(!forecast.is_fallback(), "{name}");
            assert_abs_diff_eq!(forecast.value(), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_real_estimator_suicide_order() {
        let service = ForecastService::with_defaults();

        let forecast = service
            .forecast(&[1.0, 2.0, 3.0], &OrderSource::named("suicide"))
            .unwrap();

        assert_abs_diff_eq!(forecast.value(), 3.0);
        assert!(!forecast.is_fallback());
    }
}
