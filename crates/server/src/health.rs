//! Liveness and readiness probes

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use forecast_facade::ArimaOrder;
use serde_json::{json, Value};

use crate::AppState;

/// Liveness probe - is the server running?
pub async fn liveness() -> Json<Value> {
    Json(json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe - can the server answer forecasts?
///
/// Fits a random walk on a three-point series as an estimator self-check.
pub async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let estimator = state.service.estimator();
    let check = estimator.forecast_next(&[1.0, 2.0, 3.0], ArimaOrder::new(0, 1, 0));

    let (status, estimator_check) = match check {
        Ok(_) => (
            StatusCode::OK,
            json!({ "name": estimator.name(), "status": "healthy", "message": null }),
        ),
        Err(err) => (
            StatusCode::SERVICE_UNAVAILABLE,
            json!({ "name": estimator.name(), "status": "unhealthy", "message": err.to_string() }),
        ),
    };

    let body = json!({
        "status": if status.is_success() { "ready" } else { "not_ready" },
        "version": env!("CARGO_PKG_VERSION"),
        "models": state.service.table().len(),
        "checks": [estimator_check],
    });

    (status, Json(body))
}
