//! API route handlers

use axum::extract::State;
use axum::Json;
use forecast_facade::{ForecastRequest, ForecastResponse};

use crate::error::ApiError;
use crate::AppState;

/// `POST /forecast`
///
/// The fit runs on the blocking pool.
pub async fn forecast(
    State(state): State<AppState>,
    Json(request): Json<ForecastRequest>,
) -> Result<Json<ForecastResponse>, ApiError> {
    let (data, source) = request.into_parts();
    let service = state.service.clone();

    let forecast = tokio::task::spawn_blocking(move || service.forecast(&data, &source)).await??;

    tracing::debug!(
        value = forecast.value(),
        fallback = forecast.is_fallback(),
        "forecast computed"
    );
    Ok(Json(forecast.into()))
}
