//! # server
//!
//! HTTP surface for the one-step ARIMA forecast service.

use axum::routing::{get, post};
use axum::Router;
use forecast_facade::ForecastService;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod health;
pub mod routes;

pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ErrorResponse};

/// Default `RUST_LOG` filter
pub const DEFAULT_LOG_FILTER: &str = "server=info,forecast_core=info,tower_http=info";

/// Application state shared across handlers
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub service: ForecastService,
}

impl AppState {
    pub fn new(service: ForecastService) -> Self {
        Self { service }
    }
}

/// Build the router with all routes and middleware
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health endpoints (Kubernetes-compatible)
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .route("/health", get(health::liveness))
        .route("/forecast", post(routes::forecast))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
