use crate::{AppState, get_status, health, start_server, stop_server};

use std::time::Duration;

use axum::{
    Router,
    error_handling::HandleErrorLayer,
    http::StatusCode,
    routing::{get, post},
};
use tower::{BoxError, ServiceBuilder};
use tower_http::cors::{Any, CorsLayer};

/// Upper bound for one request, infrastructure round trips included
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_CONCURRENT_REQUESTS: usize = 64;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Lifecycle API
        .route("/status", get(get_status))
        .route("/start", post(start_server))
        .route("/stop", post(stop_server))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|e: BoxError| async move {
                    if e.is::<tower::timeout::error::Elapsed>() {
                        StatusCode::REQUEST_TIMEOUT
                    } else {
                        StatusCode::SERVICE_UNAVAILABLE
                    }
                }))
                .timeout(REQUEST_TIMEOUT)
                .concurrency_limit(MAX_CONCURRENT_REQUESTS),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
