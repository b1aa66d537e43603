//! Observability HTTP Routes
//!
//! Health check backed by a store round-trip.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tracing::warn;

use super::state::GatewayState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check route
pub fn health_routes(state: Arc<GatewayState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<GatewayState>>) -> impl IntoResponse {
    let (status, label) = match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            warn!(error = %e, "Health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    let response = HealthResponse {
        status: label.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (status, Json(response))
}
