//! Metrics endpoint handler
//!
//! Exposes Prometheus-compatible metrics for monitoring

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::state::AppState;

/// Handler for /metrics endpoint
/// Returns Prometheus text format metrics
pub async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.metrics.encode() {
        Ok(buffer) => (
            StatusCode::OK,
            [("Content-Type", "text/plain; version=0.0.4; charset=utf-8")],
            buffer,
        ),
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [("Content-Type", "text/plain")],
                b"Failed to encode metrics".to_vec(),
            )
        }
    }
}
