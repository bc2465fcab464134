//! Operational endpoint handlers (ping, health, version)

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::state::AppState;

/// Liveness probe (GET /ping)
pub async fn ping() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html")],
        "PONG",
    )
}

/// Health check (GET /health)
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok"
    }))
}

/// Deploy identification (GET /version)
///
/// Returns `namespace:gitsha` from the configuration snapshot captured at
/// startup; environment changes after start are not reflected.
pub async fn version(State(state): State<AppState>) -> impl IntoResponse {
    let build = &state.config.build;
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html")],
        format!("{}:{}", build.namespace, build.gitsha),
    )
}
