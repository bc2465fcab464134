//! API layer - routes, handlers, and middleware

pub mod handlers;
pub mod middleware;

use crate::state::AppState;
use axum::{routing::get, Router};

/// Create the main application router
///
/// The metrics middleware is applied uniformly to every registered route
/// (including `/metrics` itself). Unknown paths fall through to axum's 404
/// fallback without being recorded.
pub fn create_router(state: AppState) -> Router {
    let cors_origins = state.config.server.cors_origins.clone();
    let metrics_state = state.clone();

    Router::new()
        // Weather lookup
        .route("/", get(handlers::weather::current_weather))
        // Operational endpoints
        .route("/ping", get(handlers::system::ping))
        .route("/health", get(handlers::system::health_check))
        .route("/version", get(handlers::system::version))
        // Prometheus endpoint
        .route("/metrics", get(handlers::metrics::metrics_handler))
        // Add state
        .with_state(state)
        // Instrumentation applies to registered routes only; the 404
        // fallback stays unrecorded.
        .route_layer(axum::middleware::from_fn_with_state(
            metrics_state,
            middleware::metrics_middleware,
        ))
        // Add middleware (applied in reverse order)
        .layer(axum::middleware::from_fn(
            middleware::request_id_middleware,
        ))
        .layer(middleware::compression())
        .layer(middleware::cors(&cors_origins))
}
