//! Metrics middleware - tracks HTTP request metrics
//!
//! Records `http_requests_total`, `response_status`, and
//! `http_response_time_seconds` for every request that matched a
//! registered route.

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use crate::state::AppState;

/// Metrics middleware - tracks HTTP request metrics
///
/// Observation is passive: the response is returned exactly as the handler
/// produced it. Metrics are recorded only after the inner handler has fully
/// completed; if it panics, the observation for that request is lost.
/// Applied via `route_layer`, so the 404 fallback never reaches this
/// middleware; a request without a `MatchedPath` is passed through
/// unrecorded either way.
pub async fn metrics_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let start = Instant::now();

    // The registered route pattern is the stable metrics label; the raw URI
    // path would leak unbounded label cardinality on probes of unknown paths.
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string());

    // Process request
    let response = next.run(req).await;

    // Record metrics after request completion
    if let Some(route) = route {
        state
            .metrics
            .observe_request(&route, response.status().as_u16(), start.elapsed());
    }

    response
}
