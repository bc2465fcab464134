//! Request ID middleware

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use std::time::Instant;
use uuid::Uuid;

use crate::request_context::RequestContext;

/// Request ID middleware
///
/// Assigns a server request ID to every request, makes it available to
/// inner middleware/handlers via extensions, echoes it back in the
/// `x-request-id` response header, and logs request completion with
/// method, path, status, and duration.
pub async fn request_id_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let server_id = Uuid::new_v4().to_string();

    // Make request ID available to inner middleware/handlers.
    let mut req = req;
    req.extensions_mut().insert(RequestContext {
        request_id: server_id.clone(),
    });

    let path = req.uri().path().to_string();
    let method = req.method().clone();

    tracing::debug!(
        method = %method,
        path = %path,
        request_id = %server_id,
        "Incoming request"
    );

    let mut response = next.run(req).await;

    let status = response.status();
    let duration = start.elapsed();

    tracing::info!(
        method = %method,
        path = %path,
        status = %status.as_u16(),
        duration_ms = duration.as_millis(),
        request_id = %server_id,
        "Request completed"
    );

    if let Ok(value) = HeaderValue::from_str(&server_id) {
        response.headers_mut().insert("x-request-id", value);
    }

    response
}
