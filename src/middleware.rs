//! Per-request tracing span.
//!
//! Each request runs inside a `request` span tagged with a fresh UUID v4, its
//! method and path. The outcome is logged at debug, so liveness polling stays
//! silent under the default `myservice=info` filter.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Runs the rest of the stack inside a request span and logs the outcome.
///
/// Install as the outermost layer so the span covers the 404 fallback too.
pub async fn trace_request(request: Request, next: Next) -> Response {
    let span = tracing::debug_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = %request.method(),
        path = %request.uri().path(),
    );

    let start = Instant::now();
    let response = next.run(request).instrument(span.clone()).await;

    span.in_scope(|| {
        let status = response.status();
        let duration_ms = start.elapsed().as_millis() as u64;
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), duration_ms, "Request served");
        } else {
            tracing::debug!(status = status.as_u16(), duration_ms, "Request not routed");
        }
    });

    response
}
