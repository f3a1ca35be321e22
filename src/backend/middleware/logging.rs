/**
 * Request Logging Middleware
 *
 * Logs the method and URI of every inbound request, and the response status
 * with the elapsed time at debug level.
 */

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// Request logging middleware
///
/// Installed with `axum::middleware::from_fn(log_requests)`.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    tracing::info!("{} {}", method, uri);

    let response = next.run(request).await;

    tracing::debug!(
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "{} {} completed",
        method,
        uri
    );

    response
}
