/**
 * Error Conversion
 *
 * This module converts backend errors into HTTP responses and maps the
 * extractor rejections Axum produces into the backend taxonomy.
 *
 * # Response Format
 *
 * Error responses are plain text: the client message followed by a newline,
 * with `Content-Type: text/plain; charset=utf-8`.
 *
 * ```text
 * HTTP/1.1 404 Not Found
 * Content-Type: text/plain; charset=utf-8
 *
 * Thread not found
 * ```
 */

use axum::{
    extract::rejection::BytesRejection,
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_internal() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }

        (
            status,
            [(CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("{}\n", self.message()),
        )
            .into_response()
    }
}

impl From<BytesRejection> for BackendError {
    /// A body that cannot be read is reported as a decode error.
    fn from(rejection: BytesRejection) -> Self {
        BackendError::decode(rejection.body_text())
    }
}

impl From<serde_json::Error> for BackendError {
    /// Syntax errors, early EOF and wrong shapes are all decode errors.
    fn from(err: serde_json::Error) -> Self {
        BackendError::decode(err.to_string())
    }
}
