/**
 * JSON Body Extractor
 *
 * `JsonBody` reads the whole request body and decodes it as JSON regardless
 * of the `Content-Type` header. Every failure (unreadable body, syntax
 * error, wrong shape) becomes `BackendError::DecodeError` (400 Bad Request)
 * with a plain-text message.
 */

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;

/// JSON request body that rejects with `BackendError::DecodeError`
///
/// # Example
///
/// ```rust,no_run
/// use goforum::backend::middleware::JsonBody;
/// use goforum::backend::error::BackendError;
/// use goforum::shared::CreateThreadRequest;
///
/// async fn handler(JsonBody(request): JsonBody<CreateThreadRequest>) -> Result<(), BackendError> {
///     request.validate()?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::warn!("Unreadable request body: {}", rejection.body_text());
            BackendError::from(rejection)
        })?;

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!("Rejected request body: {}", e);
            BackendError::from(e)
        })?;
        Ok(Self(value))
    }
}
