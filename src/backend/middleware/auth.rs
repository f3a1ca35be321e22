/**
 * Authentication Extractor
 *
 * This module provides the `AuthUser` extractor for routes that require a
 * session token. It reads the `Authorization: Bearer <token>` header,
 * verifies the token signature and expiry, and hands the token's email to
 * the handler.
 *
 * Any failure (missing header, wrong scheme, forged or expired token) is
 * rejected with 401 Unauthorized before the handler runs.
 */

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::backend::auth::sessions::{SessionError, TokenIssuer};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Authenticated caller, taken from a valid bearer token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Email carried by the token
    pub email: String,
}

/// Axum extractor for the authenticated caller
///
/// # Example
///
/// ```rust,no_run
/// use goforum::backend::middleware::AuthUser;
///
/// async fn handler(AuthUser(user): AuthUser) -> String {
///     user.email
/// }
/// ```
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                tracing::warn!("Missing Authorization header");
                BackendError::unauthorized("Missing authorization token")
            })?;

        let token = TokenIssuer::strip_bearer(header).ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            BackendError::unauthorized("Invalid authorization header")
        })?;

        let claims = state.tokens.validate(token).map_err(|e| {
            tracing::warn!("Rejected token: {}", e);
            match e {
                SessionError::Expired => BackendError::unauthorized("Token expired"),
                SessionError::Invalid(_) => BackendError::unauthorized("Invalid token"),
            }
        })?;

        Ok(AuthUser(AuthenticatedUser {
            email: claims.email,
        }))
    }
}
