/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Generate a session token
 * 4. Return `Bearer <token>` as plain text
 *
 * # Security
 *
 * - Unknown email and wrong password produce the same 401 response and
 *   both cost one bcrypt computation
 * - Tokens expire 30 minutes after issuance
 * - Passwords and tokens are never logged
 */

use axum::extract::State;

use crate::backend::auth::handlers::types::LoginRequest;
use crate::backend::auth::sessions::BEARER_PREFIX;
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::BackendError;
use crate::backend::middleware::JsonBody;
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Arguments
///
/// * `State(state)` - Application state
/// * `JsonBody(request)` - Login request containing email and password
///
/// # Returns
///
/// Plain-text body `Bearer <token>` with 200 OK
///
/// # Errors
///
/// * `401 Unauthorized` - Unknown email or wrong password (same body for both)
/// * `500 Internal Server Error` - Database, hashing or signing failure
///
/// # Example Request
///
/// ```http
/// POST /login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "securepassword123"
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<String, BackendError> {
    tracing::info!("Login request for: {}", request.email);

    let user = get_user_by_email(&state.db_pool, &request.email).await?;

    let Some(user) = user else {
        state.passwords.verify_missing(request.password).await?;
        tracing::warn!("Login for unknown email: {}", request.email);
        return Err(BackendError::InvalidCredentials);
    };

    let valid = state
        .passwords
        .verify(request.password, user.password_hash)
        .await?;
    if !valid {
        tracing::warn!("Invalid password for user: {}", user.email);
        return Err(BackendError::InvalidCredentials);
    }

    let token = state.tokens.issue(&user.email)?;

    tracing::info!("User logged in successfully: {} ({})", user.username, user.email);
    Ok(format!("{}{}", BEARER_PREFIX, token))
}
