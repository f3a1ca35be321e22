/**
 * Registration Handler
 *
 * This module implements the user registration handler for POST /register.
 *
 * # Registration Process
 *
 * 1. Decode and validate the request body
 * 2. Hash the password with bcrypt
 * 3. Insert the user; the unique indexes reject a taken username or email
 * 4. Return the created user without its password hash
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::{RegisterRequest, UserResponse};
use crate::backend::auth::users::{create_user, is_unique_violation, DUPLICATE_USER_MESSAGE};
use crate::backend::error::BackendError;
use crate::backend::middleware::JsonBody;
use crate::backend::server::state::AppState;

/// Registration handler
///
/// # Arguments
///
/// * `State(state)` - Application state (database pool and hasher)
/// * `JsonBody(request)` - `{username, email, password}`
///
/// # Returns
///
/// 201 Created with the new user
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body, missing field, or username/email already taken
/// * `500 Internal Server Error` - Hashing or database failure
///
/// # Example Request
///
/// ```http
/// POST /register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "email": "alice@example.com",
///   "password": "securepassword123"
/// }
/// ```
pub async fn register(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), BackendError> {
    request.validate()?;
    tracing::info!("Registration request for: {}", request.email);

    let RegisterRequest {
        username,
        email,
        password,
    } = request;

    let password_hash = state.passwords.hash(password).await?;

    let user = create_user(&state.db_pool, &username, &email, &password_hash)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                tracing::warn!("Username or email already registered: {} / {}", username, email);
                BackendError::duplicate(DUPLICATE_USER_MESSAGE)
            } else {
                BackendError::from(e)
            }
        })?;

    tracing::info!("User created: {} ({})", user.username, user.id);
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
