/**
 * API Route Handlers
 *
 * This module defines the account endpoints:
 * - `POST /register` - User registration
 * - `POST /login` - User login, returns `Bearer <token>`
 * - `GET /profile` - User lookup, requires a bearer token
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_profile, login, register};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
///
/// # Authentication
///
/// `/profile` checks the token through the `AuthUser` extractor. The other
/// routes are public.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/profile", get(get_profile))
}
