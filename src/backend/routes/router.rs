/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Root welcome route
 * 2. Thread routes (`/threads`)
 * 3. API routes (registration, login, profile)
 * 4. Fallback handler (404)
 *
 * Request logging wraps every route, including the fallback.
 */

use axum::{http::StatusCode, middleware::from_fn, routing::get, Router};

use crate::backend::middleware::log_requests;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::thread_routes::configure_thread_routes;
use crate::backend::server::state::AppState;

/// Body of `GET /`
pub const WELCOME_MESSAGE: &str = "Welcome to GoForum!\n";

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state shared by every handler
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Route Details
///
/// - `GET /` - Welcome message
/// - `POST|GET /threads` - Create and list threads
/// - `GET|PUT|DELETE /threads/{id}` - Single thread operations
/// - `POST /register` - User registration
/// - `POST /login` - User login
/// - `GET /profile` - Profile lookup (bearer token required)
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/", get(welcome));

    let router = configure_thread_routes(router);
    let router = configure_api_routes(router);

    router
        .fallback(not_found)
        .layer(from_fn(log_requests))
        .with_state(app_state)
}

async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 page not found\n")
}
