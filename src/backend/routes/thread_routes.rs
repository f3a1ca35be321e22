/**
 * Thread Routes
 *
 * - `POST /threads` - Create a thread
 * - `GET /threads` - List all threads
 * - `GET /threads/{id}` - Get one thread
 * - `PUT /threads/{id}` - Update a thread
 * - `DELETE /threads/{id}` - Delete a thread
 *
 * No route here requires authentication.
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::server::state::AppState;
use crate::backend::threads::{create_thread, delete_thread, get_thread, list_threads, update_thread};

/// Configure thread routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with thread routes configured
pub fn configure_thread_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/threads", post(create_thread).get(list_threads))
        .route(
            "/threads/{id}",
            get(get_thread).put(update_thread).delete(delete_thread),
        )
}
