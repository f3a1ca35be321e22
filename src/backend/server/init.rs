/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server:
 * opening the database, building the shared state and configuring routes.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite pool and run migrations
 * 2. Create the token issuer, password hasher and empty thread store
 * 3. Create and configure the router
 *
 * Any failure here is returned to the caller; the binary treats it as fatal.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Validated server configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// Returns the database error if the pool cannot be opened or the
/// `users` table cannot be created.
pub async fn create_app(config: &ServerConfig) -> Result<Router, sqlx::Error> {
    tracing::info!("Initializing GoForum backend server");

    let db_pool = load_database(config).await?;
    let app_state = AppState::from_config(config, db_pool);

    tracing::info!(
        bcrypt_cost = app_state.passwords.cost(),
        "Application state initialized"
    );

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}
