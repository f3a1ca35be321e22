/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - The thread store (in memory, behind a trait object)
 * - The SQLite pool holding the `users` table
 * - The session token issuer
 * - The password hasher
 *
 * # Thread Safety
 *
 * Every field is cheap to clone and safe to share between handlers:
 * - `Arc<dyn ThreadStore>` does its own locking
 * - `SqlitePool` is reference counted internally
 * - `Arc<TokenIssuer>` is read-only after construction
 * - `PasswordHasher` is `Copy`
 *
 * # Example
 *
 * ```rust
 * use goforum::backend::server::state::AppState;
 * use axum::extract::State;
 *
 * async fn handler(State(state): State<AppState>) -> usize {
 *     state.threads.list().len()
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::server::config::ServerConfig;
use crate::backend::threads::store::{InMemoryThreadStore, ThreadStore};

/// Application state shared by every request handler
///
/// # Fields
///
/// * `threads` - Thread store used by the `/threads` handlers
/// * `db_pool` - SQLite pool for account records
/// * `tokens` - Issues and validates bearer tokens
/// * `passwords` - bcrypt hasher with the configured cost
#[derive(Clone)]
pub struct AppState {
    /// Discussion threads, kept in memory for the life of the process
    pub threads: Arc<dyn ThreadStore>,

    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Session token issuer/validator
    pub tokens: Arc<TokenIssuer>,

    /// Password hasher
    pub passwords: PasswordHasher,
}

impl AppState {
    /// Build state from its parts with an empty in-memory thread store
    pub fn new(db_pool: SqlitePool, tokens: TokenIssuer, passwords: PasswordHasher) -> Self {
        Self {
            threads: Arc::new(InMemoryThreadStore::new()),
            db_pool,
            tokens: Arc::new(tokens),
            passwords,
        }
    }

    /// Build state for a loaded configuration and an open pool
    pub fn from_config(config: &ServerConfig, db_pool: SqlitePool) -> Self {
        Self::new(
            db_pool,
            TokenIssuer::new(&config.jwt_secret),
            PasswordHasher::new(config.bcrypt_cost),
        )
    }
}

impl FromRef<AppState> for Arc<dyn ThreadStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.threads.clone()
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Allows handlers to take `State(Arc<TokenIssuer>)` directly.
impl FromRef<AppState> for Arc<TokenIssuer> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.passwords
    }
}
