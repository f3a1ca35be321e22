//! Backend Module
//!
//! This module contains all server-side code for the forum: the Axum HTTP
//! server, the thread endpoints and the account endpoints.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`threads`** - Thread store and CRUD handlers
//! - **`auth`** - Users, password hashing, session tokens
//! - **`middleware`** - Extractors and request logging
//! - **`error`** - Backend error types and their HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── threads/        - Threads
//! ├── auth/           - Accounts
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! Handlers share one `AppState`. Threads are held in memory behind a
//! `parking_lot::RwLock`; users are stored in SQLite.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. `BackendError` implements
//! `IntoResponse`, producing a status code and a plain-text message.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Discussion threads
pub mod threads;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

pub use error::BackendError;
pub use server::create_app;
