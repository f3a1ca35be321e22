//! GoForum - Main Library
//!
//! GoForum is a small forum backend built with Rust and Axum. It serves
//! discussion threads from an in-memory store and a user account service
//! (registration, login, profile) backed by SQLite, bcrypt password hashing
//! and signed JWT session tokens.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Plain data types shared by the handlers and tests
//!   - Thread records and request payloads
//!   - Validation error types
//!
//! - **`backend`** - Server-side code
//!   - Axum router, application state and configuration
//!   - Thread store and thread handlers
//!   - Authentication, password hashing and token issuance
//!   - Error taxonomy and HTTP conversion
//!
//! # Usage
//!
//! ```rust,no_run
//! use goforum::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! - Thread records live behind a single `RwLock`, so concurrent writers are
//!   serialized and readers always see a consistent snapshot.
//! - Account uniqueness is enforced by unique indexes in the database, not by
//!   a lookup followed by an insert.
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations
//! - `shared::SharedError` for payload validation
//! - `backend::error::BackendError` for everything returned to HTTP clients

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
