//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── register.rs - User registration handler
//! ├── login.rs    - User authentication handler
//! └── profile.rs  - Profile lookup handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /register - User registration
//! - **`login`** - POST /login - User authentication
//! - **`get_profile`** - GET /profile - Profile lookup
//!
//! # Authentication Flow
//!
//! 1. **Register**: username, email and password → user created → user returned
//! 2. **Login**: email and password → credentials verified → `Bearer <token>` returned
//! 3. **Profile**: bearer token → token verified → user info returned
//!
//! # Example
//!
//! ```rust,no_run
//! use goforum::backend::auth::handlers::{get_profile, login, register};
//! use goforum::backend::server::AppState;
//! use axum::{routing::{get, post}, Router};
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/register", post(register))
//!     .route("/login", post(login))
//!     .route("/profile", get(get_profile));
//! ```

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Profile handler
pub mod profile;

pub use types::{LoginRequest, ProfileQuery, RegisterRequest, UserResponse};

pub use login::login;
pub use profile::get_profile;
pub use register::register;
