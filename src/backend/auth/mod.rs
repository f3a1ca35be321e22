//! Authentication Module
//!
//! This module handles user registration, login and profile lookup. It owns
//! the `users` table, password hashing and session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── passwords.rs    - bcrypt hashing on the blocking pool
//! ├── sessions.rs     - Session token issuance and validation
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - User authentication handler
//!     └── profile.rs  - Profile lookup handler
//! ```
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt (cost 14 by default) before storage
//! - Session tokens are HS256 JWTs that expire after 30 minutes
//! - Invalid credentials return 401 with no hint of which part was wrong
//! - Responses never include the password hash

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod passwords;

/// Session token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_profile, login, register};
pub use handlers::{LoginRequest, ProfileQuery, RegisterRequest, UserResponse};
