//! Routes Module
//!
//! HTTP route configuration and router assembly.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs            - Module exports
//! ├── router.rs         - Main router creation
//! ├── thread_routes.rs  - /threads routes
//! └── api_routes.rs     - /register, /login, /profile
//! ```

/// Main router
pub mod router;

/// Thread routes
pub mod thread_routes;

/// Account routes
pub mod api_routes;

pub use router::create_router;
