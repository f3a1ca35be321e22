//! Middleware Module
//!
//! This module contains the request-processing pieces that run before
//! handlers: extractors and middleware functions.
//!
//! # Architecture
//!
//! - **`auth`** - `AuthUser` extractor for routes that need a bearer token
//! - **`json`** - `JsonBody` extractor that reports bad bodies as 400
//! - **`logging`** - Request logging middleware
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn, routing::get, Router};
//! use goforum::backend::middleware::log_requests;
//!
//! let app: Router = Router::new()
//!     .route("/", get(|| async { "ok" }))
//!     .layer(from_fn(log_requests));
//! ```

pub mod auth;
pub mod json;
pub mod logging;

pub use auth::{AuthUser, AuthenticatedUser};
pub use json::JsonBody;
pub use logging::log_requests;
