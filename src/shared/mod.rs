//! Shared Module
//!
//! This module contains the plain data types used on both sides of the HTTP
//! boundary: thread records, the request payloads that create or patch them,
//! and the validation error type.
//!
//! Nothing here depends on Axum or the database, so the types can be reused
//! by clients and tests without pulling in the server.

/// Thread data structures
pub mod thread;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use thread::{CreateThreadRequest, Thread, ThreadPatch};
pub use error::SharedError;
