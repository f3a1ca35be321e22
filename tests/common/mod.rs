//! Common test utilities and helpers
//!
//! This module provides shared utilities for all integration tests including:
//! - In-memory database fixtures
//! - A test application driven through `tower::ServiceExt::oneshot`
//! - Authentication test helpers
//! - Custom assertion macros

#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;
pub mod database;
pub mod test_app;

pub use auth_helpers::*;
pub use database::*;
pub use test_app::*;
