//! Database test fixtures and utilities
//!
//! Every fixture is a private in-memory SQLite database with the migrations
//! applied, so tests never share rows.

use sqlx::SqlitePool;

use goforum::backend::server::config::connect_in_memory;

/// Test database fixture
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    /// Create a new test database fixture
    pub async fn new() -> Self {
        let pool = connect_in_memory()
            .await
            .expect("Failed to create in-memory database");
        Self { pool }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Number of rows in the `users` table, deleted rows included
    pub async fn user_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count users")
    }
}
