/**
 * User Model and Database Operations
 *
 * This module handles the `users` table: inserting new accounts and looking
 * them up by email. Username and email uniqueness is enforced by unique
 * indexes over live (non-deleted) rows, so a conflicting insert fails inside
 * the database instead of racing a separate existence check.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// Message returned when a registration collides with an existing account
pub const DUPLICATE_USER_MESSAGE: &str = "Username or email already exists";

/// User row as stored in the database
///
/// This type is never serialized into a response; see
/// `handlers::types::UserResponse` for the public view.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Auto-increment user ID
    pub id: i64,
    /// Username (unique among live accounts)
    pub username: String,
    /// User email address (unique among live accounts)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker; deleted rows are invisible to lookups
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - User's chosen username
/// * `email` - User email
/// * `password_hash` - Hashed password
///
/// # Returns
/// Created user or error. A username or email collision surfaces as a
/// database error for which [`is_unique_violation`] returns true.
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, email, password_hash, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?4)
        RETURNING id, username, email, password_hash, created_at, updated_at, deleted_at
        "#,
    )
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - User email
///
/// # Returns
/// User or None if not found (or soft-deleted)
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, created_at, updated_at, deleted_at
        FROM users
        WHERE email = ?1 AND deleted_at IS NULL
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Whether a database error is a unique-constraint violation
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}
