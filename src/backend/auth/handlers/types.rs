/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * registration, login and profile handlers.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;
use crate::shared::SharedError;

/// Registration request
///
/// Missing fields decode as empty strings and fail validation.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct RegisterRequest {
    /// User's chosen username
    #[serde(default)]
    pub username: String,
    /// User's email address
    #[serde(default)]
    pub email: String,
    /// User's password (will be hashed before storage)
    #[serde(default)]
    pub password: String,
}

impl RegisterRequest {
    /// Check that every field is present and the email looks like one
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.username.trim().is_empty() {
            return Err(SharedError::validation("username", "Missing username"));
        }
        if self.email.trim().is_empty() {
            return Err(SharedError::validation("email", "Missing email"));
        }
        if !self.email.contains('@') {
            return Err(SharedError::validation("email", "Invalid email address"));
        }
        if self.password.is_empty() {
            return Err(SharedError::validation("password", "Missing password"));
        }
        Ok(())
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Query string of `GET /profile`
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ProfileQuery {
    /// Account to look up; defaults to the token's own email
    pub email: Option<String>,
}

/// User response (without sensitive data)
///
/// Contains user information that is safe to return to clients.
/// There is no password hash field to leak.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
