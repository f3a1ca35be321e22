/**
 * Backend Error Types
 *
 * This module defines the error taxonomy returned by every HTTP handler.
 * Each variant maps to exactly one status code and one client-facing message.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - `DecodeError` - Request body is not well-formed JSON for the endpoint
 * - `SharedError` - A required field is missing (validation)
 * - `NotFound` - No entity matches the requested key
 * - `DuplicateError` - A uniqueness rule was violated
 * - `InvalidCredentials` - Login failed (deliberately undifferentiated)
 * - `Unauthorized` - Bearer token missing, malformed, forged or expired
 * - `Forbidden` - Valid token, but for a different account
 *
 * ## Internal Errors
 *
 * - `HashingError` - bcrypt failed
 * - `TokenError` - JWT signing failed
 * - `StorageError` - the database rejected or failed a query
 *
 * Internal errors carry their detail in `Display` (for logs) but expose a
 * fixed message to clients.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use goforum::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::not_found("Thread not found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Malformed request body
    #[error("Decode error: {message}")]
    DecodeError {
        /// Decoder message
        message: String,
    },

    /// Payload validation error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// No matching entity
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Uniqueness violation
    #[error("Duplicate: {message}")]
    DuplicateError {
        /// Human-readable error message
        message: String,
    },

    /// Unknown email or wrong password
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// Missing or invalid bearer token
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// Authenticated caller asked for another account
    #[error("Forbidden: {message}")]
    Forbidden {
        /// Human-readable error message
        message: String,
    },

    /// Password hashing or verification failure
    #[error("Hashing error: {message}")]
    HashingError {
        /// Underlying failure
        message: String,
    },

    /// Token signing failure
    #[error("Token error: {0}")]
    TokenError(#[from] jsonwebtoken::errors::Error),

    /// Database failure
    #[error("Storage error: {0}")]
    StorageError(#[from] sqlx::Error),
}

impl BackendError {
    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::DecodeError {
            message: message.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a duplicate error
    pub fn duplicate(message: impl Into<String>) -> Self {
        Self::DuplicateError {
            message: message.into(),
        }
    }

    /// Create an unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create a hashing error
    pub fn hashing(message: impl Into<String>) -> Self {
        Self::HashingError {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `DecodeError`, `SharedError`, `DuplicateError` - 400 Bad Request
    /// - `NotFound` - 404 Not Found
    /// - `InvalidCredentials`, `Unauthorized` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - `HashingError`, `TokenError`, `StorageError` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DecodeError { .. } => StatusCode::BAD_REQUEST,
            Self::SharedError(SharedError::ValidationError { .. }) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::DuplicateError { .. } => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::HashingError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::TokenError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message sent to the client
    ///
    /// Internal failures return a fixed message so that driver and library
    /// details never reach the response body.
    pub fn message(&self) -> String {
        match self {
            Self::DecodeError { message } => message.clone(),
            Self::SharedError(err) => err.client_message().to_string(),
            Self::NotFound { message } => message.clone(),
            Self::DuplicateError { message } => message.clone(),
            Self::InvalidCredentials => "Invalid login credentials".to_string(),
            Self::Unauthorized { message } => message.clone(),
            Self::Forbidden { message } => message.clone(),
            Self::HashingError { .. } => "Error while hashing password".to_string(),
            Self::TokenError(_) => "Error generating token".to_string(),
            Self::StorageError(_) => "Error accessing storage".to_string(),
        }
    }

    /// Whether this error is a server-side failure
    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }
}
