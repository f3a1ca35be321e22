//! Shared Error Types
//!
//! This module defines error types for failures that are independent of the
//! transport, such as a payload that is missing a required field.
//!
//! # Usage
//!
//! ```rust
//! use goforum::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "Missing title or description");
//! assert!(error.to_string().contains("title"));
//! ```
use thiserror::Error;

/// Shared error types produced while checking request payloads
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The message intended for API clients, without the field prefix
    pub fn client_message(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = SharedError::validation("email", "Invalid email format");
        match error {
            SharedError::ValidationError { field, message } => {
                assert_eq!(field, "email");
                assert_eq!(message, "Invalid email format");
            }
        }
    }

    #[test]
    fn test_client_message_drops_field_prefix() {
        let error = SharedError::validation("title", "Missing title or description");
        assert_eq!(error.client_message(), "Missing title or description");
        assert!(error.to_string().contains("'title'"));
    }

    #[test]
    fn test_error_clone() {
        let error = SharedError::validation("field", "message");
        assert_eq!(error.clone(), error);
    }
}
