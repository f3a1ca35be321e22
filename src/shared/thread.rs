/**
 * Thread Data Structures
 *
 * This module defines the discussion thread record and the two payloads that
 * act on it: the body of `POST /threads` and the partial body of
 * `PUT /threads/{id}`.
 *
 * Missing JSON fields decode as empty strings, so a body such as `{}` is
 * well-formed and is rejected by validation rather than by the decoder.
 */
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// A forum discussion thread
///
/// # Example
/// ```rust
/// use goforum::shared::Thread;
///
/// let thread = Thread {
///     id: "1".to_string(),
///     title: "Hi".to_string(),
///     description: "first".to_string(),
/// };
/// assert_eq!(thread.id, "1");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Thread {
    /// Thread identifier (client-supplied or generated)
    pub id: String,
    /// Thread title
    pub title: String,
    /// Thread body text
    pub description: String,
}

/// Body of a create request
///
/// `id` is optional: an empty id asks the server to generate one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateThreadRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl CreateThreadRequest {
    /// Check that both `title` and `description` are present
    ///
    /// # Errors
    /// `SharedError::ValidationError` naming the first empty field.
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.title.is_empty() {
            return Err(SharedError::validation("title", "Missing title or description"));
        }
        if self.description.is_empty() {
            return Err(SharedError::validation("description", "Missing title or description"));
        }
        Ok(())
    }

    /// Build the stored record, using `generated_id` when no id was supplied
    pub fn into_thread(self, generated_id: impl FnOnce() -> String) -> Thread {
        let id = if self.id.is_empty() { generated_id() } else { self.id };
        Thread {
            id,
            title: self.title,
            description: self.description,
        }
    }
}

/// Partial update for an existing thread
///
/// Absent and empty fields both mean "leave unchanged"; a client cannot blank
/// a field through this payload. An `id` in the body is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThreadPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ThreadPatch {
    /// Apply the non-empty fields of this patch to `thread`
    pub fn apply_to(self, thread: &mut Thread) {
        if let Some(title) = self.title.filter(|t| !t.is_empty()) {
            thread.title = title;
        }
        if let Some(description) = self.description.filter(|d| !d.is_empty()) {
            thread.description = description;
        }
    }
}
