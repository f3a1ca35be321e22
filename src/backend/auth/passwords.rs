/**
 * Password Hashing
 *
 * bcrypt hashing and verification for account passwords. bcrypt is CPU bound
 * (a cost of 14 takes on the order of a second), so both operations run on
 * Tokio's blocking thread pool instead of an async worker.
 */

use crate::backend::error::BackendError;

/// bcrypt work factor used when none is configured
pub const DEFAULT_BCRYPT_COST: u32 = 14;

/// Lowest work factor bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;

/// Highest work factor bcrypt accepts
pub const MAX_BCRYPT_COST: u32 = 31;

/// Salted one-way password hasher with a fixed work factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt work factor
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// bcrypt work factor used for new hashes
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password
    ///
    /// # Errors
    /// `BackendError::HashingError` if bcrypt rejects the input or the
    /// blocking task fails.
    pub async fn hash(&self, password: String) -> Result<String, BackendError> {
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| BackendError::hashing(format!("hashing task failed: {}", e)))?
            .map_err(|e| BackendError::hashing(e.to_string()))
    }

    /// Check a plaintext password against a stored hash
    ///
    /// A stored value that is not a bcrypt hash counts as a mismatch, so a
    /// corrupt row reads as "wrong password" rather than a server error.
    pub async fn verify(&self, password: String, hash: String) -> Result<bool, BackendError> {
        let verified = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| BackendError::hashing(format!("verification task failed: {}", e)))?;

        match verified {
            Ok(valid) => Ok(valid),
            Err(e) => {
                tracing::warn!("Stored password hash could not be parsed: {}", e);
                Ok(false)
            }
        }
    }

    /// Spend the same bcrypt work as `verify` for an account that does not exist
    ///
    /// Always reports a mismatch.
    pub async fn verify_missing(&self, password: String) -> Result<bool, BackendError> {
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| BackendError::hashing(format!("verification task failed: {}", e)))?
            .map_err(|e| BackendError::hashing(e.to_string()))?;
        Ok(false)
    }
}
