/**
 * Session Tokens
 *
 * This module issues and validates the signed bearer tokens returned by
 * `POST /login`. Tokens are HS256 JWTs carrying the account email, the issue
 * time and an absolute expiry 30 minutes after issuance.
 *
 * Tokens are stateless: there is no server-side session table and no
 * revocation list. A token is valid when its signature verifies under the
 * server secret and the current time is strictly before its expiry.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifetime of a freshly issued token
pub const TOKEN_TTL_MINUTES: i64 = 30;

/// Prefix used when a token is returned to or presented by a client
pub const BEARER_PREFIX: &str = "Bearer ";

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Account email
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Expiry as a timestamp
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

/// Reasons a presented token is refused
#[derive(Debug, Error)]
pub enum SessionError {
    /// Signature, algorithm or structure check failed
    #[error("invalid token: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),

    /// Signature is fine but the token is past its expiry
    #[error("token expired")]
    Expired,
}

/// Issues and validates session tokens with a server-held secret
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenIssuer {
    /// Create an issuer for the given secret with the default 30 minute TTL
    pub fn new(secret: &str) -> Self {
        Self::with_ttl(secret, Duration::minutes(TOKEN_TTL_MINUTES))
    }

    /// Create an issuer with a custom token lifetime
    pub fn with_ttl(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Create a token for `email`, valid from now
    ///
    /// # Returns
    /// JWT token string (without the `Bearer ` prefix)
    pub fn issue(&self, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(email, Utc::now())
    }

    /// Create a token for `email` as if issued at `now`
    pub fn issue_at(
        &self,
        email: &str,
        now: DateTime<Utc>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            email: email.to_string(),
            exp: (now + self.ttl).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
    }

    /// Verify a token against the current time
    pub fn validate(&self, token: &str) -> Result<Claims, SessionError> {
        self.validate_at(token, Utc::now())
    }

    /// Verify a token's signature and check it has not expired at `now`
    ///
    /// Expiry is checked here rather than by `jsonwebtoken` so that the check
    /// uses the caller's clock and has no leeway.
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, SessionError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)?.claims;
        if now.timestamp() >= claims.exp {
            return Err(SessionError::Expired);
        }
        Ok(claims)
    }

    /// Extract the token from an `Authorization` header value
    pub fn strip_bearer(header_value: &str) -> Option<&str> {
        header_value
            .strip_prefix(BEARER_PREFIX)
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}
