//! Authentication test helpers
//!
//! Provides utilities for creating test users and tokens.

use goforum::backend::auth::passwords::PasswordHasher;
use goforum::backend::auth::sessions::TokenIssuer;
use goforum::backend::auth::users::create_user;
use sqlx::SqlitePool;

/// Secret used by every test application
pub const TEST_SECRET: &str = "integration-test-secret";

/// Test user credentials
pub struct TestUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

impl TestUser {
    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Create a test user directly in the database
pub async fn create_test_user(
    pool: &SqlitePool,
    hasher: PasswordHasher,
    username: &str,
    email: &str,
    password: &str,
) -> TestUser {
    let password_hash = hasher
        .hash(password.to_string())
        .await
        .expect("Failed to hash password");
    let user = create_user(pool, username, email, &password_hash)
        .await
        .expect("Failed to create test user");
    let token = TokenIssuer::new(TEST_SECRET)
        .issue(&user.email)
        .expect("Failed to create test token");

    TestUser {
        id: user.id,
        username: user.username,
        email: user.email,
        password: password.to_string(),
        token,
    }
}
