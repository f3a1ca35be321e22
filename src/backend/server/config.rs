/**
 * Server Configuration
 *
 * This module loads the server configuration from environment variables and
 * opens the SQLite database.
 *
 * # Environment Variables
 *
 * | Variable | Required | Default | Description |
 * |----------|----------|---------|-------------|
 * | `DATABASE_URL` | No | `sqlite://forum.db?mode=rwc` | SQLite connection URL |
 * | `SERVER_PORT` | No | 8080 | HTTP listen port |
 * | `LOG_LEVEL` | No | `info` | trace, debug, info, warn or error |
 * | `JWT_SECRET` | Yes | - | HMAC secret for session tokens |
 * | `BCRYPT_COST` | No | 14 | bcrypt work factor (4-31) |
 * | `DATABASE_MAX_CONNECTIONS` | No | 5 | Pool size |
 *
 * A variable that is set but empty is treated as a value, not as absent, so
 * `DATABASE_URL=` fails validation instead of falling back to the default.
 *
 * # Error Handling
 *
 * Configuration and database errors are fatal: the binary logs them and
 * exits with a non-zero status.
 */

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::backend::auth::passwords::{DEFAULT_BCRYPT_COST, MAX_BCRYPT_COST, MIN_BCRYPT_COST};

/// Default SQLite database, created next to the binary on first start
pub const DEFAULT_DATABASE_URL: &str = "sqlite://forum.db?mode=rwc";

/// Default HTTP server port
pub const DEFAULT_PORT: u16 = 8080;

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default database pool size
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Errors that can occur when loading configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable has an invalid value
    #[error("invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },
}

impl ConfigError {
    fn invalid(var: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            var: var.to_string(),
            message: message.into(),
        }
    }
}

/// Server configuration parsed from environment variables
#[derive(Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// SQLite connection URL
    pub database_url: String,
    /// HTTP server port
    pub port: u16,
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
    /// Secret used to sign session tokens
    pub jwt_secret: String,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Maximum number of pooled database connections
    pub database_max_connections: u32,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("database_url", &self.database_url)
            .field("port", &self.port)
            .field("log_level", &self.log_level)
            .field("jwt_secret", &"<redacted>")
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("database_max_connections", &self.database_max_connections)
            .finish()
    }
}

impl ServerConfig {
    /// Parse configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `JWT_SECRET` is missing or any variable has
    /// an invalid value.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use goforum::backend::server::config::ServerConfig;
    ///
    /// let config = ServerConfig::from_env().expect("Failed to load config");
    /// println!("Server will listen on port {}", config.port);
    /// ```
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Parse configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            port: parse_or("SERVER_PORT", &lookup, DEFAULT_PORT)?,
            log_level: lookup("LOG_LEVEL")
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
                .to_ascii_lowercase(),
            jwt_secret: lookup("JWT_SECRET")
                .ok_or_else(|| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            bcrypt_cost: parse_or("BCRYPT_COST", &lookup, DEFAULT_BCRYPT_COST)?,
            database_max_connections: parse_or(
                "DATABASE_MAX_CONNECTIONS",
                &lookup,
                DEFAULT_MAX_CONNECTIONS,
            )?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::invalid("DATABASE_URL", "missing database URL"));
        }
        if self.port == 0 {
            return Err(ConfigError::invalid("SERVER_PORT", "port must be non-zero"));
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::invalid(
                "LOG_LEVEL",
                format!("expected one of {}", LOG_LEVELS.join(", ")),
            ));
        }
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingEnvVar("JWT_SECRET".to_string()));
        }
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::invalid(
                "BCRYPT_COST",
                format!("must be between {} and {}", MIN_BCRYPT_COST, MAX_BCRYPT_COST),
            ));
        }
        if self.database_max_connections == 0 {
            return Err(ConfigError::invalid(
                "DATABASE_MAX_CONNECTIONS",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Address the HTTP listener binds to
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_or<T, F>(var: &str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::invalid(var, e.to_string())),
        None => Ok(default),
    }
}

/// Open the database pool and create the schema
///
/// This function:
/// 1. Parses `DATABASE_URL` (the file is created if missing)
/// 2. Creates a SQLite connection pool
/// 3. Runs the embedded migrations, which create the `users` table
///
/// # Errors
///
/// Any connection or migration failure. Callers treat this as fatal.
pub async fn load_database(config: &ServerConfig) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect_with(options)
        .await?;

    tracing::info!("Database connection pool created successfully");

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Open a private in-memory database with the schema applied
///
/// The pool holds exactly one connection that is never recycled, since every
/// SQLite in-memory connection is its own database.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Apply the embedded migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!()
        .run(pool)
        .await
        .map_err(|e| sqlx::Error::Migrate(Box::new(e)))?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}
