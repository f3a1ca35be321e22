/**
 * GoForum Server Entry Point
 *
 * This is the main entry point for the GoForum backend server. It loads the
 * configuration, opens the database and serves the Axum router until it
 * receives Ctrl+C or SIGTERM.
 *
 * Configuration and database failures are fatal and exit with status 1.
 */

use std::process::ExitCode;

use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use goforum::backend::server::config::{ServerConfig, DEFAULT_LOG_LEVEL};
use goforum::backend::server::init::create_app;

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            init_logging(DEFAULT_LOG_LEVEL);
            tracing::error!(error = %err, "Failed to load configuration");
            eprintln!("Error: {err}");
            eprintln!();
            eprintln!("Required environment variables:");
            eprintln!("  JWT_SECRET                - Secret used to sign session tokens");
            eprintln!();
            eprintln!("Optional environment variables:");
            eprintln!("  DATABASE_URL              - SQLite URL (default: sqlite://forum.db?mode=rwc)");
            eprintln!("  SERVER_PORT               - HTTP server port (default: 8080)");
            eprintln!("  LOG_LEVEL                 - trace|debug|info|warn|error (default: info)");
            eprintln!("  BCRYPT_COST               - bcrypt work factor, 4-31 (default: 14)");
            eprintln!("  DATABASE_MAX_CONNECTIONS  - Pool size (default: 5)");
            return ExitCode::from(1);
        }
    };

    init_logging(&config.log_level);
    tracing::info!(?config, "GoForum server starting");

    let app = match create_app(&config).await {
        Ok(app) => app,
        Err(err) => {
            tracing::error!(error = %err, "Failed to initialize database");
            return ExitCode::from(1);
        }
    };

    let addr = config.bind_address();
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(error = %err, address = %addr, "Failed to bind to address");
            return ExitCode::from(1);
        }
    };
    tracing::info!("Server listening on {}", addr);

    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %err, "Server error");
        return ExitCode::from(1);
    }

    tracing::info!("Server shutdown complete");
    ExitCode::SUCCESS
}

/// Initialize tracing
///
/// `RUST_LOG` takes priority; otherwise `level` applies to every target.
fn init_logging(level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .init();
}

/// Resolves when SIGINT (Ctrl+C) or SIGTERM is received
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
