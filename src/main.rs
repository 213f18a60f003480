//! RetroLog Server: a small multi-author blog.
//!
//! Main entry point that loads configuration, sets up logging, opens the
//! database, and starts the HTTP API.

use tracing_subscriber::{EnvFilter, fmt};

use retrolog_core::config::AppConfig;
use retrolog_core::error::AppError;
use retrolog_database::DatabasePool;
use retrolog_database::migration::run_migrations;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from `RETROLOG_CONFIG_DIR` (default `config/`) with
/// the `RETROLOG_ENV` overlay (default `development`).
fn load_configuration() -> Result<AppConfig, AppError> {
    let dir = std::env::var("RETROLOG_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
    let env = std::env::var("RETROLOG_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load_from(&dir, &env)
}

/// Initialize tracing/logging. `RUST_LOG` wins over `logging.level`.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting RetroLog v{}", env!("CARGO_PKG_VERSION"));

    if config.auth.jwt_secret == "CHANGE_ME_IN_PRODUCTION" {
        tracing::warn!("auth.jwt_secret is the built-in default; set RETROLOG__AUTH__JWT_SECRET");
    }

    tracing::info!(url = %config.database.url, "Connecting to database...");
    let db = DatabasePool::connect(&config.database).await?;

    if config.database.run_migrations {
        tracing::info!("Running database migrations...");
        run_migrations(db.pool()).await?;
        tracing::info!("Database migrations complete");
    }

    retrolog_api::run_server(config, db.pool().clone()).await?;

    db.close().await;
    tracing::info!("RetroLog server shut down gracefully");
    Ok(())
}
