//! CLI command definitions and dispatch.

pub mod migrate;
pub mod post;
pub mod user;

use clap::{Parser, Subcommand};
use sqlx::SqlitePool;
use tracing::{debug, info};

use retrolog_core::config::AppConfig;
use retrolog_core::error::AppError;
use retrolog_database::DatabasePool;

use crate::output::OutputFormat;

/// RetroLog: a small multi-author blog
#[derive(Debug, Parser)]
#[command(name = "retrolog", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding default.toml and the environment overlays
    #[arg(long, default_value = "config")]
    pub config_dir: String,

    /// Environment overlay to load (config/{env}.toml)
    #[arg(long, env = "RETROLOG_ENV", default_value = "development")]
    pub config_env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// User management
    User(user::UserArgs),
    /// Post listing and authoring
    Post(post::PostArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load_from(&self.config_dir, &self.config_env)?;
        debug!(
            config_dir = %self.config_dir,
            env = %self.config_env,
            database = %config.database.url,
            "Configuration loaded"
        );
        let pool = create_db_pool(&config).await?;

        let result = match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &pool).await,
            Commands::User(args) => user::execute(args, &config, &pool, self.format).await,
            Commands::Post(args) => post::execute(args, &pool, self.format).await,
        };

        pool.close().await;
        info!(ok = result.is_ok(), "Command finished");
        result
    }
}

/// Helper: create database pool from config
pub async fn create_db_pool(config: &AppConfig) -> Result<SqlitePool, AppError> {
    let pool = DatabasePool::connect(&config.database).await?;
    Ok(pool.into_pool())
}
