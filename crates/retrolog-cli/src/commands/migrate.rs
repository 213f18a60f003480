//! Database migration management commands.

use clap::{Args, Subcommand};
use sqlx::SqlitePool;

use retrolog_core::error::AppError;
use retrolog_database::migration::run_migrations;

use crate::output;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, pool: &SqlitePool) -> Result<(), AppError> {
    match &args.command {
        MigrateCommand::Run => {
            println!("Running database migrations...");
            run_migrations(pool).await?;
            output::print_success("All migrations applied successfully.");
        }
    }
    Ok(())
}
