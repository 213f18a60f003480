//! User management CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use sqlx::SqlitePool;
use tabled::Tabled;

use retrolog_auth::jwt::JwtEncoder;
use retrolog_auth::password::{PasswordHasher, PasswordValidator};
use retrolog_core::config::AppConfig;
use retrolog_core::error::AppError;
use retrolog_database::repositories::UserRepository;
use retrolog_entity::user::User;
use retrolog_service::AccountService;

use crate::output::{self, OutputFormat};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Register a new user
    Create {
        /// Username
        username: String,
        /// Password (prompted if omitted)
        #[arg(long)]
        password: Option<String>,
    },
    /// Show one user
    Show {
        /// Username
        username: String,
    },
    /// List all users
    List,
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: i64,
    /// Username
    username: String,
    /// Created at
    created_at: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.get(),
            username: u.username.clone(),
            created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config: &AppConfig,
    pool: &SqlitePool,
    format: OutputFormat,
) -> Result<(), AppError> {
    let accounts = AccountService::new(
        Arc::new(UserRepository::new(pool.clone())),
        Arc::new(PasswordHasher::new()),
        Arc::new(PasswordValidator::new(&config.auth)),
        Arc::new(JwtEncoder::new(&config.auth)),
    );

    match &args.command {
        UserCommand::Create { username, password } => {
            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let user = accounts.signup(username, &password).await?;
            output::print_success(&format!("User '{}' created (id {})", user.username, user.id));
        }
        UserCommand::Show { username } => {
            let user = accounts.get_by_username(username).await?;
            output::print_item(&UserRow::from(&user), format);
        }
        UserCommand::List => {
            let users = accounts.list_users().await?;
            let rows: Vec<UserRow> = users.iter().map(UserRow::from).collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}
