//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::SqlitePool;

use retrolog_auth::guard::{AuthorizationGuard, UserLookup};
use retrolog_auth::jwt::{JwtDecoder, JwtEncoder};
use retrolog_auth::password::{PasswordHasher, PasswordValidator};
use retrolog_core::config::AppConfig;
use retrolog_database::repositories::{CommentRepository, PostRepository, UserRepository};
use retrolog_service::{AccountService, CommentService, PostService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// SQLite connection pool
    pub db_pool: SqlitePool,

    // ── Auth ─────────────────────────────────────────────────
    /// Resolves bearer tokens to users
    pub guard: Arc<AuthorizationGuard>,

    // ── Services ─────────────────────────────────────────────
    /// Signup and login
    pub account_service: Arc<AccountService>,
    /// Posts
    pub post_service: Arc<PostService>,
    /// Comments
    pub comment_service: Arc<CommentService>,
}

impl AppState {
    /// Wires repositories, auth, and services over one pool.
    pub fn new(config: AppConfig, db_pool: SqlitePool) -> Self {
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let post_repo = Arc::new(PostRepository::new(db_pool.clone()));
        let comment_repo = Arc::new(CommentRepository::new(db_pool.clone()));

        let encoder = Arc::new(JwtEncoder::new(&config.auth));
        let decoder = JwtDecoder::new(&config.auth);
        let guard = Arc::new(AuthorizationGuard::new(
            decoder,
            Arc::clone(&user_repo) as Arc<dyn UserLookup>,
        ));

        let account_service = Arc::new(AccountService::new(
            Arc::clone(&user_repo),
            Arc::new(PasswordHasher::new()),
            Arc::new(PasswordValidator::new(&config.auth)),
            encoder,
        ));
        let post_service = Arc::new(PostService::new(Arc::clone(&post_repo)));
        let comment_service = Arc::new(CommentService::new(comment_repo, post_repo));

        Self {
            config: Arc::new(config),
            db_pool,
            guard,
            account_service,
            post_service,
            comment_service,
        }
    }
}
