//! Account operations over the credential store.

use std::sync::Arc;

use tracing::{debug, info};

use retrolog_auth::jwt::{IssuedToken, JwtEncoder};
use retrolog_auth::password::{PasswordHasher, PasswordValidator};
use retrolog_core::error::AppError;
use retrolog_database::repositories::UserRepository;
use retrolog_entity::user::{NewUser, User};

/// Same message for an unknown user and a wrong password.
const BAD_CREDENTIALS: &str = "Invalid username or password";

/// Handles signup and credential checks.
#[derive(Debug, Clone)]
pub struct AccountService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Signup policy.
    validator: Arc<PasswordValidator>,
    /// Token issuer.
    encoder: Arc<JwtEncoder>,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The authenticated user.
    pub user: User,
    /// The freshly issued access token.
    pub token: IssuedToken,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            encoder,
        }
    }

    /// Registers a new user.
    ///
    /// Fails with `Conflict` if the username is taken. The database's
    /// unique constraint backs up the pre-check for concurrent signups.
    pub async fn signup(&self, username: &str, password: &str) -> Result<User, AppError> {
        self.validator.validate_username(username)?;
        self.validator.validate(password)?;

        if self.user_repo.find_by_username(username).await?.is_some() {
            return Err(AppError::conflict(format!(
                "Username '{username}' is already taken"
            )));
        }

        let password_hash = self.hasher.hash_password(password)?;
        let user = self
            .user_repo
            .create(&NewUser {
                username: username.to_string(),
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, "User signed up");
        Ok(user)
    }

    /// Checks a username and password.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AppError> {
        let Some(user) = self.user_repo.find_by_username(username).await? else {
            debug!(username = %username, "Login for unknown user");
            return Err(AppError::unauthenticated(BAD_CREDENTIALS));
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            debug!(user_id = %user.id, "Login with wrong password");
            return Err(AppError::unauthenticated(BAD_CREDENTIALS));
        }

        Ok(user)
    }

    /// Authenticates and issues an access token.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let user = self.authenticate(username, password).await?;
        let token = self.encoder.issue_default(&user.username)?;

        info!(user_id = %user.id, expires_at = %token.expires_at, "User logged in");
        Ok(LoginOutcome { user, token })
    }

    /// Gets a user by username.
    pub async fn get_by_username(&self, username: &str) -> Result<User, AppError> {
        self.user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User '{username}' not found")))
    }

    /// Lists every user.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.user_repo.find_all().await
    }
}
