//! Resolves a presented bearer token to a registered user.
//!
//! Two modes are offered: [`AuthorizationGuard::require_user`] for routes
//! that must be authenticated, and [`AuthorizationGuard::optional_user`]
//! for public routes that render differently when a user is known.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

use retrolog_core::error::AppError;
use retrolog_core::result::AppResult;
use retrolog_database::repositories::UserRepository;
use retrolog_entity::user::User;

use crate::jwt::{JwtDecoder, TokenError};

/// Looks users up by username.
#[async_trait]
pub trait UserLookup: Send + Sync {
    /// Exact-match lookup.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
}

#[async_trait]
impl UserLookup for UserRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        UserRepository::find_by_username(self, username).await
    }
}

/// Why a request could not be tied to a user.
#[derive(Debug, Error)]
pub enum AuthFailure {
    /// No token was presented.
    #[error("authentication required")]
    Unauthenticated,
    /// A token was presented but did not validate.
    #[error("{0}")]
    InvalidToken(#[from] TokenError),
    /// The token validated but names a user that does not exist.
    #[error("unknown user")]
    UnknownUser,
    /// The user lookup itself failed.
    #[error(transparent)]
    Storage(AppError),
}

impl From<AuthFailure> for AppError {
    fn from(failure: AuthFailure) -> Self {
        match failure {
            AuthFailure::Unauthenticated => AppError::unauthenticated("Authentication required"),
            AuthFailure::InvalidToken(e) => e.into(),
            AuthFailure::UnknownUser => AppError::unauthenticated("Unknown user"),
            AuthFailure::Storage(e) => e,
        }
    }
}

/// Token validation plus user resolution.
#[derive(Clone)]
pub struct AuthorizationGuard {
    decoder: JwtDecoder,
    users: Arc<dyn UserLookup>,
}

impl std::fmt::Debug for AuthorizationGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorizationGuard")
            .field("decoder", &self.decoder)
            .finish_non_exhaustive()
    }
}

impl AuthorizationGuard {
    /// Creates a guard over a decoder and a user source.
    pub fn new(decoder: JwtDecoder, users: Arc<dyn UserLookup>) -> Self {
        Self { decoder, users }
    }

    /// Resolves the token to a user, failing if that is not possible.
    pub async fn require_user(&self, token: Option<&str>) -> Result<User, AuthFailure> {
        let token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AuthFailure::Unauthenticated)?;

        let username = self.decoder.validate(token).map_err(|e| {
            debug!(reason = %e, "Rejected access token");
            AuthFailure::InvalidToken(e)
        })?;

        match self.users.find_by_username(&username).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => {
                debug!(username = %username, "Token names an unknown user");
                Err(AuthFailure::UnknownUser)
            }
            Err(e) => Err(AuthFailure::Storage(e)),
        }
    }

    /// Resolves the token to a user if possible, otherwise `None`.
    ///
    /// Every failure degrades to anonymous. Storage failures are logged.
    pub async fn optional_user(&self, token: Option<&str>) -> Option<User> {
        match self.require_user(token).await {
            Ok(user) => Some(user),
            Err(AuthFailure::Storage(e)) => {
                warn!(error = %e, "User lookup failed, treating request as anonymous");
                None
            }
            Err(_) => None,
        }
    }
}
