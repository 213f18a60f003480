//! `AuthUser` and `MaybeAuthUser`: pull the access token from the request
//! and resolve it to a user through the authorization guard.
//!
//! The `Authorization: Bearer` header wins; otherwise the auth cookie is
//! used, so browser clients that logged in through the API keep working.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use retrolog_core::error::AppError;
use retrolog_entity::user::User;

use crate::error::ApiError;
use crate::state::AppState;

/// Returns the token presented with a request, if any.
pub fn presented_token(parts: &Parts, cookie_name: &str) -> Option<String> {
    let bearer = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer ").or_else(|| v.strip_prefix("bearer ")))
        .map(str::trim)
        .filter(|t| !t.is_empty());

    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    CookieJar::from_headers(&parts.headers)
        .get(cookie_name)
        .map(|c| c.value().to_string())
        .filter(|t| !t.is_empty())
}

/// The authenticated user. Rejects with 401 when there is none.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl std::ops::Deref for AuthUser {
    type Target = User;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = presented_token(parts, &state.config.auth.cookie_name);
        let user = state
            .guard
            .require_user(token.as_deref())
            .await
            .map_err(AppError::from)?;
        Ok(AuthUser(user))
    }
}

/// The user, if the request carries a valid token. Never rejects.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<User>);

impl MaybeAuthUser {
    /// The viewer, if known.
    pub fn user(&self) -> Option<&User> {
        self.0.as_ref()
    }
}

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = presented_token(parts, &state.config.auth.cookie_name);
        Ok(MaybeAuthUser(state.guard.optional_user(token.as_deref()).await))
    }
}
