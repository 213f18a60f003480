//! Auth handlers: signup, login, logout, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::dto::request::{LoginRequest, SignupRequest};
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SignupRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    let user = state
        .account_service
        .signup(&req.username, &req.password)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user.into()))))
}

/// POST /api/auth/login
///
/// Returns the token in the body and also sets it as an HTTP-only cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<LoginResponse>>), ApiError> {
    let outcome = state
        .account_service
        .login(&req.username, &req.password)
        .await?;

    let cookie = Cookie::build((
        state.config.auth.cookie_name.clone(),
        outcome.token.token.clone(),
    ))
    .path("/")
    .http_only(true)
    .same_site(SameSite::Lax);

    Ok((
        jar.add(cookie),
        Json(ApiResponse::ok(LoginResponse::new(outcome.token, outcome.user))),
    ))
}

/// POST /api/auth/logout
///
/// Tokens are stateless, so this only clears the cookie. A copied token
/// remains valid until it expires.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<MessageResponse>>) {
    let cookie = Cookie::build((state.config.auth.cookie_name.clone(), "")).path("/");

    (
        jar.remove(cookie),
        Json(ApiResponse::ok(MessageResponse {
            message: "Logged out".to_string(),
        })),
    )
}

/// GET /api/auth/me
pub async fn me(auth: AuthUser) -> Json<ApiResponse<UserResponse>> {
    Json(ApiResponse::ok(auth.0.into()))
}
