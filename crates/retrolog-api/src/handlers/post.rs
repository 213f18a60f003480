//! Post handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use retrolog_core::types::PostId;

use crate::dto::request::{CreatePostBody, UpdatePostBody};
use crate::dto::response::{ApiResponse, MessageResponse, PostResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, MaybeAuthUser, ValidatedJson, parse_id};
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
) -> Result<Json<ApiResponse<Vec<PostResponse>>>, ApiError> {
    let posts = state.post_service.list_posts().await?;
    Ok(Json(ApiResponse::ok(PostResponse::list(posts, viewer.user()))))
}

/// POST /api/posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreatePostBody>,
) -> Result<(StatusCode, Json<ApiResponse<PostResponse>>), ApiError> {
    let post = state.post_service.create_post(&auth, req.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(PostResponse::for_viewer(post, Some(&auth.0)))),
    ))
}

/// GET /api/posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<PostResponse>>, ApiError> {
    let id: PostId = parse_id(&id)?;
    let post = state.post_service.get_post(id).await?;
    Ok(Json(ApiResponse::ok(PostResponse::for_viewer(
        post,
        viewer.user(),
    ))))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdatePostBody>,
) -> Result<Json<ApiResponse<PostResponse>>, ApiError> {
    let id: PostId = parse_id(&id)?;
    let post = state
        .post_service
        .update_post(&auth, id, req.into())
        .await?;
    Ok(Json(ApiResponse::ok(PostResponse::for_viewer(
        post,
        Some(&auth.0),
    ))))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let id: PostId = parse_id(&id)?;
    state.post_service.delete_post(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: format!("Post {id} deleted"),
    })))
}
