//! Comment handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use retrolog_core::types::{CommentId, PostId};

use crate::dto::request::{CreateCommentBody, UpdateCommentBody};
use crate::dto::response::{ApiResponse, CommentResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, MaybeAuthUser, ValidatedJson, parse_id};
use crate::state::AppState;

/// GET /api/posts/{id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    Path(post_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<CommentResponse>>>, ApiError> {
    let post_id: PostId = parse_id(&post_id)?;
    let comments = state.comment_service.list_for_post(post_id).await?;
    Ok(Json(ApiResponse::ok(
        comments
            .into_iter()
            .map(|c| CommentResponse::for_viewer(c, viewer.user()))
            .collect(),
    )))
}

/// POST /api/posts/{id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<String>,
    ValidatedJson(req): ValidatedJson<CreateCommentBody>,
) -> Result<(StatusCode, Json<ApiResponse<CommentResponse>>), ApiError> {
    let post_id: PostId = parse_id(&post_id)?;
    let comment = state
        .comment_service
        .create_comment(&auth, post_id, req.into())
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(CommentResponse::for_viewer(
            comment,
            Some(&auth.0),
        ))),
    ))
}

/// PUT /api/comments/{id}
pub async fn update_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateCommentBody>,
) -> Result<Json<ApiResponse<CommentResponse>>, ApiError> {
    let id: CommentId = parse_id(&id)?;
    let comment = state
        .comment_service
        .update_comment(&auth, id, req.into())
        .await?;
    Ok(Json(ApiResponse::ok(CommentResponse::for_viewer(
        comment,
        Some(&auth.0),
    ))))
}

/// DELETE /api/comments/{id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let id: CommentId = parse_id(&id)?;
    state.comment_service.delete_comment(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: format!("Comment {id} deleted"),
    })))
}
