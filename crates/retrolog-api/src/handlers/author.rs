//! Per-author post listing.

use axum::Json;
use axum::extract::{Path, State};

use crate::dto::response::{ApiResponse, PostResponse};
use crate::error::ApiError;
use crate::extractors::MaybeAuthUser;
use crate::state::AppState;

/// GET /api/authors/{username}/posts
pub async fn author_posts(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse<Vec<PostResponse>>>, ApiError> {
    let posts = state.post_service.list_by_author(&username).await?;
    Ok(Json(ApiResponse::ok(PostResponse::list(posts, viewer.user()))))
}
