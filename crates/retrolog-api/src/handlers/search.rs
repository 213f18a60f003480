//! Search handler.

use axum::Json;
use axum::extract::{Query, State};

use retrolog_core::error::AppError;

use crate::dto::request::SearchParams;
use crate::dto::response::{ApiResponse, PostResponse};
use crate::error::ApiError;
use crate::extractors::MaybeAuthUser;
use crate::state::AppState;

/// GET /api/search?q=
///
/// Case-sensitive substring match over titles and bodies, newest first.
pub async fn search_posts(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<Vec<PostResponse>>>, ApiError> {
    let query = params
        .q
        .ok_or_else(|| AppError::validation("Query parameter 'q' is required"))?;

    let posts = state.post_service.search(&query).await?;
    Ok(Json(ApiResponse::ok(PostResponse::list(posts, viewer.user()))))
}
