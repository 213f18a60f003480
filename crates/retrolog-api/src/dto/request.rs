//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use retrolog_entity::post::TagList;
use retrolog_service::{
    CreateCommentRequest, CreatePostRequest, UpdateCommentRequest, UpdatePostRequest,
};

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Desired username.
    #[validate(length(min = 3, max = 50, message = "Username must be 3 to 50 characters"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create post request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostBody {
    /// Title.
    #[validate(length(min = 1, max = 200, message = "Title must be 1 to 200 characters"))]
    pub title: String,
    /// Body.
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    /// Tags, in order.
    #[serde(default)]
    pub tags: TagList,
}

impl From<CreatePostBody> for CreatePostRequest {
    fn from(body: CreatePostBody) -> Self {
        Self {
            title: body.title,
            content: body.content,
            tags: body.tags,
        }
    }
}

/// Update post request. Omitted fields are left alone; empty strings are
/// stored. The title length is checked by the service after the ownership
/// check.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePostBody {
    /// New title.
    pub title: Option<String>,
    /// New body.
    pub content: Option<String>,
    /// New tags.
    pub tags: Option<TagList>,
}

impl From<UpdatePostBody> for UpdatePostRequest {
    fn from(body: UpdatePostBody) -> Self {
        Self {
            title: body.title,
            content: body.content,
            tags: body.tags,
        }
    }
}

/// Create comment request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCommentBody {
    /// Body.
    #[validate(length(min = 1, message = "Comment cannot be empty"))]
    pub content: String,
}

impl From<CreateCommentBody> for CreateCommentRequest {
    fn from(body: CreateCommentBody) -> Self {
        Self {
            content: body.content,
        }
    }
}

/// Update comment request. An empty body is stored as given.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCommentBody {
    /// New body.
    pub content: Option<String>,
}

impl From<UpdateCommentBody> for UpdateCommentRequest {
    fn from(body: UpdateCommentBody) -> Self {
        Self {
            content: body.content,
        }
    }
}

/// Search query parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    /// Text to look for. Required, may be empty.
    pub q: Option<String>,
}
