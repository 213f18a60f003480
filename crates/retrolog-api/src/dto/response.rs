//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use retrolog_auth::jwt::IssuedToken;
use retrolog_auth::ownership::can_mutate;
use retrolog_core::types::{CommentId, PostId, UserId};
use retrolog_entity::comment::Comment;
use retrolog_entity::post::{Post, TagList};
use retrolog_entity::user::User;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Public view of a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: UserId,
    /// Username.
    pub username: String,
    /// Signup time.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            created_at: user.created_at,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Access token.
    pub access_token: String,
    /// Always `bearer`.
    pub token_type: String,
    /// Access token expiration.
    pub expires_at: DateTime<Utc>,
    /// The logged-in user.
    pub user: UserResponse,
}

impl LoginResponse {
    /// Builds the response for a freshly issued token.
    pub fn new(token: IssuedToken, user: User) -> Self {
        Self {
            access_token: token.token,
            token_type: "bearer".to_string(),
            expires_at: token.expires_at,
            user: user.into(),
        }
    }
}

/// A post as seen by a particular viewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    /// Post ID.
    pub id: PostId,
    /// Title.
    pub title: String,
    /// Body.
    pub content: String,
    /// Author's username.
    pub author: String,
    /// Author's ID.
    pub owner_id: UserId,
    /// Tags, in order.
    pub tags: TagList,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Whether the viewer may edit or delete this post.
    pub editable: bool,
}

impl PostResponse {
    /// Renders `post` for `viewer`.
    pub fn for_viewer(post: Post, viewer: Option<&User>) -> Self {
        let editable = viewer.is_some_and(|u| can_mutate(u, &post));
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author: post.author,
            owner_id: post.owner_id,
            tags: post.tags,
            created_at: post.created_at,
            editable,
        }
    }

    /// Renders a list of posts for `viewer`.
    pub fn list(posts: Vec<Post>, viewer: Option<&User>) -> Vec<Self> {
        posts
            .into_iter()
            .map(|p| Self::for_viewer(p, viewer))
            .collect()
    }
}

/// A comment as seen by a particular viewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    /// Comment ID.
    pub id: CommentId,
    /// The post it belongs to.
    pub post_id: PostId,
    /// Body.
    pub content: String,
    /// Author's username.
    pub author: String,
    /// Author's ID.
    pub owner_id: UserId,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Whether the viewer may edit or delete this comment.
    pub editable: bool,
}

impl CommentResponse {
    /// Renders `comment` for `viewer`.
    pub fn for_viewer(comment: Comment, viewer: Option<&User>) -> Self {
        let editable = viewer.is_some_and(|u| can_mutate(u, &comment));
        Self {
            id: comment.id,
            post_id: comment.post_id,
            content: comment.content,
            author: comment.author,
            owner_id: comment.owner_id,
            created_at: comment.created_at,
            editable,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// `connected` or `unavailable`.
    pub database: String,
}
