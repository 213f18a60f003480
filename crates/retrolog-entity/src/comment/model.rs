//! Comment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use retrolog_core::types::{CommentId, PostId, UserId};

/// A comment on a post, joined with its author's username.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    /// Unique comment identifier.
    pub id: CommentId,
    /// The post this comment belongs to.
    pub post_id: PostId,
    /// The user who wrote the comment.
    pub owner_id: UserId,
    /// Username of the owner.
    pub author: String,
    /// Comment body.
    pub content: String,
    /// When the comment was written.
    pub created_at: DateTime<Utc>,
}

/// Data required to insert a comment.
#[derive(Debug, Clone)]
pub struct NewComment {
    /// Parent post.
    pub post_id: PostId,
    /// Writing user.
    pub owner_id: UserId,
    /// Comment body.
    pub content: String,
}

/// Partial update for a comment. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct CommentPatch {
    /// Replacement body.
    pub content: Option<String>,
}

impl CommentPatch {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }
}
