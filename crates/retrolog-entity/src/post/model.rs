//! Post entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use retrolog_core::types::{PostId, UserId};

use super::tags::TagList;

/// A blog post, joined with its owner's username.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    /// Unique post identifier.
    pub id: PostId,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Tags in the order the author gave them.
    #[sqlx(try_from = "String")]
    pub tags: TagList,
    /// The owning user.
    pub owner_id: UserId,
    /// Username of the owner.
    pub author: String,
    /// Server time at creation; never changes.
    pub created_at: DateTime<Utc>,
}

/// Data required to insert a new post.
#[derive(Debug, Clone)]
pub struct NewPost {
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// The owning user.
    pub owner_id: UserId,
    /// Tags.
    pub tags: TagList,
}

/// Partial update for a post.
///
/// `None` leaves a field untouched; `Some` replaces it, including with an
/// empty string or an empty tag list.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement body.
    pub content: Option<String>,
    /// Replacement tag list.
    pub tags: Option<TagList>,
}

impl PostPatch {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.tags.is_none()
    }
}
