//! Post CRUD, search, and author listing with ownership enforcement.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use retrolog_auth::ownership::ensure_can_mutate;
use retrolog_core::error::AppError;
use retrolog_core::types::PostId;
use retrolog_database::repositories::PostRepository;
use retrolog_entity::post::{NewPost, Post, PostPatch, TagList};
use retrolog_entity::user::User;

/// Longest accepted title, in characters.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Manages blog posts.
#[derive(Debug, Clone)]
pub struct PostService {
    /// Post repository.
    post_repo: Arc<PostRepository>,
}

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Tags, in order.
    #[serde(default)]
    pub tags: TagList,
}

/// Request to change some fields of a post. Absent fields stay as they are.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    /// New title.
    #[serde(default)]
    pub title: Option<String>,
    /// New body.
    #[serde(default)]
    pub content: Option<String>,
    /// New tag list. An empty list clears the tags.
    #[serde(default)]
    pub tags: Option<TagList>,
}

impl PostService {
    /// Creates a new post service.
    pub fn new(post_repo: Arc<PostRepository>) -> Self {
        Self { post_repo }
    }

    /// Lists every post, newest first.
    pub async fn list_posts(&self) -> Result<Vec<Post>, AppError> {
        self.post_repo.find_all().await
    }

    /// Gets a post by id.
    pub async fn get_post(&self, id: PostId) -> Result<Post, AppError> {
        self.post_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Post {id} not found")))
    }

    /// Case-sensitive substring search over titles and bodies.
    ///
    /// An empty query matches every post.
    pub async fn search(&self, query: &str) -> Result<Vec<Post>, AppError> {
        self.post_repo.search(query).await
    }

    /// Lists the posts written by `username`. Unknown authors have none.
    pub async fn list_by_author(&self, username: &str) -> Result<Vec<Post>, AppError> {
        self.post_repo.find_by_author(username).await
    }

    /// Creates a post owned by `actor`.
    pub async fn create_post(&self, actor: &User, req: CreatePostRequest) -> Result<Post, AppError> {
        let title = validate_title(&req.title)?;
        validate_content(&req.content)?;

        let post = self
            .post_repo
            .create(&NewPost {
                title,
                content: req.content,
                owner_id: actor.id,
                tags: req.tags,
            })
            .await?;

        info!(post_id = %post.id, user_id = %actor.id, "Post created");
        Ok(post)
    }

    /// Applies a partial update. Only the author may do this.
    ///
    /// Supplied fields are stored even when empty; only the title length is
    /// checked, and only once ownership has been established.
    pub async fn update_post(
        &self,
        actor: &User,
        id: PostId,
        req: UpdatePostRequest,
    ) -> Result<Post, AppError> {
        let existing = self.get_post(id).await?;
        ensure_can_mutate(actor, &existing)?;

        let patch = PostPatch {
            title: req.title.as_deref().map(normalize_title).transpose()?,
            content: req.content,
            tags: req.tags,
        };
        if patch.is_empty() {
            return Ok(existing);
        }

        let updated = self
            .post_repo
            .update(id, &patch)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Post {id} not found")))?;

        info!(post_id = %id, user_id = %actor.id, "Post updated");
        Ok(updated)
    }

    /// Deletes a post and all of its comments. Only the author may do this.
    pub async fn delete_post(&self, actor: &User, id: PostId) -> Result<(), AppError> {
        let existing = self.get_post(id).await?;
        ensure_can_mutate(actor, &existing)?;

        if !self.post_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Post {id} not found")));
        }

        info!(post_id = %id, user_id = %actor.id, "Post deleted");
        Ok(())
    }
}

/// Returns the trimmed title if it is acceptable for a new post.
fn validate_title(title: &str) -> Result<String, AppError> {
    let trimmed = normalize_title(title)?;
    if trimmed.is_empty() {
        return Err(AppError::validation("Title is required"));
    }
    Ok(trimmed)
}

/// Trims a title and enforces the length cap. Empty is allowed.
fn normalize_title(title: &str) -> Result<String, AppError> {
    let trimmed = title.trim();
    if trimmed.chars().count() > MAX_TITLE_LENGTH {
        return Err(AppError::validation(format!(
            "Title must be at most {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(trimmed.to_string())
}

fn validate_content(content: &str) -> Result<(), AppError> {
    if content.trim().is_empty() {
        return Err(AppError::validation("Content is required"));
    }
    Ok(())
}
