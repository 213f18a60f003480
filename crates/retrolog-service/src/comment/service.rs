//! Comments scoped to a post, with owner-only edit and delete.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use retrolog_auth::ownership::ensure_can_mutate;
use retrolog_core::error::AppError;
use retrolog_core::types::{CommentId, PostId};
use retrolog_database::repositories::{CommentRepository, PostRepository};
use retrolog_entity::comment::{Comment, CommentPatch, NewComment};
use retrolog_entity::user::User;

/// Manages comments.
#[derive(Debug, Clone)]
pub struct CommentService {
    /// Comment repository.
    comment_repo: Arc<CommentRepository>,
    /// Post repository, for existence checks.
    post_repo: Arc<PostRepository>,
}

/// Request to comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    /// Comment body.
    pub content: String,
}

/// Request to edit a comment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCommentRequest {
    /// New body.
    #[serde(default)]
    pub content: Option<String>,
}

impl CommentService {
    /// Creates a new comment service.
    pub fn new(comment_repo: Arc<CommentRepository>, post_repo: Arc<PostRepository>) -> Self {
        Self {
            comment_repo,
            post_repo,
        }
    }

    /// Lists a post's comments, oldest first.
    pub async fn list_for_post(&self, post_id: PostId) -> Result<Vec<Comment>, AppError> {
        self.require_post(post_id).await?;
        self.comment_repo.find_by_post(post_id).await
    }

    /// Gets a comment by id.
    pub async fn get_comment(&self, id: CommentId) -> Result<Comment, AppError> {
        self.comment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Comment {id} not found")))
    }

    /// Adds a comment by `actor` to a post.
    pub async fn create_comment(
        &self,
        actor: &User,
        post_id: PostId,
        req: CreateCommentRequest,
    ) -> Result<Comment, AppError> {
        validate_content(&req.content)?;
        self.require_post(post_id).await?;

        let comment = self
            .comment_repo
            .create(&NewComment {
                post_id,
                owner_id: actor.id,
                content: req.content,
            })
            .await?;

        info!(comment_id = %comment.id, post_id = %post_id, user_id = %actor.id, "Comment created");
        Ok(comment)
    }

    /// Edits a comment. Only its author may do this. An empty body is stored
    /// as given.
    pub async fn update_comment(
        &self,
        actor: &User,
        id: CommentId,
        req: UpdateCommentRequest,
    ) -> Result<Comment, AppError> {
        let existing = self.get_comment(id).await?;
        ensure_can_mutate(actor, &existing)?;

        let Some(content) = req.content else {
            return Ok(existing);
        };

        let updated = self
            .comment_repo
            .update(
                id,
                &CommentPatch {
                    content: Some(content),
                },
            )
            .await?
            .ok_or_else(|| AppError::not_found(format!("Comment {id} not found")))?;

        info!(comment_id = %id, user_id = %actor.id, "Comment updated");
        Ok(updated)
    }

    /// Deletes a comment. Only its author may do this.
    pub async fn delete_comment(&self, actor: &User, id: CommentId) -> Result<(), AppError> {
        let existing = self.get_comment(id).await?;
        ensure_can_mutate(actor, &existing)?;

        if !self.comment_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Comment {id} not found")));
        }

        info!(comment_id = %id, user_id = %actor.id, "Comment deleted");
        Ok(())
    }

    /// Number of comments on a post.
    pub async fn count_for_post(&self, post_id: PostId) -> Result<u64, AppError> {
        self.comment_repo.count_for_post(post_id).await
    }

    async fn require_post(&self, post_id: PostId) -> Result<(), AppError> {
        match self.post_repo.find_by_id(post_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::not_found(format!("Post {post_id} not found"))),
        }
    }
}

fn validate_content(content: &str) -> Result<(), AppError> {
    if content.trim().is_empty() {
        return Err(AppError::validation("Comment cannot be empty"));
    }
    Ok(())
}
