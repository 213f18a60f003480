//! Comment repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;

use retrolog_core::error::{AppError, ErrorKind};
use retrolog_core::result::AppResult;
use retrolog_core::types::{CommentId, PostId};
use retrolog_entity::comment::{Comment, CommentPatch, NewComment};

/// Comment columns joined with the owner's username.
macro_rules! select_comment {
    () => {
        "SELECT c.id, c.post_id, c.owner_id, u.username AS author, c.content, c.created_at \
         FROM comments c JOIN users u ON u.id = c.owner_id"
    };
}

/// Repository for comment CRUD, always scoped to a post when listing.
#[derive(Debug, Clone)]
pub struct CommentRepository {
    pool: SqlitePool,
}

impl CommentRepository {
    /// Create a new comment repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a comment by primary key.
    pub async fn find_by_id(&self, id: CommentId) -> AppResult<Option<Comment>> {
        sqlx::query_as::<_, Comment>(concat!(select_comment!(), " WHERE c.id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find comment", e))
    }

    /// List the comments on a post, oldest first.
    pub async fn find_by_post(&self, post_id: PostId) -> AppResult<Vec<Comment>> {
        sqlx::query_as::<_, Comment>(concat!(
            select_comment!(),
            " WHERE c.post_id = ? ORDER BY c.created_at ASC, c.id ASC"
        ))
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list comments", e))
    }

    /// Insert a comment. The post and owner must exist.
    pub async fn create(&self, data: &NewComment) -> AppResult<Comment> {
        let id: CommentId = sqlx::query_scalar(
            "INSERT INTO comments (post_id, owner_id, content, created_at) \
             VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(data.post_id)
        .bind(data.owner_id)
        .bind(&data.content)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::not_found(format!(
                    "Post {} or user {} not found",
                    data.post_id, data.owner_id
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create comment", e),
        })?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::internal(format!("Comment {id} vanished after insert")))
    }

    /// Apply a partial update. Returns `None` if the comment does not exist.
    pub async fn update(&self, id: CommentId, patch: &CommentPatch) -> AppResult<Option<Comment>> {
        let result = sqlx::query("UPDATE comments SET content = COALESCE(?, content) WHERE id = ?")
            .bind(&patch.content)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update comment", e)
            })?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find_by_id(id).await
    }

    /// Delete a comment. Returns `false` if it was absent.
    pub async fn delete(&self, id: CommentId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete comment", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// Count the comments on a post.
    pub async fn count_for_post(&self, post_id: PostId) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE post_id = ?")
            .bind(post_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count comments", e)
            })?;
        Ok(count as u64)
    }
}
