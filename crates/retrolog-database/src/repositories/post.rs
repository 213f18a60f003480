//! Post repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use retrolog_core::error::{AppError, ErrorKind};
use retrolog_core::result::AppResult;
use retrolog_core::types::PostId;
use retrolog_entity::post::{NewPost, Post, PostPatch};

/// Post columns joined with the owner's username.
macro_rules! select_post {
    () => {
        "SELECT p.id, p.title, p.content, p.tags, p.owner_id, u.username AS author, p.created_at \
         FROM posts p JOIN users u ON u.id = p.owner_id"
    };
}

/// Newest first; ids break ties between posts created in the same instant.
macro_rules! newest_first {
    () => {
        " ORDER BY p.created_at DESC, p.id DESC"
    };
}

/// Repository for post CRUD and query operations.
#[derive(Debug, Clone)]
pub struct PostRepository {
    pool: SqlitePool,
}

impl PostRepository {
    /// Create a new post repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a post by primary key.
    pub async fn find_by_id(&self, id: PostId) -> AppResult<Option<Post>> {
        sqlx::query_as::<_, Post>(concat!(select_post!(), " WHERE p.id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find post", e))
    }

    /// List every post, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Post>> {
        sqlx::query_as::<_, Post>(concat!(select_post!(), newest_first!()))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list posts", e))
    }

    /// List the posts written by `username`, newest first.
    pub async fn find_by_author(&self, username: &str) -> AppResult<Vec<Post>> {
        sqlx::query_as::<_, Post>(concat!(
            select_post!(),
            " WHERE u.username = ?",
            newest_first!()
        ))
        .bind(username)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list posts by author", e)
        })
    }

    /// Case-sensitive substring search over title and content, newest first.
    ///
    /// `instr` is used instead of `LIKE` so the query is matched literally
    /// (no `%`/`_` wildcards) and case is respected.
    pub async fn search(&self, query: &str) -> AppResult<Vec<Post>> {
        sqlx::query_as::<_, Post>(concat!(
            select_post!(),
            " WHERE instr(p.title, ?) > 0 OR instr(p.content, ?) > 0",
            newest_first!()
        ))
        .bind(query)
        .bind(query)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search posts", e))
    }

    /// Insert a new post and return it with its author resolved.
    pub async fn create(&self, data: &NewPost) -> AppResult<Post> {
        let tags = data.tags.to_storage()?;

        let id: PostId = sqlx::query_scalar(
            "INSERT INTO posts (title, content, tags, owner_id, created_at) \
             VALUES (?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(&data.title)
        .bind(&data.content)
        .bind(tags)
        .bind(data.owner_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::not_found(format!("User {} not found", data.owner_id))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create post", e),
        })?;

        debug!(post_id = %id, "Inserted post");

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::internal(format!("Post {id} vanished after insert")))
    }

    /// Apply a partial update. Returns `None` if the post does not exist.
    ///
    /// Absent patch fields bind as NULL and `COALESCE` keeps the stored
    /// value; every column is NOT NULL so an empty string still replaces.
    pub async fn update(&self, id: PostId, patch: &PostPatch) -> AppResult<Option<Post>> {
        let tags = patch.tags.as_ref().map(|t| t.to_storage()).transpose()?;

        let result = sqlx::query(
            "UPDATE posts SET title = COALESCE(?, title), \
                              content = COALESCE(?, content), \
                              tags = COALESCE(?, tags) \
             WHERE id = ?",
        )
        .bind(&patch.title)
        .bind(&patch.content)
        .bind(tags)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update post", e))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find_by_id(id).await
    }

    /// Delete a post together with all of its comments.
    ///
    /// Both deletes run in one transaction: either the post and every
    /// comment go, or nothing does. Returns `false` if the post was absent.
    pub async fn delete(&self, id: PostId) -> AppResult<bool> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to begin delete", e))?;

        let comments = sqlx::query("DELETE FROM comments WHERE post_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete post comments", e)
            })?;

        let posts = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete post", e))?;

        if posts.rows_affected() == 0 {
            tx.rollback().await.map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to roll back delete", e)
            })?;
            return Ok(false);
        }

        tx.commit()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to commit delete", e))?;

        debug!(
            post_id = %id,
            comments_removed = comments.rows_affected(),
            "Deleted post"
        );
        Ok(true)
    }
}
