//! Post listing and authoring commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use sqlx::SqlitePool;
use tabled::Tabled;
use tracing::info;

use retrolog_core::error::AppError;
use retrolog_database::repositories::{CommentRepository, PostRepository, UserRepository};
use retrolog_entity::post::{Post, TagList};
use retrolog_service::{CommentService, CreatePostRequest, PostService};

use crate::output::{self, OutputFormat};

/// Arguments for post commands
#[derive(Debug, Args)]
pub struct PostArgs {
    /// Post subcommand
    #[command(subcommand)]
    pub command: PostCommand,
}

/// Post subcommands
#[derive(Debug, Subcommand)]
pub enum PostCommand {
    /// List posts, newest first
    List {
        /// Only posts by this author
        #[arg(long, conflicts_with = "search")]
        author: Option<String>,
        /// Only posts whose title or body contains this text (case-sensitive)
        #[arg(long)]
        search: Option<String>,
    },
    /// Publish a post on behalf of an existing user
    Create {
        /// Author username
        #[arg(long)]
        author: String,
        /// Title
        #[arg(long)]
        title: String,
        /// Body
        #[arg(long)]
        content: String,
        /// Comma-separated tags, e.g. "retro, html"
        #[arg(long, default_value = "")]
        tags: String,
    },
}

/// Post display row for table output
#[derive(Debug, Serialize, Tabled)]
struct PostRow {
    /// Post ID
    id: i64,
    /// Title
    title: String,
    /// Author
    author: String,
    /// Tags
    tags: String,
    /// Number of comments
    comments: u64,
    /// Created at
    created_at: String,
}

impl PostRow {
    fn new(p: &Post, comments: u64) -> Self {
        Self {
            id: p.id.get(),
            title: p.title.clone(),
            author: p.author.clone(),
            tags: p.tags.as_slice().join(", "),
            comments,
            created_at: p.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute post commands
pub async fn execute(
    args: &PostArgs,
    pool: &SqlitePool,
    format: OutputFormat,
) -> Result<(), AppError> {
    let post_repo = Arc::new(PostRepository::new(pool.clone()));
    let posts = PostService::new(post_repo.clone());
    let comments = CommentService::new(Arc::new(CommentRepository::new(pool.clone())), post_repo);

    match &args.command {
        PostCommand::List { author, search } => {
            let found = match (author, search) {
                (Some(author), _) => posts.list_by_author(author).await?,
                (None, Some(query)) => posts.search(query).await?,
                (None, None) => posts.list_posts().await?,
            };
            let mut rows = Vec::with_capacity(found.len());
            for post in &found {
                rows.push(PostRow::new(post, comments.count_for_post(post.id).await?));
            }
            output::print_list(&rows, format);
        }
        PostCommand::Create {
            author,
            title,
            content,
            tags,
        } => {
            let actor = UserRepository::new(pool.clone())
                .find_by_username(author)
                .await?
                .ok_or_else(|| AppError::not_found(format!("User '{author}' not found")))?;

            let post = posts
                .create_post(
                    &actor,
                    CreatePostRequest {
                        title: title.clone(),
                        content: content.clone(),
                        tags: TagList::from_comma_separated(tags),
                    },
                )
                .await?;
            info!(post_id = %post.id, author = %post.author, "Post created from CLI");
            output::print_item(&PostRow::new(&post, 0), format);
        }
    }

    Ok(())
}
