//! # retrolog-service
//!
//! Use-case layer for RetroLog. Each service orchestrates repositories
//! and the auth crate; the HTTP layer and the CLI both call into here.
//!
//! Services take their dependencies at construction via `Arc`. Mutating
//! operations take the acting [`User`](retrolog_entity::user::User),
//! already resolved by the authorization guard.

pub mod account;
pub mod comment;
pub mod post;

#[cfg(test)]
mod test_support;

pub use account::{AccountService, LoginOutcome};
pub use comment::{CommentService, CreateCommentRequest, UpdateCommentRequest};
pub use post::{CreatePostRequest, PostService, UpdatePostRequest};
