//! Owner-only mutation of posts and comments.
//!
//! Only the author of a post or comment may edit or delete it. Comment
//! ownership is independent of post ownership: a post's author gets no
//! rights over other people's comments on that post.

use tracing::warn;

use retrolog_core::error::AppError;
use retrolog_core::types::UserId;
use retrolog_entity::comment::Comment;
use retrolog_entity::post::Post;
use retrolog_entity::user::User;

/// Something with a single owning user.
pub trait Owned {
    /// The owning user's id.
    fn owner_id(&self) -> UserId;

    /// Short noun for log and error messages.
    fn kind(&self) -> &'static str;
}

impl Owned for Post {
    fn owner_id(&self) -> UserId {
        self.owner_id
    }

    fn kind(&self) -> &'static str {
        "post"
    }
}

impl Owned for Comment {
    fn owner_id(&self) -> UserId {
        self.owner_id
    }

    fn kind(&self) -> &'static str {
        "comment"
    }
}

/// Whether `actor` may edit or delete `resource`.
pub fn can_mutate<R: Owned + ?Sized>(actor: &User, resource: &R) -> bool {
    actor.id == resource.owner_id()
}

/// Like [`can_mutate`], but as a `Forbidden` error.
pub fn ensure_can_mutate<R: Owned + ?Sized>(actor: &User, resource: &R) -> Result<(), AppError> {
    if can_mutate(actor, resource) {
        return Ok(());
    }
    warn!(
        actor = %actor.id,
        owner = %resource.owner_id(),
        kind = resource.kind(),
        "Ownership check failed"
    );
    Err(AppError::forbidden(format!(
        "Only the author may modify this {}",
        resource.kind()
    )))
}
