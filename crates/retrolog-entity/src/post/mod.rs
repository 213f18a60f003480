//! Blog post domain entities.

pub mod model;
pub mod tags;

pub use model::{NewPost, Post, PostPatch};
pub use tags::TagList;
