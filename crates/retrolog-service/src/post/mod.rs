//! Post use cases.

pub mod service;

pub use service::{CreatePostRequest, PostService, UpdatePostRequest};
