//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod author;
pub mod comment;
pub mod health;
pub mod post;
pub mod search;
