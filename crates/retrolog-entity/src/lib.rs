//! # retrolog-entity
//!
//! Domain entity models for RetroLog. Every struct in this crate
//! represents a database row or a domain value object. Row types derive
//! `sqlx::FromRow`.

pub mod comment;
pub mod post;
pub mod user;
