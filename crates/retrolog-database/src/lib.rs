//! # retrolog-database
//!
//! SQLite connection management, migrations, and concrete repository
//! implementations for all RetroLog entities.

pub mod connection;
pub mod migration;
pub mod repositories;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use connection::DatabasePool;
