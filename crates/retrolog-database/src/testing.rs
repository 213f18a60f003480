//! Throwaway databases for tests.

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use tempfile::TempDir;

use retrolog_core::config::DatabaseConfig;

use crate::connection::DatabasePool;
use crate::migration::run_migrations;

/// A migrated SQLite database in a temporary directory.
///
/// The directory (and the database file) is removed when this value drops.
pub struct TestDatabase {
    _dir: TempDir,
    pool: SqlitePool,
}

impl TestDatabase {
    /// Create and migrate a fresh database.
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("retrolog-test.db");
        let config = DatabaseConfig {
            url: format!("sqlite://{}", path.display()),
            ..DatabaseConfig::default()
        };
        let options = SqliteConnectOptions::new().filename(&path);

        let db = DatabasePool::connect_with(options, &config)
            .await
            .expect("open test database");
        run_migrations(db.pool()).await.expect("migrate test database");

        Self {
            _dir: dir,
            pool: db.into_pool(),
        }
    }

    /// The pool for this database.
    pub fn pool(&self) -> SqlitePool {
        self.pool.clone()
    }
}
