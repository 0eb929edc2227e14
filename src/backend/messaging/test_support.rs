//! Temp-file database for unit tests

use sqlx::SqlitePool;
use tempfile::TempDir;

use crate::backend::server::config::open_database;

/// A migrated SQLite database living in a temporary directory
pub struct TestDb {
    pool: SqlitePool,
    _dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());
        let pool = open_database(&url).await.expect("Failed to open test database");
        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
