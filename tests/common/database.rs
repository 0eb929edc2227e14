//! Database test fixtures
//!
//! Each fixture is a fresh, migrated SQLite file in its own temporary
//! directory, removed when the fixture is dropped.

use sqlx::SqlitePool;
use tempfile::TempDir;

use directmsg::backend::server::config::open_database;

/// Test database fixture
pub struct TestDatabase {
    pool: SqlitePool,
    _dir: TempDir,
}

impl TestDatabase {
    /// Create a new migrated database
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("directmsg.db").display());
        let pool = open_database(&url)
            .await
            .expect("Failed to open test database");
        Self { pool, _dir: dir }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Make every insert into `table` fail
    pub async fn fail_inserts_into(&self, table: &str) {
        let sql = format!(
            "CREATE TRIGGER fail_insert_{table} BEFORE INSERT ON {table} \
             BEGIN SELECT RAISE(ABORT, 'insert disabled by test'); END"
        );
        sqlx::query(&sql)
            .execute(&self.pool)
            .await
            .expect("Failed to install failure trigger");
    }

    /// Count rows of `table`
    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count rows")
    }
}
