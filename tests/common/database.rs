//! Database test fixtures
//!
//! Every fixture owns a private in-memory SQLite database with the
//! migrations applied, so tests never share rows and need no cleanup.

use restaurant_orders::backend::server::config::connect_in_memory;
use sqlx::SqlitePool;

/// Test database fixture
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    /// Create a new test database fixture
    pub async fn new() -> Self {
        let pool = connect_in_memory()
            .await
            .expect("Failed to open in-memory test database");
        Self { pool }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
