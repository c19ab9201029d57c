//! Database test fixtures and utilities
//!
//! Every fixture gets its own migrated in-memory SQLite database, so tests
//! are isolated without cleanup.

use sqlx::SqlitePool;

use bookshelf::backend::server::config::load_database;

/// Create a migrated in-memory database
pub async fn create_test_pool() -> SqlitePool {
    load_database("sqlite::memory:")
        .await
        .expect("Failed to create test database")
}

/// Test database fixture
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    /// Create a new test database fixture
    pub async fn new() -> Self {
        Self {
            pool: create_test_pool().await,
        }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Number of favorite quotes reachable through a user's links
    pub async fn favorite_count(&self, user_id: i64) -> i64 {
        bookshelf::backend::quotes::db::count_favorites_for_user(&self.pool, user_id)
            .await
            .expect("Failed to count favorites")
    }
}
