//! Fixtures shared by the backend unit tests.

use sqlx::SqlitePool;

use crate::backend::auth::users::create_user;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::ServerConfig;

pub const TEST_SECRET: &str = "test-secret-test-secret-test-secret-test-secret-test-secret!!";

/// Configuration with an in-memory database and the cheapest bcrypt cost
pub fn test_config() -> ServerConfig {
    ServerConfig::builder()
        .database_url("sqlite::memory:")
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .build()
        .unwrap()
}

/// Fresh state backed by its own migrated in-memory database
pub async fn test_state() -> AppState {
    let config = test_config();
    let pool = load_database(&config.database_url).await.unwrap();
    AppState::new(pool, config)
}

/// Insert a user without hashing, for tests that never log in
pub async fn insert_user(pool: &SqlitePool, username: &str) -> i64 {
    create_user(pool, username, "not-a-real-hash").await.unwrap().id
}
