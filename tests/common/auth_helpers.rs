//! Authentication test helpers
//!
//! Provides utilities for creating test users and generating tokens.

use sqlx::SqlitePool;

use bookshelf::backend::auth::sessions::create_token;
use bookshelf::backend::auth::users::create_user;
use bookshelf::shared::{ServerConfig, TokenSettings};

pub const TEST_SECRET: &str = "integration-secret-integration-secret-integration-secret!";

/// Configuration used by every integration test
pub fn test_config() -> ServerConfig {
    ServerConfig::builder()
        .database_url("sqlite::memory:")
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .build()
        .expect("Failed to build test configuration")
}

/// Token settings matching [`test_config`]
pub fn test_token_settings() -> TokenSettings {
    test_config().token
}

/// Test user credentials
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub token: String,
}

/// Create a test user in the database
pub async fn create_test_user(pool: &SqlitePool, username: &str, password: &str) -> TestUser {
    let password_hash = bcrypt::hash(password, 4).expect("Failed to hash password");
    let user = create_user(pool, username, &password_hash)
        .await
        .expect("Failed to create test user");
    let token = create_token(&test_token_settings(), user.id, &user.username)
        .expect("Failed to create test token");

    TestUser {
        id: user.id,
        username: user.username,
        password: password.to_string(),
        token,
    }
}
