/**
 * User Model and Database Operations
 *
 * This module handles user rows and their queries. Password hashes stay
 * inside this module's `User` type and are never serialized.
 */

use sqlx::{Executor, Sqlite, SqlitePool};

use crate::shared::users::{UserFilter, UserSummary};

/// User struct representing a user in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// Username (unique)
    pub username: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
}

impl User {
    /// Public view without the password hash
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            username: self.username.clone(),
        }
    }
}

/// Create a new user
///
/// Fails with a unique violation if the username is taken.
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, password_hash)
        VALUES (?, ?)
        RETURNING id, username, password_hash
        "#
    )
    .bind(username)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by username
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash
        FROM users
        WHERE username = ?
        "#
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
pub async fn get_user_by_id<'e, E>(
    executor: E,
    id: i64,
) -> Result<Option<User>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash
        FROM users
        WHERE id = ?
        "#
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(user)
}

/// List users, optionally filtered by a username substring
pub async fn list_users(
    pool: &SqlitePool,
    filter: &UserFilter,
) -> Result<Vec<User>, sqlx::Error> {
    let users = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash
        FROM users
        WHERE (? IS NULL OR instr(username, ?) > 0)
        ORDER BY id
        LIMIT ? OFFSET ?
        "#
    )
    .bind(filter.username_contains.as_deref())
    .bind(filter.username_contains.as_deref())
    .bind(filter.page.limit)
    .bind(filter.page.offset)
    .fetch_all(pool)
    .await?;

    Ok(users)
}

/// Update username and/or password hash; `None` keeps the current value
///
/// # Returns
/// Updated user or None if not found
pub async fn update_user(
    pool: &SqlitePool,
    id: i64,
    username: Option<&str>,
    password_hash: Option<&str>,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET username = COALESCE(?, username),
            password_hash = COALESCE(?, password_hash)
        WHERE id = ?
        RETURNING id, username, password_hash
        "#
    )
    .bind(username)
    .bind(password_hash)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Delete a user and, through cascading keys, its association rows
///
/// # Returns
/// True if a user was deleted
pub async fn delete_user(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Count all users
pub async fn count_users(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
