//! Database operations for quotes
//!
//! This module contains the quote queries, the user-quote association
//! queries, and the guarded favorite update used by the favorite toggle.

use sqlx::{Executor, Sqlite, SqlitePool};

use crate::shared::quotes::{Quote, QuoteFilter};

/// List quotes, filtered by description/author substrings, ordered by id
pub async fn list_quotes(
    pool: &SqlitePool,
    filter: &QuoteFilter,
) -> Result<Vec<Quote>, sqlx::Error> {
    sqlx::query_as::<_, Quote>(
        r#"
        SELECT id, description, author, is_favorite
        FROM quotes
        WHERE (? IS NULL OR instr(description, ?) > 0)
          AND (? IS NULL OR instr(author, ?) > 0)
        ORDER BY id
        LIMIT ? OFFSET ?
        "#
    )
    .bind(filter.description_contains.as_deref())
    .bind(filter.description_contains.as_deref())
    .bind(filter.author_contains.as_deref())
    .bind(filter.author_contains.as_deref())
    .bind(filter.page.limit)
    .bind(filter.page.offset)
    .fetch_all(pool)
    .await
}

/// Get quote by ID
pub async fn get_quote_by_id(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<Quote>, sqlx::Error> {
    sqlx::query_as::<_, Quote>(
        "SELECT id, description, author, is_favorite FROM quotes WHERE id = ?"
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Create a quote and link it to its creator in one transaction
pub async fn create_quote_for_user(
    pool: &SqlitePool,
    user_id: i64,
    description: &str,
    author: &str,
) -> Result<Quote, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let quote = sqlx::query_as::<_, Quote>(
        r#"
        INSERT INTO quotes (description, author, is_favorite)
        VALUES (?, ?, 0)
        RETURNING id, description, author, is_favorite
        "#
    )
    .bind(description)
    .bind(author)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("INSERT INTO user_quotes (user_id, quote_id) VALUES (?, ?)")
        .bind(user_id)
        .bind(quote.id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(quote)
}

/// Link an existing quote to a user
///
/// Fails with a unique violation if the pair is already linked.
pub async fn link_quote(
    pool: &SqlitePool,
    user_id: i64,
    quote_id: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO user_quotes (user_id, quote_id) VALUES (?, ?)")
        .bind(user_id)
        .bind(quote_id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Patch description and/or author; `None` keeps the current value
///
/// # Returns
/// Updated quote or None if not found
pub async fn update_quote<'e, E>(
    executor: E,
    id: i64,
    description: Option<&str>,
    author: Option<&str>,
) -> Result<Option<Quote>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Quote>(
        r#"
        UPDATE quotes
        SET description = COALESCE(?, description),
            author = COALESCE(?, author)
        WHERE id = ?
        RETURNING id, description, author, is_favorite
        "#
    )
    .bind(description)
    .bind(author)
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Delete a quote and its association rows
///
/// # Returns
/// True if a quote was deleted
pub async fn delete_quote(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM quotes WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// All quotes linked to a user, ordered by id
pub async fn get_quotes_for_user(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<Quote>, sqlx::Error> {
    sqlx::query_as::<_, Quote>(
        r#"
        SELECT q.id, q.description, q.author, q.is_favorite
        FROM quotes q
        JOIN user_quotes uq ON uq.quote_id = q.id
        WHERE uq.user_id = ?
        ORDER BY q.id
        "#
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Favorite quotes linked to a user, ordered by id, at most `limit` rows
pub async fn get_favorite_quotes_for_user(
    pool: &SqlitePool,
    user_id: i64,
    limit: i64,
) -> Result<Vec<Quote>, sqlx::Error> {
    sqlx::query_as::<_, Quote>(
        r#"
        SELECT q.id, q.description, q.author, q.is_favorite
        FROM quotes q
        JOIN user_quotes uq ON uq.quote_id = q.id
        WHERE uq.user_id = ? AND q.is_favorite = 1
        ORDER BY q.id
        LIMIT ?
        "#
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// The quote behind a user's association, if the user is linked to it
pub async fn get_user_quote<'e, E>(
    executor: E,
    user_id: i64,
    quote_id: i64,
) -> Result<Option<Quote>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Quote>(
        r#"
        SELECT q.id, q.description, q.author, q.is_favorite
        FROM quotes q
        JOIN user_quotes uq ON uq.quote_id = q.id
        WHERE uq.user_id = ? AND q.id = ?
        "#
    )
    .bind(user_id)
    .bind(quote_id)
    .fetch_optional(executor)
    .await
}

/// Number of favorite quotes reachable through a user's associations
pub async fn count_favorites_for_user<'e, E>(
    executor: E,
    user_id: i64,
) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let (count,): (i64,) = sqlx::query_as(
        r#"
        SELECT COUNT(*)
        FROM user_quotes uq
        JOIN quotes q ON q.id = uq.quote_id
        WHERE uq.user_id = ? AND q.is_favorite = 1
        "#
    )
    .bind(user_id)
    .fetch_one(executor)
    .await?;

    Ok(count)
}

/// Set the favorite flag unconditionally
///
/// # Returns
/// True if the quote exists
pub async fn set_quote_favorite<'e, E>(
    executor: E,
    quote_id: i64,
    is_favorite: bool,
) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("UPDATE quotes SET is_favorite = ? WHERE id = ?")
        .bind(is_favorite)
        .bind(quote_id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Flip a linked quote to favorite only while the user is under `limit`
///
/// The count and the write happen in one statement, so two concurrent
/// calls for the same user cannot both pass the check.
///
/// # Returns
/// True if the flag was flipped by this call
pub async fn favorite_quote_within_limit<'e, E>(
    executor: E,
    user_id: i64,
    quote_id: i64,
    limit: i64,
) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        r#"
        UPDATE quotes
        SET is_favorite = 1
        WHERE id = ?
          AND is_favorite = 0
          AND EXISTS (
              SELECT 1 FROM user_quotes
              WHERE user_id = ? AND quote_id = ?
          )
          AND (
              SELECT COUNT(*)
              FROM user_quotes uq
              JOIN quotes fq ON fq.id = uq.quote_id
              WHERE uq.user_id = ? AND fq.is_favorite = 1
          ) < ?
        "#
    )
    .bind(quote_id)
    .bind(user_id)
    .bind(quote_id)
    .bind(user_id)
    .bind(limit)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Count all quotes
pub async fn count_quotes(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM quotes")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
