//! Database operations for books
//!
//! This module contains the book queries and the user-book association
//! queries.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::shared::books::{Book, BookFilter};

/// Fields of a new book
#[derive(Debug, Clone)]
pub struct NewBook<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub published_date: DateTime<Utc>,
    pub image: Option<&'a str>,
}

/// List books, filtered by title/author substrings, ordered by id
pub async fn list_books(
    pool: &SqlitePool,
    filter: &BookFilter,
) -> Result<Vec<Book>, sqlx::Error> {
    sqlx::query_as::<_, Book>(
        r#"
        SELECT id, title, author, published_date, image
        FROM books
        WHERE (? IS NULL OR instr(title, ?) > 0)
          AND (? IS NULL OR instr(author, ?) > 0)
        ORDER BY id
        LIMIT ? OFFSET ?
        "#
    )
    .bind(filter.title_contains.as_deref())
    .bind(filter.title_contains.as_deref())
    .bind(filter.author_contains.as_deref())
    .bind(filter.author_contains.as_deref())
    .bind(filter.page.limit)
    .bind(filter.page.offset)
    .fetch_all(pool)
    .await
}

/// Get book by ID
pub async fn get_book_by_id(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<Book>, sqlx::Error> {
    sqlx::query_as::<_, Book>(
        "SELECT id, title, author, published_date, image FROM books WHERE id = ?"
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Create a book and link it to its creator in one transaction
pub async fn create_book_for_user(
    pool: &SqlitePool,
    user_id: i64,
    book: &NewBook<'_>,
) -> Result<Book, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let created = sqlx::query_as::<_, Book>(
        r#"
        INSERT INTO books (title, author, published_date, image)
        VALUES (?, ?, ?, ?)
        RETURNING id, title, author, published_date, image
        "#
    )
    .bind(book.title)
    .bind(book.author)
    .bind(book.published_date)
    .bind(book.image)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("INSERT INTO user_books (user_id, book_id) VALUES (?, ?)")
        .bind(user_id)
        .bind(created.id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(created)
}

/// Patch title, author, and/or publication date; `None` keeps the current value
///
/// # Returns
/// Updated book or None if not found
pub async fn update_book(
    pool: &SqlitePool,
    id: i64,
    title: Option<&str>,
    author: Option<&str>,
    published_date: Option<DateTime<Utc>>,
) -> Result<Option<Book>, sqlx::Error> {
    sqlx::query_as::<_, Book>(
        r#"
        UPDATE books
        SET title = COALESCE(?, title),
            author = COALESCE(?, author),
            published_date = COALESCE(?, published_date)
        WHERE id = ?
        RETURNING id, title, author, published_date, image
        "#
    )
    .bind(title)
    .bind(author)
    .bind(published_date)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete a book and its association rows
///
/// # Returns
/// True if a book was deleted
pub async fn delete_book(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM books WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// All books linked to a user, ordered by id
pub async fn get_books_for_user(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<Book>, sqlx::Error> {
    sqlx::query_as::<_, Book>(
        r#"
        SELECT b.id, b.title, b.author, b.published_date, b.image
        FROM books b
        JOIN user_books ub ON ub.book_id = b.id
        WHERE ub.user_id = ?
        ORDER BY b.id
        "#
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Count all books
pub async fn count_books(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM books")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
