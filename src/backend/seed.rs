//! Startup Seeding
//!
//! Inserts demo users, books, quotes, and their associations when
//! `SEED_DATABASE` is enabled. Each table is filled only if it is empty,
//! so seeding is safe to run on every start.

use bcrypt::hash;
use chrono::Utc;
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::backend::error::BackendError;

const USERS: &[(&str, &str)] = &[("Taniks", "cayde6"), ("Zavala", "towers")];

const BOOKS: &[(&str, &str)] = &[
    ("Fall", "Oryx"),
    ("Curse", "Osiris"),
    ("Felwinter", "Peak"),
    ("Saint", "Osiris"),
];

const QUOTES: &[(&str, &str)] = &[("big team battle", "Oryx"), ("killimanjaro", "Osiris")];

/// (username, book title)
const USER_BOOKS: &[(&str, &str)] = &[
    ("Taniks", "Fall"),
    ("Taniks", "Curse"),
    ("Zavala", "Felwinter"),
    ("Zavala", "Saint"),
];

/// (username, quote description)
const USER_QUOTES: &[(&str, &str)] = &[("Taniks", "big team battle"), ("Taniks", "killimanjaro")];

/// Seed every empty table
pub async fn seed_database(pool: &SqlitePool, bcrypt_cost: u32) -> Result<(), BackendError> {
    tracing::info!("Seeding database...");
    let mut tx = pool.begin().await?;

    if is_empty(&mut tx, "users").await? {
        for (username, password) in USERS {
            let password_hash = hash(*password, bcrypt_cost)?;
            sqlx::query("INSERT INTO users (username, password_hash) VALUES (?, ?)")
                .bind(*username)
                .bind(password_hash)
                .execute(&mut *tx)
                .await?;
        }
        tracing::info!("Seeded {} users", USERS.len());
    }

    if is_empty(&mut tx, "books").await? {
        let now = Utc::now();
        for (title, author) in BOOKS {
            sqlx::query("INSERT INTO books (title, author, published_date) VALUES (?, ?, ?)")
                .bind(*title)
                .bind(*author)
                .bind(now)
                .execute(&mut *tx)
                .await?;
        }
        tracing::info!("Seeded {} books", BOOKS.len());
    }

    if is_empty(&mut tx, "quotes").await? {
        for (description, author) in QUOTES {
            sqlx::query("INSERT INTO quotes (description, author) VALUES (?, ?)")
                .bind(*description)
                .bind(*author)
                .execute(&mut *tx)
                .await?;
        }
        tracing::info!("Seeded {} quotes", QUOTES.len());
    }

    if is_empty(&mut tx, "user_books").await? {
        for (username, title) in USER_BOOKS {
            sqlx::query(
                r#"
                INSERT INTO user_books (user_id, book_id)
                SELECT u.id, b.id FROM users u, books b
                WHERE u.username = ? AND b.title = ?
                "#
            )
            .bind(*username)
            .bind(*title)
            .execute(&mut *tx)
            .await?;
        }
    }

    if is_empty(&mut tx, "user_quotes").await? {
        for (username, description) in USER_QUOTES {
            sqlx::query(
                r#"
                INSERT INTO user_quotes (user_id, quote_id)
                SELECT u.id, q.id FROM users u, quotes q
                WHERE u.username = ? AND q.description = ?
                "#
            )
            .bind(*username)
            .bind(*description)
            .execute(&mut *tx)
            .await?;
        }
    }

    tx.commit().await?;
    tracing::info!("Database seeding completed");
    Ok(())
}

async fn is_empty(tx: &mut Transaction<'_, Sqlite>, table: &'static str) -> Result<bool, sqlx::Error> {
    let sql = format!("SELECT COUNT(*) FROM {}", table);
    let (count,): (i64,) = sqlx::query_as(&sql)
        .fetch_one(&mut **tx)
        .await?;
    Ok(count == 0)
}
