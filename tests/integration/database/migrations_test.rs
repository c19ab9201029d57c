//! Database migration tests
//!
//! Tests to ensure migrations run correctly and the schema enforces the
//! uniqueness and cascade rules.

use crate::common::database::create_test_pool;

#[tokio::test]
async fn test_tables_exist() {
    let pool = create_test_pool().await;

    for table in ["users", "books", "quotes", "user_books", "user_quotes"] {
        let sql = format!("SELECT 1 FROM {} LIMIT 1", table);
        let result = sqlx::query(&sql).execute(&pool).await;
        assert!(result.is_ok(), "{} table should exist", table);
    }
}

#[tokio::test]
async fn test_quote_defaults_to_not_favorite() {
    let pool = create_test_pool().await;

    let (is_favorite,): (bool,) = sqlx::query_as(
        "INSERT INTO quotes (description, author) VALUES ('x', 'y') RETURNING is_favorite",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    assert!(!is_favorite);
}

#[tokio::test]
async fn test_association_pairs_are_unique() {
    let pool = create_test_pool().await;
    sqlx::query("INSERT INTO users (username, password_hash) VALUES ('Taniks', 'h')")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO quotes (description, author) VALUES ('x', 'y')")
        .execute(&pool)
        .await
        .unwrap();

    let link = "INSERT INTO user_quotes (user_id, quote_id) VALUES (1, 1)";
    sqlx::query(link).execute(&pool).await.unwrap();
    assert!(sqlx::query(link).execute(&pool).await.is_err());
}

#[tokio::test]
async fn test_usernames_are_unique() {
    let pool = create_test_pool().await;
    let insert = "INSERT INTO users (username, password_hash) VALUES ('Taniks', 'h')";
    sqlx::query(insert).execute(&pool).await.unwrap();
    assert!(sqlx::query(insert).execute(&pool).await.is_err());
}

#[tokio::test]
async fn test_deleting_quote_cascades_to_links() {
    let pool = create_test_pool().await;
    sqlx::query("INSERT INTO users (username, password_hash) VALUES ('Taniks', 'h')")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO quotes (description, author) VALUES ('x', 'y')")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO user_quotes (user_id, quote_id) VALUES (1, 1)")
        .execute(&pool)
        .await
        .unwrap();

    sqlx::query("DELETE FROM quotes WHERE id = 1")
        .execute(&pool)
        .await
        .unwrap();

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM user_quotes")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}
