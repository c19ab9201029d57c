//! User API integration tests

use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{TestApp, TestUser};

async fn create_quote(app: &TestApp, user: &TestUser, description: &str, favorite: bool) -> i64 {
    let response = app
        .server
        .post("/quotes")
        .authorization_bearer(&user.token)
        .json(&json!({ "description": description, "author": "Oryx" }))
        .await;
    assert_status!(response, StatusCode::CREATED);
    let id = response.json::<Value>()["id"].as_i64().unwrap();
    if favorite {
        let response = app
            .server
            .patch(&format!("/quotes/{}/favorite", id))
            .authorization_bearer(&user.token)
            .json(&json!({ "isFavorite": true }))
            .await;
        assert_status!(response, StatusCode::OK);
    }
    id
}

async fn login(app: &TestApp, username: &str, password: &str) -> StatusCode {
    app.server
        .post("/login")
        .json(&json!({ "username": username, "password": password }))
        .await
        .status_code()
}

fn descriptions(quotes: &Value) -> Vec<&str> {
    quotes
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["description"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_create_user_is_public() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/users")
        .json(&json!({ "username": "Ikora", "password": "warlock" }))
        .await;

    assert_status!(response, StatusCode::CREATED);
    let body: Value = response.json();
    let id = body["id"].as_i64().unwrap();
    assert_eq!(body, json!({ "id": id, "username": "Ikora" }));
    assert_eq!(
        response.header(header::LOCATION).to_str().unwrap(),
        format!("/users/{}", id)
    );

    assert_eq!(login(&app, "Ikora", "warlock").await, StatusCode::OK);
}

#[tokio::test]
async fn test_create_user_duplicate() {
    let app = TestApp::new().await;
    app.user("Ikora").await;

    let response = app
        .server
        .post("/users")
        .json(&json!({ "username": "Ikora", "password": "warlock" }))
        .await;
    assert_status!(response, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_list_users_with_collections() {
    let app = TestApp::new().await;
    let taniks = app.user("Taniks").await;
    let zavala = app.user("Zavala").await;
    create_quote(&app, &taniks, "big team battle", false).await;
    create_quote(&app, &taniks, "killimanjaro", true).await;
    let book = app
        .server
        .post("/books")
        .authorization_bearer(&zavala.token)
        .json(&json!({ "title": "Saint", "author": "Osiris", "publishedDate": "2019-10-01T00:00:00Z" }))
        .await;
    assert_status!(book, StatusCode::CREATED);

    let response = app.server.get("/users").authorization_bearer(&taniks.token).await;
    assert_status!(response, StatusCode::OK);

    let body: Value = response.json();
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["username"], "Taniks");
    assert_eq!(descriptions(&users[0]["quotes"]), vec!["big team battle", "killimanjaro"]);
    assert!(users[0]["books"].as_array().unwrap().is_empty());
    assert_eq!(users[1]["books"][0]["title"], "Saint");
    assert!(users[1].get("passwordHash").is_none());

    let filtered: Value = app
        .server
        .get("/users")
        .authorization_bearer(&taniks.token)
        .add_query_param("usernameContains", "Zav")
        .await
        .json();
    let filtered = filtered.as_array().unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["id"], zavala.id);
}

#[tokio::test]
async fn test_favorite_quotes_listing() {
    let app = TestApp::new().await;
    let taniks = app.user("Taniks").await;
    create_quote(&app, &taniks, "first", true).await;
    create_quote(&app, &taniks, "second", false).await;
    create_quote(&app, &taniks, "third", true).await;

    let response = app
        .server
        .get("/users/favoriteQuotes")
        .authorization_bearer(&taniks.token)
        .await;
    assert_status!(response, StatusCode::OK);

    let body: Value = response.json();
    let quotes = &body[0]["quotes"];
    assert_eq!(descriptions(quotes), vec!["first", "third"]);
    assert!(quotes.as_array().unwrap().iter().all(|q| q["isFavorite"] == true));
}

#[tokio::test]
async fn test_get_user_and_nested_listings() {
    let app = TestApp::new().await;
    let taniks = app.user("Taniks").await;
    create_quote(&app, &taniks, "killimanjaro", false).await;

    let response = app
        .server
        .get(&format!("/users/{}", taniks.id))
        .authorization_bearer(&taniks.token)
        .await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "id": taniks.id, "username": "Taniks" }));

    let quotes: Value = app
        .server
        .get(&format!("/users/{}/quotes", taniks.id))
        .authorization_bearer(&taniks.token)
        .await
        .json();
    assert_eq!(descriptions(&quotes), vec!["killimanjaro"]);

    let books: Value = app
        .server
        .get(&format!("/users/{}/books", taniks.id))
        .authorization_bearer(&taniks.token)
        .await
        .json();
    assert_eq!(books, json!([]));

    for uri in ["/users/9999", "/users/9999/books", "/users/9999/quotes"] {
        let response = app.server.get(uri).authorization_bearer(&taniks.token).await;
        assert_status!(response, StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn test_update_user() {
    let app = TestApp::new().await;
    let taniks = app.user("Taniks").await;
    app.user("Zavala").await;
    let uri = format!("/users/{}", taniks.id);

    let response = app
        .server
        .put(&uri)
        .authorization_bearer(&taniks.token)
        .json(&json!({ "password": "new-password" }))
        .await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "id": taniks.id, "username": "Taniks" }));

    assert_eq!(login(&app, "Taniks", &taniks.password).await, StatusCode::BAD_REQUEST);
    assert_eq!(login(&app, "Taniks", "new-password").await, StatusCode::OK);

    let conflict = app
        .server
        .put(&uri)
        .authorization_bearer(&taniks.token)
        .json(&json!({ "username": "Zavala" }))
        .await;
    assert_status!(conflict, StatusCode::CONFLICT);

    let missing = app
        .server
        .put("/users/9999")
        .authorization_bearer(&taniks.token)
        .json(&json!({ "username": "Ghost" }))
        .await;
    assert_status!(missing, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user_cascades_links() {
    let app = TestApp::new().await;
    let taniks = app.user("Taniks").await;
    let zavala = app.user("Zavala").await;
    let quote_id = create_quote(&app, &zavala, "towers", false).await;
    let uri = format!("/users/{}", zavala.id);

    let response = app.server.delete(&uri).authorization_bearer(&taniks.token).await;
    assert_status!(response, StatusCode::NO_CONTENT);

    let again = app.server.delete(&uri).authorization_bearer(&taniks.token).await;
    assert_status!(again, StatusCode::NOT_FOUND);

    // The quote survives; only the link is removed.
    let quote = app
        .server
        .get(&format!("/quotes/{}", quote_id))
        .authorization_bearer(&taniks.token)
        .await;
    assert_status!(quote, StatusCode::OK);
    let (links,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM user_quotes WHERE user_id = ?")
        .bind(zavala.id)
        .fetch_one(app.db.pool())
        .await
        .unwrap();
    assert_eq!(links, 0);
}
