//! Authentication API integration tests
//!
//! Tests for register, login, and bearer token handling.

use axum::http::StatusCode;
use serde_json::{json, Value};

use bookshelf::backend::auth::sessions::{create_token_at, sign_claims, verify_token, Claims};

use crate::common::{test_token_settings, TestApp};

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/register")
        .json(&json!({ "username": "Taniks", "password": "cayde6" }))
        .await;

    assert_status!(response, StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["username"], "Taniks");
    assert!(body["id"].is_i64());
    assert!(body.get("password").is_none());
    assert!(body.get("passwordHash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::new().await;
    app.user("Zavala").await;

    let response = app
        .server
        .post("/register")
        .json(&json!({ "username": "Zavala", "password": "towers" }))
        .await;

    assert_status!(response, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_blank_fields() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/register")
        .json(&json!({ "username": "", "password": "towers" }))
        .await;
    assert_status!(response, StatusCode::BAD_REQUEST);

    let response = app
        .server
        .post("/register")
        .json(&json!({ "username": "Zavala" }))
        .await;
    assert_status!(response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_then_login() {
    let app = TestApp::new().await;
    let registered: Value = app
        .server
        .post("/register")
        .json(&json!({ "username": "Taniks", "password": "cayde6" }))
        .await
        .json();

    let response = app
        .server
        .post("/login")
        .json(&json!({ "username": "Taniks", "password": "cayde6" }))
        .await;

    assert_status!(response, StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["userId"], registered["id"]);

    let token = body["token"].as_str().unwrap();
    let claims = verify_token(&test_token_settings(), token).unwrap();
    assert_eq!(claims.name, "Taniks");
    assert_eq!(claims.exp - claims.iat, 60 * 60);

    let books = app.server.get("/books").authorization_bearer(token).await;
    assert_status!(books, StatusCode::OK);
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let app = TestApp::new().await;
    app.user("Taniks").await;

    let wrong_password = app
        .server
        .post("/login")
        .json(&json!({ "username": "Taniks", "password": "wrong" }))
        .await;
    assert_error_body!(wrong_password, StatusCode::BAD_REQUEST, "Invalid Credentials");

    let unknown_user = app
        .server
        .post("/login")
        .json(&json!({ "username": "Nobody", "password": "wrong" }))
        .await;
    assert_error_body!(unknown_user, StatusCode::BAD_REQUEST, "Invalid Credentials");
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let app = TestApp::new().await;

    for uri in ["/books", "/quotes", "/users", "/users/1"] {
        let response = app.server.get(uri).await;
        assert_status!(response, StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn test_invalid_token_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app
        .server
        .get("/books")
        .authorization_bearer("not-a-token")
        .await;
    assert_status!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let app = TestApp::new().await;
    let user = app.user("Taniks").await;

    let issued = chrono::Utc::now().timestamp() - 2 * 60 * 60;
    let token = create_token_at(&test_token_settings(), user.id, &user.username, issued).unwrap();

    let response = app.server.get("/books").authorization_bearer(&token).await;
    assert_status!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_non_numeric_identity_claim() {
    let app = TestApp::new().await;
    let settings = test_token_settings();
    let now = chrono::Utc::now().timestamp();
    let token = sign_claims(
        &settings,
        &Claims {
            name: "ghost".to_string(),
            nameid: "ghost".to_string(),
            iss: settings.issuer.clone(),
            aud: settings.audience.clone(),
            exp: now + 600,
            iat: now,
        },
    )
    .unwrap();

    // Reads only need a valid token.
    let response = app.server.get("/quotes").authorization_bearer(&token).await;
    assert_status!(response, StatusCode::OK);

    let response = app
        .server
        .post("/books")
        .authorization_bearer(&token)
        .json(&json!({ "title": "Fall", "author": "Oryx", "publishedDate": "2017-09-06T00:00:00Z" }))
        .await;
    assert_status!(response, StatusCode::FORBIDDEN);

    let response = app
        .server
        .post("/quotes")
        .authorization_bearer(&token)
        .json(&json!({ "description": "x", "author": "y" }))
        .await;
    assert_status!(response, StatusCode::FORBIDDEN);

    let response = app
        .server
        .patch("/quotes/1/favorite")
        .authorization_bearer(&token)
        .json(&json!({ "isFavorite": true }))
        .await;
    assert_status!(response, StatusCode::UNAUTHORIZED);
}
