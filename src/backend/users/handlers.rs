//! User HTTP Handlers
//!
//! All user endpoints except `POST /users` require a bearer token.
//! Responses never include password hashes.

use axum::{
    extract::{Path, Query, State},
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Json},
};
use bcrypt::hash;
use sqlx::SqlitePool;

use crate::backend::auth::handlers::register_user;
use crate::backend::auth::users::{self, User};
use crate::backend::books::db::get_books_for_user;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::quotes::db::{get_favorite_quotes_for_user, get_quotes_for_user};
use crate::backend::server::state::AppState;
use crate::shared::books::Book;
use crate::shared::quotes::Quote;
use crate::shared::users::{
    Credentials, ListUsersQuery, UpdateUserRequest, UserFilter, UserSummary, UserWithCollections,
};

fn user_not_found(id: i64) -> BackendError {
    tracing::warn!("User with ID: {} not found", id);
    BackendError::not_found(format!("User {} not found", id))
}

async fn require_user(pool: &SqlitePool, id: i64) -> Result<User, BackendError> {
    users::get_user_by_id(pool, id)
        .await?
        .ok_or_else(|| user_not_found(id))
}

/// Which quotes to attach to each listed user
#[derive(Debug, Clone, Copy)]
enum QuoteSelection {
    All,
    Favorites { limit: i64 },
}

async fn list_with_collections(
    pool: &SqlitePool,
    query: ListUsersQuery,
    selection: QuoteSelection,
) -> Result<Vec<UserWithCollections>, BackendError> {
    let filter = UserFilter::try_from(query)?;
    let users = users::list_users(pool, &filter).await?;

    let mut result = Vec::with_capacity(users.len());
    for user in users {
        let quotes = match selection {
            QuoteSelection::All => get_quotes_for_user(pool, user.id).await?,
            QuoteSelection::Favorites { limit } => {
                get_favorite_quotes_for_user(pool, user.id, limit).await?
            }
        };
        let books = get_books_for_user(pool, user.id).await?;
        result.push(UserWithCollections {
            id: user.id,
            username: user.username,
            quotes,
            books,
        });
    }

    Ok(result)
}

/// GET /users
///
/// Each entry carries all of the user's quotes and books.
pub async fn list_users(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<Vec<UserWithCollections>>, BackendError> {
    let users = list_with_collections(&state.db_pool, query, QuoteSelection::All).await?;
    Ok(Json(users))
}

/// GET /users/favoriteQuotes
///
/// Same shape as `GET /users`, but `quotes` holds only favorites, ordered
/// by id and capped at the favorite limit.
pub async fn list_users_favorite_quotes(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<Vec<UserWithCollections>>, BackendError> {
    let limit = i64::try_from(state.config.favorite_limit).unwrap_or(i64::MAX);
    let users =
        list_with_collections(&state.db_pool, query, QuoteSelection::Favorites { limit }).await?;
    Ok(Json(users))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<UserSummary>, BackendError> {
    let user = require_user(&state.db_pool, id).await?;
    Ok(Json(user.summary()))
}

/// GET /users/{id}/books
pub async fn get_user_books(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Book>>, BackendError> {
    require_user(&state.db_pool, id).await?;
    let books = get_books_for_user(&state.db_pool, id).await?;
    Ok(Json(books))
}

/// GET /users/{id}/quotes
pub async fn get_user_quotes(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Quote>>, BackendError> {
    require_user(&state.db_pool, id).await?;
    let quotes = get_quotes_for_user(&state.db_pool, id).await?;
    Ok(Json(quotes))
}

/// POST /users
///
/// Public, like `/register`, but responds 201 with a `Location` header.
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<Credentials>,
) -> Result<impl IntoResponse, BackendError> {
    request.validate()?;

    let user = register_user(&state, &request).await?;
    tracing::info!("User with ID: {} successfully created", user.id);

    let location = format!("/users/{}", user.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(user)))
}

/// PUT /users/{id}
///
/// A new password is hashed before it is stored.
pub async fn update_user(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(id): Path<i64>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserSummary>, BackendError> {
    tracing::info!("Updating user with ID: {}", id);
    request.validate()?;

    let password_hash = match request.password.as_deref() {
        Some(password) => Some(hash(password, state.config.bcrypt_cost)?),
        None => None,
    };

    let user = users::update_user(
        &state.db_pool,
        id,
        request.username.as_deref(),
        password_hash.as_deref(),
    )
    .await?
    .ok_or_else(|| user_not_found(id))?;

    tracing::info!("User with ID: {} successfully updated", id);
    Ok(Json(user.summary()))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, BackendError> {
    tracing::info!("Deleting user with ID: {}", id);

    if !users::delete_user(&state.db_pool, id).await? {
        return Err(user_not_found(id));
    }

    tracing::info!("User with ID: {} successfully deleted", id);
    Ok(StatusCode::NO_CONTENT)
}
