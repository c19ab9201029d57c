//! Book HTTP Handlers
//!
//! Every book endpoint requires a bearer token. Creating a book also
//! requires a token whose identity claim is a user id.

use axum::{
    extract::{Path, Query, State},
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Json},
};

use crate::backend::books::db::{self, NewBook};
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::books::{Book, BookFilter, CreateBookRequest, ListBooksQuery, UpdateBookRequest};

fn book_not_found(id: i64) -> BackendError {
    tracing::warn!("Book with ID: {} not found", id);
    BackendError::not_found(format!("Book {} not found", id))
}

/// GET /books
pub async fn list_books(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Query(query): Query<ListBooksQuery>,
) -> Result<Json<Vec<Book>>, BackendError> {
    let filter = BookFilter::try_from(query)?;
    let books = db::list_books(&state.db_pool, &filter).await?;
    Ok(Json(books))
}

/// GET /books/{id}
pub async fn get_book(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Book>, BackendError> {
    let book = db::get_book_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| book_not_found(id))?;
    Ok(Json(book))
}

/// POST /books
///
/// Creates the book and links it to the caller. Responds 201 with a
/// `Location` header.
///
/// # Errors
///
/// * `400 Bad Request` - Missing title, author, or publishedDate
/// * `403 Forbidden` - The token does not identify a user
pub async fn create_book(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(request): Json<CreateBookRequest>,
) -> Result<impl IntoResponse, BackendError> {
    let user_id = user.owner_id()?;
    let published_date = request.validate()?;

    let new_book = NewBook {
        title: request.title.trim(),
        author: request.author.trim(),
        published_date,
        image: request.image.as_deref(),
    };
    let book = db::create_book_for_user(&state.db_pool, user_id, &new_book).await?;

    tracing::info!(
        "Book with ID: {} successfully created for user {} ({})",
        book.id,
        user_id,
        user.username()
    );

    let location = format!("/books/{}", book.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(book)))
}

/// PUT /books/{id}
pub async fn update_book(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(id): Path<i64>,
    Json(request): Json<UpdateBookRequest>,
) -> Result<Json<Book>, BackendError> {
    tracing::info!("Updating book with ID: {}", id);
    request.validate()?;

    let book = db::update_book(
        &state.db_pool,
        id,
        request.title.as_deref().map(str::trim),
        request.author.as_deref().map(str::trim),
        request.published_date,
    )
    .await?
    .ok_or_else(|| book_not_found(id))?;

    tracing::info!("Book with ID: {} successfully updated", id);
    Ok(Json(book))
}

/// DELETE /books/{id}
pub async fn delete_book(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, BackendError> {
    tracing::info!("Deleting book with ID: {}", id);

    if !db::delete_book(&state.db_pool, id).await? {
        return Err(book_not_found(id));
    }

    tracing::info!("Book with ID: {} successfully deleted", id);
    Ok(StatusCode::NO_CONTENT)
}
