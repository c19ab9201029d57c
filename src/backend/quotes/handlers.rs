//! Quote HTTP Handlers
//!
//! Every quote endpoint requires a bearer token. Setting a favorite, whether
//! through `PATCH /quotes/{id}/favorite` or a `PUT` carrying `isFavorite`,
//! goes through the favorite toggle guard.

use axum::{
    extract::{Path, Query, State},
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Json},
};

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::quotes::{db, favorite};
use crate::backend::server::state::AppState;
use crate::shared::quotes::{
    CreateQuoteRequest, FavoriteRequest, FavoriteState, ListQuotesQuery, Quote, QuoteFilter,
    UpdateQuoteRequest,
};

fn quote_not_found(id: i64) -> BackendError {
    tracing::warn!("Quote with ID: {} not found", id);
    BackendError::not_found(format!("Quote {} not found", id))
}

/// GET /quotes
pub async fn list_quotes(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Query(query): Query<ListQuotesQuery>,
) -> Result<Json<Vec<Quote>>, BackendError> {
    let filter = QuoteFilter::try_from(query)?;
    let quotes = db::list_quotes(&state.db_pool, &filter).await?;
    Ok(Json(quotes))
}

/// GET /quotes/{id}
pub async fn get_quote(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Quote>, BackendError> {
    let quote = db::get_quote_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| quote_not_found(id))?;
    Ok(Json(quote))
}

/// POST /quotes
///
/// Creates the quote with `isFavorite` false and links it to the caller.
/// Responds 201 with a `Location` header.
pub async fn create_quote(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(request): Json<CreateQuoteRequest>,
) -> Result<impl IntoResponse, BackendError> {
    let user_id = user.owner_id()?;
    request.validate()?;

    let quote = db::create_quote_for_user(
        &state.db_pool,
        user_id,
        request.description.trim(),
        request.author.trim(),
    )
    .await?;

    tracing::info!(
        "Quote with ID: {} successfully created for user {} ({})",
        quote.id,
        user_id,
        user.username()
    );

    let location = format!("/quotes/{}", quote.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(quote)))
}

/// PUT /quotes/{id}
///
/// Patches description and author and, when `isFavorite` is present, the
/// flag. Turning the flag on goes through the guard for the caller;
/// turning it off is always allowed. Everything runs in one transaction,
/// so a rejected favorite leaves the quote untouched.
pub async fn update_quote(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
    Json(request): Json<UpdateQuoteRequest>,
) -> Result<Json<Quote>, BackendError> {
    tracing::info!("Updating quote with ID: {}", id);
    request.validate()?;

    let mut tx = state.db_pool.begin().await?;

    let mut quote = db::update_quote(
        &mut *tx,
        id,
        request.description.as_deref().map(str::trim),
        request.author.as_deref().map(str::trim),
    )
    .await?
    .ok_or_else(|| quote_not_found(id))?;

    match request.is_favorite {
        Some(desired) if desired == quote.is_favorite => {}
        Some(true) => {
            let user_id = user.user_id()?;
            favorite::set_favorite_in(&mut tx, user_id, id, true, state.config.favorite_limit)
                .await?;
            quote.is_favorite = true;
        }
        Some(false) => {
            db::set_quote_favorite(&mut *tx, id, false).await?;
            tracing::info!("User {} unfavorited quote {}", user.username(), id);
            quote.is_favorite = false;
        }
        None => {}
    }

    tx.commit().await?;

    tracing::info!("Quote with ID: {} successfully updated", id);
    Ok(Json(quote))
}

/// DELETE /quotes/{id}
pub async fn delete_quote(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, BackendError> {
    tracing::info!("Deleting quote with ID: {}", id);

    if !db::delete_quote(&state.db_pool, id).await? {
        return Err(quote_not_found(id));
    }

    tracing::info!("Quote with ID: {} successfully deleted", id);
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /quotes/{id}/favorite
///
/// # Example Request
///
/// ```http
/// PATCH /quotes/5/favorite HTTP/1.1
/// Authorization: Bearer <token>
/// Content-Type: application/json
///
/// { "isFavorite": true }
/// ```
///
/// # Example Responses
///
/// ```json
/// { "id": 5, "isFavorite": true }
/// ```
///
/// ```json
/// { "message": "You can only have up to 5 favorite quotes.", "status": 400 }
/// ```
pub async fn set_favorite(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
    Json(request): Json<FavoriteRequest>,
) -> Result<Json<FavoriteState>, BackendError> {
    let user_id = user.user_id()?;

    let result = favorite::set_favorite(
        &state.db_pool,
        user_id,
        id,
        request.is_favorite,
        state.config.favorite_limit,
    )
    .await?;

    Ok(Json(result))
}
