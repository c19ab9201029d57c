/**
 * Favorite Toggle Guard
 *
 * A user may mark at most `limit` of their linked quotes as favorite
 * (5 by default). The check runs whenever a flag would flip from false
 * to true; un-favoriting and same-value sets always pass.
 *
 * # Flow
 *
 * 1. The user must exist (`NotFound` otherwise)
 * 2. The user must be linked to the quote (`NotFound` otherwise)
 * 3. [`evaluate`] decides the transition from the current flag and the
 *    user's favorite count
 * 4. A false-to-true flip is written with a single conditional `UPDATE`
 *    that repeats the count, so the decision and the write cannot be
 *    split by a concurrent toggle from the same user
 *
 * The favorite flag lives on the quote row. Every user linked to a quote
 * sees the same flag, and it counts toward each of their limits.
 */

use sqlx::{SqliteConnection, SqlitePool};
use thiserror::Error;

use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::quotes::db;
use crate::shared::quotes::FavoriteState;

/// What a toggle request does to the stored flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTransition {
    /// The flag already has the requested value; nothing is written
    Unchanged,
    /// false -> true, allowed because the user is under the limit
    Favorite,
    /// true -> false
    Unfavorite,
}

/// Rejection produced by the favorite decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FavoriteError {
    #[error("You can only have up to {limit} favorite quotes.")]
    LimitExceeded { limit: usize },
}

impl From<FavoriteError> for BackendError {
    fn from(err: FavoriteError) -> Self {
        match err {
            FavoriteError::LimitExceeded { limit } => BackendError::LimitExceeded { limit },
        }
    }
}

/// Decide what setting the flag to `desired` does
///
/// `favorite_count` is the number of the user's linked quotes that are
/// currently favorite.
pub fn evaluate(
    current: bool,
    desired: bool,
    favorite_count: usize,
    limit: usize,
) -> Result<FavoriteTransition, FavoriteError> {
    match (current, desired) {
        (a, b) if a == b => Ok(FavoriteTransition::Unchanged),
        (_, false) => Ok(FavoriteTransition::Unfavorite),
        _ if favorite_count >= limit => Err(FavoriteError::LimitExceeded { limit }),
        _ => Ok(FavoriteTransition::Favorite),
    }
}

/// Set the favorite flag of one of a user's quotes
///
/// # Errors
///
/// * `NotFound` - The user does not exist or is not linked to the quote
/// * `LimitExceeded` - The user already has `limit` favorites
pub async fn set_favorite(
    pool: &SqlitePool,
    user_id: i64,
    quote_id: i64,
    desired: bool,
    limit: usize,
) -> Result<FavoriteState, BackendError> {
    let mut conn = pool.acquire().await?;
    set_favorite_in(&mut conn, user_id, quote_id, desired, limit).await
}

/// [`set_favorite`] on an existing connection or open transaction
///
/// Inside a transaction the flag change commits or rolls back together
/// with the caller's other writes.
pub async fn set_favorite_in(
    conn: &mut SqliteConnection,
    user_id: i64,
    quote_id: i64,
    desired: bool,
    limit: usize,
) -> Result<FavoriteState, BackendError> {
    if get_user_by_id(&mut *conn, user_id).await?.is_none() {
        tracing::warn!("Favorite toggle for unknown user {}", user_id);
        return Err(BackendError::not_found(format!("User {} not found", user_id)));
    }

    let quote = db::get_user_quote(&mut *conn, user_id, quote_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Quote {} is not linked to user {}", quote_id, user_id);
            BackendError::not_found(format!("Quote {} not found", quote_id))
        })?;

    let favorite_count = db::count_favorites_for_user(&mut *conn, user_id).await?;
    let favorite_count = usize::try_from(favorite_count).unwrap_or(0);

    let state = FavoriteState {
        id: quote.id,
        is_favorite: desired,
    };

    match evaluate(quote.is_favorite, desired, favorite_count, limit)? {
        FavoriteTransition::Unchanged => Ok(state),
        FavoriteTransition::Unfavorite => {
            db::set_quote_favorite(&mut *conn, quote.id, false).await?;
            tracing::info!("User {} unfavorited quote {}", user_id, quote.id);
            Ok(state)
        }
        FavoriteTransition::Favorite => {
            let limit_param = i64::try_from(limit).unwrap_or(i64::MAX);
            if db::favorite_quote_within_limit(&mut *conn, user_id, quote.id, limit_param).await? {
                tracing::info!("User {} favorited quote {}", user_id, quote.id);
                return Ok(state);
            }

            // Lost a race: either someone else set the flag, the link is
            // gone, or the count reached the limit in between.
            match db::get_user_quote(&mut *conn, user_id, quote.id).await? {
                Some(current) if current.is_favorite => Ok(state),
                Some(_) => {
                    tracing::warn!("User {} reached the favorite limit of {}", user_id, limit);
                    Err(BackendError::LimitExceeded { limit })
                }
                None => Err(BackendError::not_found(format!("Quote {} not found", quote_id))),
            }
        }
    }
}
