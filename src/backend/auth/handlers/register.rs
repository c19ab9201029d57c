/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /register.
 *
 * # Registration Process
 *
 * 1. Validate that username and password are not blank
 * 2. Check if the username is already taken
 * 3. Hash password using bcrypt
 * 4. Create user in database
 * 5. Return the new user's id and username
 *
 * # Security
 *
 * - Passwords are hashed using bcrypt with the configured cost
 * - Password hashes are never returned in responses
 */

use axum::{
    extract::State,
    response::Json,
};
use bcrypt::hash;

use crate::backend::auth::users::{create_user, get_user_by_username};
use crate::backend::auth::handlers::types::{Credentials, UserSummary};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - If username or password is blank
/// * `409 Conflict` - If the username is already taken
/// * `500 Internal Server Error` - If password hashing or user creation fails
///
/// # Example Request
///
/// ```http
/// POST /register HTTP/1.1
/// Content-Type: application/json
///
/// { "username": "Taniks", "password": "cayde6" }
/// ```
///
/// # Example Response
///
/// ```json
/// { "id": 1, "username": "Taniks" }
/// ```
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<Credentials>,
) -> Result<Json<UserSummary>, BackendError> {
    tracing::info!("Register request for username: {}", request.username);

    request.validate()?;

    let user = register_user(&state, &request).await?;

    tracing::info!("User registered successfully: {} ({})", user.username, user.id);

    Ok(Json(user))
}

/// Create a user with a hashed password
///
/// Shared by `POST /register` and `POST /users`.
pub async fn register_user(
    state: &AppState,
    request: &Credentials,
) -> Result<UserSummary, BackendError> {
    if get_user_by_username(&state.db_pool, &request.username).await?.is_some() {
        tracing::warn!("Username already exists: {}", request.username);
        return Err(BackendError::conflict("Username already taken"));
    }

    let password_hash = hash(&request.password, state.config.bcrypt_cost)?;

    // A concurrent registration can still win the race; the unique index
    // turns that into a conflict as well.
    let user = create_user(&state.db_pool, &request.username, &password_hash).await?;

    Ok(user.summary())
}
