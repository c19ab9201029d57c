/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up user by username
 * 2. Verify password using bcrypt
 * 3. Generate JWT token
 * 4. Return token and user id
 *
 * # Security
 *
 * - Unknown usernames and wrong passwords produce the same
 *   `400 Invalid Credentials` response
 * - Tokens expire after the configured TTL (60 minutes by default)
 * - Passwords are never logged or returned in responses
 */
use axum::{
    extract::State,
    response::Json,
};
use bcrypt::verify;

use crate::backend::auth::handlers::types::{Credentials, LoginResponse};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::get_user_by_username;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - If the user is not found or the password is incorrect
/// * `500 Internal Server Error` - If the database query or token generation fails
///
/// # Example Request
///
/// ```http
/// POST /login HTTP/1.1
/// Content-Type: application/json
///
/// { "username": "Taniks", "password": "cayde6" }
/// ```
///
/// # Example Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzUxMiIsInR5cCI6IkpXVCJ9...", "userId": 1 }
/// ```
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<Credentials>,
) -> Result<Json<LoginResponse>, BackendError> {
    tracing::info!("Login attempt for username: {}", request.username);

    let user = match get_user_by_username(&state.db_pool, &request.username).await? {
        Some(user) => user,
        None => {
            tracing::warn!("Login failed: user not found: {}", request.username);
            return Err(BackendError::InvalidCredentials);
        }
    };

    // A malformed stored hash is treated like a wrong password.
    let valid = verify(&request.password, &user.password_hash).unwrap_or_else(|e| {
        tracing::error!("Password verification error for user {}: {:?}", user.id, e);
        false
    });

    if !valid {
        tracing::warn!("Login failed: invalid password for user: {}", request.username);
        return Err(BackendError::InvalidCredentials);
    }

    let token = create_token(&state.config.token, user.id, &user.username)?;

    tracing::info!("User logged in successfully: {} ({})", user.username, user.id);

    Ok(Json(LoginResponse {
        token,
        user_id: user.id,
    }))
}
