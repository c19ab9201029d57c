/**
 * Authentication Extractor
 *
 * This module protects routes that require user authentication. The
 * `AuthUser` extractor reads the bearer token from the Authorization
 * header, verifies it with the configured token settings, and hands the
 * decoded claims to the handler.
 *
 * A handler that takes `AuthUser` as a parameter rejects unauthenticated
 * requests with 401 before its body runs.
 */

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::backend::auth::sessions::{verify_token, Claims};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Authenticated user data extracted from JWT token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub claims: Claims,
}

impl AuthenticatedUser {
    /// Username from the `name` claim
    pub fn username(&self) -> &str {
        &self.claims.name
    }

    /// Numeric user id, or `Forbidden` if the identity claim is unusable
    ///
    /// Used by endpoints that link new rows to the caller.
    pub fn owner_id(&self) -> Result<i64, BackendError> {
        self.claims.user_id().ok_or_else(|| {
            tracing::warn!("Token identity claim is not a user id: {}", self.claims.nameid);
            BackendError::forbidden("Token does not identify a user")
        })
    }

    /// Numeric user id, or `Unauthorized` if the identity claim is unusable
    pub fn user_id(&self) -> Result<i64, BackendError> {
        self.claims.user_id().ok_or_else(|| {
            tracing::warn!("Token identity claim is not a user id: {}", self.claims.nameid);
            BackendError::unauthorized("Invalid token")
        })
    }
}

/// Extract the bearer token from the Authorization header
fn bearer_token(parts: &Parts) -> Result<&str, BackendError> {
    let auth_header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::unauthorized("Missing bearer token")
        })?;

    // Extract token (format: "Bearer <token>")
    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            BackendError::unauthorized("Missing bearer token")
        })
}

/// Axum extractor for authenticated user
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;

        let claims = verify_token(&state.config.token, token).map_err(|e| {
            tracing::warn!("Invalid token: {:?}", e);
            BackendError::unauthorized("Invalid token")
        })?;

        Ok(AuthUser(AuthenticatedUser { claims }))
    }
}
