/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler.
 * Each variant maps to one HTTP status code.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - `NotFound` - A user, book, or quote does not exist, or a quote is not
 *   linked to the calling user
 * - `Unauthorized` - Missing or invalid bearer token
 * - `Forbidden` - The token carries no usable user id
 * - `LimitExceeded` - The favorite quote cap is reached
 * - `Conflict` - A unique constraint was violated
 * - `InvalidCredentials` - Login failed
 * - `SharedError` - Request validation failed
 *
 * ## Server Errors
 *
 * - `Database` - Unexpected sqlx failure
 * - `PasswordHash` - bcrypt failure
 * - `Token` - Token signing failure
 *
 * Server errors never expose their details to clients; the details are
 * logged when the error is converted into a response.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::SharedError;

/// Message returned to clients for every server-side failure
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use bookshelf::backend::error::BackendError;
///
/// let err = BackendError::not_found("Book 7 not found");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// The requested resource does not exist or is not visible to the caller
    #[error("{message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Missing, malformed, or expired bearer token
    #[error("{message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// Authenticated, but the token does not identify a user
    #[error("{message}")]
    Forbidden {
        /// Human-readable error message
        message: String,
    },

    /// The user already has the maximum number of favorite quotes
    #[error("You can only have up to {limit} favorite quotes.")]
    LimitExceeded {
        /// The configured favorite limit
        limit: usize,
    },

    /// Unique constraint violation (username, association pair)
    #[error("{message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Unknown username or wrong password
    #[error("Invalid Credentials")]
    InvalidCredentials,

    /// Request validation error
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Unexpected persistence failure
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    /// Password hashing or verification failure
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Token signing failure
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl BackendError {
    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `NotFound` - 404
    /// - `Unauthorized` - 401
    /// - `Forbidden` - 403
    /// - `LimitExceeded`, `InvalidCredentials`, `SharedError` - 400
    /// - `Conflict` - 409
    /// - `Database`, `PasswordHash`, `Token` - 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::LimitExceeded { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::InvalidCredentials => StatusCode::BAD_REQUEST,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::PasswordHash(_) | Self::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the message shown to clients
    pub fn message(&self) -> String {
        if self.status_code().is_server_error() {
            return INTERNAL_ERROR_MESSAGE.to_string();
        }
        self.to_string()
    }
}

impl From<sqlx::Error> for BackendError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return Self::conflict("A record with the same unique value already exists");
            }
        }
        Self::Database(err)
    }
}
