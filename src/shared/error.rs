//! Shared Error Types
//!
//! This module defines error types that describe invalid input, independent
//! of the HTTP layer. Request types validate themselves and report problems
//! with these errors; the backend maps them to `400 Bad Request`.
//!
//! # Error Categories
//!
//! - `ValidationError` - A request field is missing, blank, or out of range
//! - `SerializationError` - JSON serialization/deserialization failures
//!
//! # Usage
//!
//! ```rust
//! use bookshelf::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "Title cannot be empty");
//! assert!(error.to_string().contains("title"));
//! ```
use thiserror::Error;

/// Errors raised while validating or decoding client input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

/// Reject empty or whitespace-only values for a required text field
pub fn require_text(field: &str, value: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(field, format!("{} cannot be empty", field)));
    }
    Ok(())
}

/// Like [`require_text`], for fields that are only checked when present
pub fn require_text_if_present(field: &str, value: Option<&str>) -> Result<(), SharedError> {
    match value {
        Some(value) => require_text(field, value),
        None => Ok(()),
    }
}
