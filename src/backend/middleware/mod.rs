//! Middleware Module
//!
//! Request processing that runs before handler bodies.
//!
//! - **`auth`** - Bearer token extractor for protected routes
//!
//! # Example
//!
//! ```rust,no_run
//! use bookshelf::backend::middleware::AuthUser;
//!
//! async fn protected(AuthUser(user): AuthUser) -> String {
//!     user.username().to_string()
//! }
//! ```

pub mod auth;

pub use auth::{AuthUser, AuthenticatedUser};
