//! Bookshelf - Main Library
//!
//! A REST backend for tracking users, books, and quotes. Users register,
//! log in for a bearer token, and keep per-user collections of books and
//! quotes. A user may mark a limited number of quotes (5 by default) as
//! favorite.
//!
//! # Module Structure
//!
//! - **`shared`** - Types that do not depend on the server
//!   - JSON request and response types for books, quotes, and users
//!   - Pagination and filters
//!   - Validation and configuration errors
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum router and handlers
//!   - bcrypt passwords and HS512 bearer tokens
//!   - SQLite persistence through sqlx
//!   - The favorite toggle guard
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use bookshelf::backend::server::{config::load_config, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(load_config()?).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:10000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
