//! Shared Module
//!
//! Types and data structures that do not depend on the HTTP server: the
//! JSON shapes of the API, pagination, validation errors, and configuration.
//! They are always compiled, so clients and tools can reuse them without the
//! `ssr` feature.

/// Shared error types
pub mod error;

/// Server configuration types
pub mod config;

/// Pagination and substring filters
pub mod pagination;

/// Book types
pub mod books;

/// Quote and favorite types
pub mod quotes;

/// User types
pub mod users;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use config::{ConfigError, ServerConfig, ServerConfigBuilder, TokenSettings};
pub use pagination::Page;
pub use books::Book;
pub use quotes::{FavoriteState, Quote};
pub use users::{UserSummary, UserWithCollections};
