//! Backend Module
//!
//! All server-side code: the Axum HTTP server, authentication, the
//! book/quote/user handlers, and SQLite persistence.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Registration, login, JWT tokens, user queries
//! - **`middleware`** - Bearer token extractor
//! - **`books`** - Book CRUD and user-book links
//! - **`quotes`** - Quote CRUD, user-quote links, and the favorite guard
//! - **`users`** - User CRUD and per-user listings
//! - **`seed`** - Optional demo data at startup
//! - **`error`** - Backend error type and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request extractors
//! ├── books/          - Books
//! ├── quotes/         - Quotes and favorites
//! ├── users/          - Users
//! ├── seed.rs         - Startup seeding
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the `SqlitePool` and the immutable `ServerConfig`. It is
//! cloned into every handler; there is no other shared state.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. `BackendError` renders as a
//! JSON body `{ "message", "status" }` with the matching status code.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Request extractors
pub mod middleware;

/// Books and user-book links
pub mod books;

/// Quotes, user-quote links, and the favorite guard
pub mod quotes;

/// User endpoints
pub mod users;

/// Startup seeding
pub mod seed;

#[cfg(test)]
pub(crate) mod test_support;

/// Re-export commonly used types
pub use server::create_app;
pub use error::BackendError;
