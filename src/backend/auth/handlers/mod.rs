//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for the public authentication
//! endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── register.rs  - User registration handler
//! └── login.rs     - User authentication handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /register - User registration
//! - **`login`** - POST /login - User authentication
//!
//! # Authentication Flow
//!
//! 1. **Register**: User provides username and password → User created → id and username returned
//! 2. **Login**: User provides username and password → Credentials verified → JWT token returned
//!
//! # Example
//!
//! ```rust,no_run
//! use bookshelf::backend::auth::handlers::{login, register};
//! use bookshelf::backend::server::state::AppState;
//! use axum::{routing::post, Router};
//!
//! # fn example() {
//! let router: Router<AppState> = Router::new()
//!     .route("/register", post(register))
//!     .route("/login", post(login));
//! # }
//! ```

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

// Re-export commonly used types
pub use types::{Credentials, LoginResponse};

// Re-export handlers
pub use register::{register, register_user};
pub use login::login;
