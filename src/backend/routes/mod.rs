//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by functionality into focused submodules.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs             - Module exports and documentation
//! ├── router.rs          - Main router creation and layers
//! ├── api_routes.rs      - Public endpoints (register, login, health)
//! └── catalog_routes.rs  - Books, quotes, and users
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use bookshelf::backend::routes::create_router;
//! use bookshelf::backend::server::state::AppState;
//!
//! # fn example(app_state: AppState) {
//! let router = create_router(app_state);
//! # }
//! ```

/// Main router creation
pub mod router;

/// Public API endpoints
pub mod api_routes;

/// Book, quote, and user endpoints
pub mod catalog_routes;

// Re-export commonly used functions
pub use router::create_router;
