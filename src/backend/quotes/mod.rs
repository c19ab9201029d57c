//! Quotes Module
//!
//! Quote CRUD, the user-quote association table, and the favorite toggle
//! guard that caps how many quotes a user may favorite.
//!
//! # Module Structure
//!
//! ```text
//! quotes/
//! ├── mod.rs       - Module exports
//! ├── db.rs        - Quote and association queries
//! ├── favorite.rs  - Favorite toggle guard
//! └── handlers.rs  - HTTP handlers for /quotes
//! ```

pub mod db;
pub mod favorite;
pub mod handlers;

pub use favorite::{evaluate, FavoriteError, FavoriteTransition};
