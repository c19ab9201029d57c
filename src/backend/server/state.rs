/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the only state shared between requests. It holds:
 * - The SQLite connection pool
 * - The immutable server configuration
 *
 * Handlers receive it through `State<AppState>`, or extract one field
 * through the `FromRef` implementations below. There are no process-wide
 * singletons; everything a request needs is passed in here.
 *
 * # Example
 *
 * ```rust,no_run
 * use bookshelf::backend::server::state::AppState;
 * use axum::extract::State;
 *
 * async fn handler(State(state): State<AppState>) {
 *     let limit = state.config.favorite_limit;
 *     let _ = (limit, &state.db_pool);
 * }
 * ```
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;
use std::sync::Arc;
use crate::shared::ServerConfig;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Server configuration (token settings, favorite limit, bcrypt cost)
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, config: ServerConfig) -> Self {
        Self {
            db_pool,
            config: Arc::new(config),
        }
    }
}

/// Lets handlers extract the pool directly with `State<SqlitePool>`.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Lets handlers extract the configuration with `State<Arc<ServerConfig>>`.
impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
