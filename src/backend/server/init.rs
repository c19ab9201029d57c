/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including database loading, optional seeding, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite database and apply migrations
 * 2. Seed empty tables if `SEED_DATABASE` is enabled
 * 3. Build `AppState` and the router
 */

use axum::Router;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::seed::seed_database;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::ServerConfig;

/// Create and configure the Axum application
///
/// # Error Handling
///
/// The database is required: connection, migration, or seeding failures
/// are returned to the caller and stop startup.
pub async fn create_app(config: ServerConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing bookshelf backend server");

    let db_pool = load_database(&config.database_url).await?;

    if config.seed_database {
        seed_database(&db_pool, config.bcrypt_cost).await?;
    }

    let app_state = AppState::new(db_pool, config);
    let app = create_router(app_state);

    tracing::info!("Router configured");

    Ok(app)
}
