/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router and applies the
 * shared layers.
 *
 * # Layers
 *
 * - `CorsLayer` allowing the configured origins (`CORS_ORIGINS`)
 * - `TraceLayer` logging every request and response through `tracing`
 *
 * Unknown paths get a JSON 404 in the same shape as every other error.
 */

use axum::{
    http::HeaderValue,
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::catalog_routes::configure_catalog_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// 1. **API Routes**: register, login, health
/// 2. **Catalog Routes**: books, quotes, users
/// 3. **Fallback Handler**: JSON 404
pub fn create_router(app_state: AppState) -> Router<()> {
    let cors = cors_layer(&app_state.config.cors_origins);

    let router = Router::new();
    let router = configure_api_routes(router);
    let router = configure_catalog_routes(router);

    // Fallback handler for 404
    let router = router.fallback(|| async { BackendError::not_found("Not Found") });

    // CORS runs first so preflight requests never reach the routes.
    router
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .map_response(|res: axum::response::Response<_>| res.map(axum::body::Body::new))
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(app_state)
}

/// Build the CORS layer from the configured origins
///
/// Origins that are not valid header values are skipped with a warning.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
