/**
 * API Route Handlers
 *
 * Public endpoints that need no bearer token.
 *
 * # Routes
 *
 * - `POST /register` - User registration
 * - `POST /login` - User login, returns a bearer token
 * - `GET /health` - Liveness probe
 */

use axum::{response::Json, routing::{get, post}, Router};
use serde_json::{json, Value};

use crate::backend::auth::{login, register};
use crate::backend::server::state::AppState;

/// Configure public API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/health", get(health))
}

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
