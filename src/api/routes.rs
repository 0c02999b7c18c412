use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id_middleware;

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
///
/// One handler per path; discovery and profile routes share the same state.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Discovery
        .route("/recommend", get(handlers::recommend))
        .route("/search", get(handlers::search))
        // User profiles
        .route("/users", post(handlers::create_user))
        .route("/users/:username", get(handlers::get_user))
        .route("/users/:username/favorites", post(handlers::add_favorite))
        // Store liveness
        .route("/test-db", get(handlers::test_db))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
