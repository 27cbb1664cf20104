//! Router assembly.
//!
//! API routes are registered per resource; the static front-end is the
//! fallback service so unknown non-API paths resolve to files under the
//! configured directory.

use crate::handler;
use crate::state::AppState;
use axum::routing::get;
use axum::Router;
use std::path::Path;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

/// Builds the API router with all routes registered (no middleware, no
/// state).
pub fn build_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/employees",
            get(handler::employees::list).post(handler::employees::create),
        )
        .route(
            "/api/employees/{id}",
            get(handler::employees::get)
                .put(handler::employees::update)
                .delete(handler::employees::delete),
        )
}

/// Builds the fully configured application: routes, static fallback, CORS,
/// state.
pub fn build_app(state: AppState, static_dir: &Path) -> Router {
    build_router()
        .fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
