//! Route definitions

use super::handlers;
use super::state::AppState;
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // Browser clients are served from another origin, as in the original
    // deployment.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/graphql", get(handlers::playground).post(handlers::graphql))
        .route("/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}
