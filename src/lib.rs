pub mod api;
pub mod config;
pub mod domain;
pub mod provider;
pub mod storage;

use crate::api::{health_handler, not_found_handler, AppState};
use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the application router with all routes and layers.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::search::routes())
        .merge(api::resorts::routes())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
