pub mod models;
pub mod resorts;
pub mod search;

// Re-exports
pub use models::*;

// Health handler (simple, keep here)
use axum::{extract::State, Json};

pub async fn health_handler(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    let resorts = state.store.all().len();
    Json(models::HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        resorts,
    })
}

/// Fallback for unmatched routes.
pub async fn not_found_handler() -> AppError {
    AppError::NotFound
}
