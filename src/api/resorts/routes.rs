use crate::api::models::AppState;
use crate::api::resorts::handlers::{add_resort_handler, list_resorts_handler};
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/resorts", get(list_resorts_handler).post(add_resort_handler))
}
