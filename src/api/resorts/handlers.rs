use crate::api::models::*;
use crate::storage::{generate_id, Resort};
use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use tracing::info;

const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

pub async fn list_resorts_handler(
    State(state): State<AppState>,
) -> Result<Json<ResortListResponse>, AppError> {
    let resorts = state.store.all();
    let count = resorts.len();

    Ok(Json(ResortListResponse {
        success: true,
        resorts,
        count,
    }))
}

/// The token check runs before anything else: a bad or missing token is 401
/// no matter what the body looks like.
pub async fn add_resort_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<AddResortRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AddResortResponse>), AppError> {
    let token = headers
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok());
    if token != Some(state.config.admin_token.as_str()) {
        return Err(AppError::Unauthorized);
    }

    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    // Validate
    request.validate().map_err(AppError::BadRequest)?;

    info!(name = %request.name, "Adding resort");

    let resort = state.store.insert(Resort {
        id: generate_id(),
        name: request.name,
        kind: request.kind,
        location: request.location,
        lat: request.lat,
        lng: request.lng,
        description: request.description,
        water: request.water,
        services: request.services,
        season: request.season,
    });

    info!(id = resort.id, "Resort accepted");

    Ok((
        StatusCode::CREATED,
        Json(AddResortResponse {
            success: true,
            resort,
            message: "Resort added successfully".to_string(),
        }),
    ))
}
