use crate::api::models::*;
use crate::domain::is_vko_query;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

/// Persona for the completion provider's system message. Caller-supplied
/// context is appended after it.
const SYSTEM_PROMPT: &str = "You are an expert on tourism in East Kazakhstan (VKO). \
You help find information about resorts and recreation areas.";

pub async fn search_handler(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    // Validate
    request.validate().map_err(AppError::BadRequest)?;

    // Out-of-domain queries never reach the provider
    if !is_vko_query(&request.query) {
        return Err(AppError::BadRequest(
            "Search only covers tourism in East Kazakhstan (VKO)".to_string(),
        ));
    }

    info!(query = %request.query, "Searching");

    let system = format!(
        "{}\n\n{}",
        SYSTEM_PROMPT,
        request.context.as_deref().unwrap_or("")
    );

    let result = state
        .provider
        .complete(&system, &request.query)
        .await
        .map_err(|e| {
            AppError::internal(
                "Error processing the request",
                e,
                state.config.expose_error_detail(),
            )
        })?;

    info!(result_len = result.len(), "Search complete");

    Ok(Json(SearchResponse {
        success: true,
        result,
        query: request.query,
    }))
}
