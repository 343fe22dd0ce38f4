use crate::config::AppConfig;
use crate::provider::CompletionProvider;
use crate::storage::{Resort, ResortStore};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn ResortStore>,
    pub provider: Arc<dyn CompletionProvider>,
}

/// Request to search via the completion provider
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub context: Option<String>,
}

/// Response from the search endpoint
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub result: String,
    pub query: String,
}

/// Response listing the resort catalog
#[derive(Debug, Serialize)]
pub struct ResortListResponse {
    pub success: bool,
    pub resorts: Vec<Resort>,
    pub count: usize,
}

/// Request to add a new resort
#[derive(Debug, Deserialize)]
pub struct AddResortRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub lat: f64,
    pub lng: f64,
    pub description: String,
    pub water: String,
    #[serde(default)]
    pub services: Vec<String>,
    pub season: String,
}

/// Response after accepting a resort
#[derive(Debug, Serialize)]
pub struct AddResortResponse {
    pub success: bool,
    pub resort: Resort,
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub resorts: usize,
}

/// Error response. `message` carries internal detail and is only populated
/// in development mode.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SearchRequest {
    /// Validate the request
    pub fn validate(&self) -> Result<(), String> {
        if self.query.trim().is_empty() {
            return Err("Query cannot be empty".to_string());
        }
        Ok(())
    }
}

impl AddResortRequest {
    /// Validate the request
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() || self.location.trim().is_empty() {
            return Err("Incomplete resort data".to_string());
        }
        if !self.lat.is_finite() || !self.lng.is_finite() {
            return Err("Coordinates must be valid numbers".to_string());
        }
        Ok(())
    }
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Unauthorized,
    NotFound,
    Internal {
        error: String,
        detail: Option<String>,
    },
}

impl AppError {
    /// 500 with a generic message; the underlying detail is attached only
    /// when `expose_detail` is set (development mode).
    pub fn internal(error: impl Into<String>, detail: impl ToString, expose_detail: bool) -> Self {
        let detail = detail.to_string();
        error!(detail = %detail, "Internal error");
        AppError::Internal {
            error: error.into(),
            detail: expose_detail.then_some(detail),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized access".to_string(),
                None,
            ),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Route not found".to_string(), None),
            AppError::Internal { error, detail } => {
                (StatusCode::INTERNAL_SERVER_ERROR, error, detail)
            }
        };

        (status, Json(ErrorResponse { error, message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_is_rejected() {
        let request = SearchRequest {
            query: "   ".to_string(),
            context: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn resort_request_requires_name_and_location() {
        let request = AddResortRequest {
            name: "".to_string(),
            kind: "Resort".to_string(),
            location: "Lake Zaisan".to_string(),
            lat: 47.48,
            lng: 82.60,
            description: "".to_string(),
            water: "Lake Zaisan".to_string(),
            services: vec![],
            season: "Summer".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
