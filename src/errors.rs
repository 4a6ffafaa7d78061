use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::error::DbErr;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

/// Standard error body returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "error": "Bad Gateway",
    "message": "data store fetch failed: connection refused",
    "timestamp": "2025-03-01T10:30:00.000Z"
}))]
pub struct ErrorResponse {
    /// HTTP status category (e.g. "Bad Gateway")
    #[schema(example = "Bad Gateway")]
    pub error: String,
    /// Human-readable error description
    #[schema(example = "data store fetch failed: connection refused")]
    pub message: String,
    /// ISO 8601 timestamp when the error occurred
    #[schema(example = "2025-03-01T10:30:00.000Z")]
    pub timestamp: String,
}

/// The single failure kind this system surfaces: a data-store read that did
/// not complete. Deliberately not subdivided — every fetch problem degrades
/// the affected list to empty and raises one notification, so finer taxonomy
/// would buy nothing.
#[derive(Debug, thiserror::Error)]
#[error("data store fetch failed: {0}")]
pub struct FetchError(#[from] pub DbErr);

impl FetchError {
    pub fn message(msg: impl Into<String>) -> Self {
        FetchError(DbErr::Custom(msg.into()))
    }
}

impl IntoResponse for FetchError {
    fn into_response(self) -> Response {
        let status = StatusCode::BAD_GATEWAY;
        let err = ErrorResponse {
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message: self.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };
        (status, Json(err)).into_response()
    }
}
