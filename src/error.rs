use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;
use thiserror::Error as ThisError;

/// Authentication failures, surfaced as HTTP 401 with a human-readable
/// reason. A missing or broken credential is never downgraded to anonymous
/// access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum AuthError {
    #[error("No authorization provided")]
    MissingHeader,

    #[error("Invalid token format")]
    InvalidFormat,

    #[error("Invalid token")]
    WrongPassword,

    #[error("Token expired")]
    Expired,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "success": false, "error": self.to_string() })),
        )
            .into_response()
    }
}

#[derive(Debug, ThisError)]
pub enum FolioError {
    /// A required field was missing or empty. Maps to HTTP 400.
    #[error("{0}")]
    Validation(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for FolioError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            FolioError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            FolioError::Json(_) | FolioError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "A storage error occurred.".to_string(),
            ),
        };
        (
            status,
            Json(json!({ "success": false, "error": message })),
        )
            .into_response()
    }
}
