//! Mapping from core errors to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use dompetku_core::errors::ValidationError;
use dompetku_core::transactions::allowed_categories;
use dompetku_core::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Wrapper turning a core error into a JSON error response.
pub struct ApiError(Error);

impl ApiError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError(Error::Unauthorized(message.into()))
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            // Invalid-category errors carry the allowed list so clients can
            // present the fixed choices.
            Error::Validation(ValidationError::InvalidCategory(_)) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": self.0.to_string(),
                    "allowed_categories": allowed_categories(),
                }),
            ),
            Error::Validation(_) => (StatusCode::BAD_REQUEST, json!({ "error": self.0.to_string() })),
            Error::NotFound(_) => (StatusCode::NOT_FOUND, json!({ "error": self.0.to_string() })),
            Error::Unauthorized(_) => {
                (StatusCode::UNAUTHORIZED, json!({ "error": self.0.to_string() }))
            }
            Error::Conflict(_) => (StatusCode::CONFLICT, json!({ "error": self.0.to_string() })),
            Error::Database(e) => {
                tracing::error!("database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
            Error::PasswordHash(e) | Error::Unexpected(e) => {
                tracing::error!("internal error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
