//! API error types and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use gform_quick_submit::GformError;

/// All errors the HTTP API reports.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("URL parameter is required")]
    MissingUrl,

    #[error("Failed to parse Google Form")]
    ParseFailed(#[source] GformError),

    #[error("{message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingUrl => StatusCode::BAD_REQUEST,
            ApiError::ParseFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self {
            ApiError::Validation { field, message } => {
                serde_json::json!({ "error": message, "field": field })
            }
            other => serde_json::json!({ "error": other.to_string() }),
        };
        (self.status(), Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
