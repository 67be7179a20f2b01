use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fra_core::FraError;
use serde::Serialize;

/// Unified API error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<String>,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
            details: self.details,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<FraError> for ApiError {
    fn from(err: FraError) -> Self {
        match &err {
            FraError::InvalidParameter { .. } => {
                Self::bad_request("Invalid filter parameter").with_details(err.to_string())
            }
            FraError::ClaimNotFound { .. } => Self::not_found("Claim not found"),
            _ => {
                tracing::error!(error = %err, "Request failed");
                Self::internal("Internal error").with_details(err.to_string())
            }
        }
    }
}
