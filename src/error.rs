//! Application error type and its HTTP envelope.
//!
//! Every failure leaving a handler is rendered as a JSON object with an
//! `error` string, optionally accompanied by `details`:
//!
//! ```json
//! { "error": "Missing partnerA or partnerB data" }
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use validator::ValidationErrors;

/// Message returned when the compute backend cannot be reached.
pub const BACKEND_UNAVAILABLE: &str = "Unable to connect to astrology backend";

/// Wire format of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// Errors surfaced by handlers.
///
/// | Variant | Status |
/// |---|---|
/// | `Validation` | 400 |
/// | `Backend` | status reported by the backend |
/// | `BadGateway` | 502 |
/// | `Unavailable` | 503 |
/// | `Internal` | 500 |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation {
        message: String,
        details: Option<Value>,
    },

    #[error("backend error ({status}): {message}")]
    Backend { status: StatusCode, message: String },

    #[error("{message}")]
    BadGateway { message: String },

    #[error("{message}")]
    Unavailable { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn validation(message: impl Into<String>, details: Option<Value>) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn backend(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Backend {
            status,
            message: message.into(),
        }
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::BadGateway {
            message: message.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status this error is rendered with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Backend { status, .. } => *status,
            AppError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            AppError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its wire body.
    pub fn to_error_body(&self) -> ErrorBody {
        match self {
            AppError::Validation { message, details } => ErrorBody {
                error: message.clone(),
                details: details.clone(),
            },
            AppError::Backend { message, .. }
            | AppError::BadGateway { message }
            | AppError::Unavailable { message }
            | AppError::Internal { message } => ErrorBody {
                error: message.clone(),
                details: None,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "request failed");
        }

        (status, Json(self.to_error_body())).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::validation(rejection.body_text(), None)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).ok();
        AppError::validation("Invalid birth data", details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::validation("x", None).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::backend(StatusCode::UNPROCESSABLE_ENTITY, "x").status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(AppError::bad_gateway("x").status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            AppError::unavailable(BACKEND_UNAVAILABLE).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::internal("x").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_body_omits_empty_details() {
        let body = AppError::unavailable(BACKEND_UNAVAILABLE).to_error_body();
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value, json!({ "error": BACKEND_UNAVAILABLE }));
    }

    #[test]
    fn test_error_body_keeps_validation_details() {
        let body =
            AppError::validation("Invalid birth data", Some(json!({"date": []}))).to_error_body();
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["error"], "Invalid birth data");
        assert!(value["details"].get("date").is_some());
    }
}
