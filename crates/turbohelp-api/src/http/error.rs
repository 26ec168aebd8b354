//! Application error type mapping to HTTP status codes and JSON bodies.
//!
//! Every failure leaves the server as a JSON object with an `error` field;
//! upstream and internal failures add a `details` field with the underlying
//! message.

use std::any::Any;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use turbohelp_types::error::ValidationError;
use turbohelp_types::llm::LlmError;

/// Label returned for every upstream failure.
pub const UPSTREAM_ERROR_LABEL: &str = "Failed to get response from AI";

/// Label returned for unexpected failures inside the relay.
pub const INTERNAL_ERROR_LABEL: &str = "Internal server error";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// The client payload was missing or malformed.
    Validation(ValidationError),
    /// The request body exceeded the router's size limit.
    PayloadTooLarge(String),
    /// The upstream completion call failed.
    Upstream(LlmError),
    /// Anything else.
    Internal(String),
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e)
    }
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::Upstream(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(e) => {
                tracing::debug!(error = %e, "rejected chat request");
                (StatusCode::BAD_REQUEST, json!({ "error": e.to_string() }))
            }
            AppError::PayloadTooLarge(msg) => {
                tracing::debug!(error = %msg, "rejected oversized request");
                (StatusCode::PAYLOAD_TOO_LARGE, json!({ "error": msg }))
            }
            // Logged by the relay where the call failed.
            AppError::Upstream(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": UPSTREAM_ERROR_LABEL, "details": e.to_string() }),
            ),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": INTERNAL_ERROR_LABEL, "details": msg }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Convert a panic caught by `CatchPanicLayer` into an internal error response.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };
    AppError::Internal(details).into_response()
}
