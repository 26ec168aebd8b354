//! Chat relay endpoint.
//!
//! POST /api/chat
//!
//! Request:  `{ "messages": [{ "role": "user", "content": "..." }, ...] }`
//! Response: `{ "message": "<reply>", "usage": { ... } }`
//!
//! The body is taken as raw JSON and validated into a [`ChatRequest`] before
//! anything is sent upstream. Bodies over [`MAX_BODY_BYTES`] are rejected
//! with 413.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::Value;

use turbohelp_types::chat::ChatRequest;
use turbohelp_types::error::ValidationError;
use turbohelp_types::llm::Usage;

use crate::http::error::AppError;
use crate::http::router::MAX_BODY_BYTES;
use crate::state::AppState;

/// Successful chat response.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

/// POST /api/chat -- relay the conversation and return the model's reply.
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(body) = body.map_err(body_rejection)?;
    let request = ChatRequest::from_value(&body)?;

    let completion = state.relay.relay(request).await?;

    Ok(Json(ChatResponse {
        message: completion.reply_text,
        usage: completion.usage,
    }))
}

fn body_rejection(rejection: JsonRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("Request body exceeds the {MAX_BODY_BYTES} byte limit"))
    } else {
        ValidationError::MalformedBody(rejection.body_text()).into()
    }
}
