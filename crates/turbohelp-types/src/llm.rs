//! LLM request/response types for the relay.
//!
//! These model the provider-agnostic shapes of a single chat completion:
//! the outbound request, the extracted result, token usage, and the error
//! taxonomy for upstream failures.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::chat::ConversationTurn;

/// Fixed sampling parameters for every upstream call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
}

impl SamplingParams {
    /// The parameters the relay always sends. Not client-configurable.
    pub const RELAY: SamplingParams = SamplingParams {
        temperature: 0.8,
        max_tokens: 1024,
        top_p: 1.0,
    };
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self::RELAY
    }
}

/// Request to an LLM provider for a completion.
///
/// `messages` is the full outbound sequence, including any system turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ConversationTurn>,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
}

/// The reply extracted from the first completion choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionResult {
    pub reply_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

/// Token usage as reported by the upstream provider.
///
/// Only fields the provider actually sent are serialized back, and any
/// fields beyond the three standard counters (e.g. `prompt_tokens_details`)
/// are carried through in `extra`. Counters stay raw JSON values so an
/// unexpected number format never fails the reply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_tokens: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_tokens: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Errors from LLM provider operations.
///
/// None of these are retried; every variant surfaces to the client as an
/// upstream failure carrying this `Display` text.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("rate limited: {0}")]
    RateLimited(String),

    #[error("{status} {message}")]
    Status { status: u16, message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("upstream response contained no choices")]
    EmptyResponse,
}
