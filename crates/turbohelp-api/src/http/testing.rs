//! Stub providers and response helpers shared by the HTTP tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, header};
use axum::response::Response;
use serde_json::Value;

use turbohelp_core::llm::box_provider::BoxLlmProvider;
use turbohelp_core::llm::provider::LlmProvider;
use turbohelp_core::relay::ChatRelay;
use turbohelp_types::llm::{CompletionRequest, CompletionResult, LlmError, Usage};

use crate::state::AppState;

/// Replies with a fixed text and `usage: {total_tokens: 5}`, counting calls
/// and recording every request it sees.
pub struct FixedProvider {
    pub reply: String,
    pub calls: Arc<AtomicUsize>,
    pub seen: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl LlmProvider for FixedProvider {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResult, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(request.clone());
        Ok(CompletionResult {
            reply_text: self.reply.clone(),
            usage: Some(Usage {
                total_tokens: Some(5.into()),
                ..Default::default()
            }),
        })
    }
}

/// Always fails with `LlmError::Transport(message)`.
pub struct FailingProvider {
    pub message: String,
}

impl LlmProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn complete(&self, _request: &CompletionRequest) -> Result<CompletionResult, LlmError> {
        Err(LlmError::Transport(self.message.clone()))
    }
}

/// Echoes the last turn back after a delay taken from the turn's length, so
/// concurrent requests finish out of order.
pub struct EchoProvider;

impl LlmProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResult, LlmError> {
        let last = request
            .messages
            .last()
            .map(|t| t.content.clone())
            .unwrap_or_default();
        let delay = 100u64.saturating_sub(last.len() as u64 * 10);
        tokio::time::sleep(Duration::from_millis(delay)).await;
        Ok(CompletionResult {
            reply_text: format!("echo: {last}"),
            usage: None,
        })
    }
}

/// Panics on every call.
pub struct PanickingProvider;

impl LlmProvider for PanickingProvider {
    fn name(&self) -> &str {
        "panicking"
    }

    async fn complete(&self, _request: &CompletionRequest) -> Result<CompletionResult, LlmError> {
        panic!("provider bug")
    }
}

pub fn state_with<P: LlmProvider + 'static>(provider: P) -> AppState {
    AppState::new(ChatRelay::new(BoxLlmProvider::new(provider), "openai/gpt-4o"))
}

/// State backed by a [`FixedProvider`]; returns the call counter too.
pub fn fixed_state(reply: &str) -> (AppState, Arc<AtomicUsize>) {
    let (state, calls, _) = recording_state(reply);
    (state, calls)
}

/// State backed by a [`FixedProvider`], exposing its call counter and request log.
pub fn recording_state(
    reply: &str,
) -> (AppState, Arc<AtomicUsize>, Arc<Mutex<Vec<CompletionRequest>>>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let provider = FixedProvider {
        reply: reply.to_string(),
        calls: calls.clone(),
        seen: seen.clone(),
    };
    (state_with(provider), calls, seen)
}

/// Build a `POST /api/chat` request with a raw body.
pub fn chat_request(body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

pub async fn read_text(resp: Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    serde_json::from_str(&read_text(resp).await).unwrap()
}
