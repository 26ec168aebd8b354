//! OpenAI-compatible LLM provider implementation.
//!
//! Sends non-streaming requests to `{base_url}/chat/completions` with a
//! bearer credential. GitHub Models is the default endpoint; any other
//! OpenAI-compatible API works by changing the base URL.
//!
//! The request timeout is explicit (see [`OpenAiCompatConfig::timeout`]) and
//! the client never retries: one call to [`LlmProvider::complete`] is one
//! HTTP request.

pub mod config;
pub mod types;

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};

use turbohelp_core::llm::provider::LlmProvider;
use turbohelp_types::llm::{CompletionRequest, CompletionResult, LlmError};

use self::config::{CONNECT_TIMEOUT, OpenAiCompatConfig};
use self::types::{ApiErrorBody, ChatCompletionsRequest, ChatCompletionsResponse};

/// Unified provider for any OpenAI-compatible chat-completions API.
///
/// # API Key Security
///
/// The API key is stored as a [`SecretString`] and is only exposed when
/// building the `Authorization` header. The type does not implement `Debug`.
pub struct OpenAiCompatibleProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    provider_name: String,
}

impl OpenAiCompatibleProvider {
    /// Create a new provider from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Transport`] if the HTTP client cannot be built
    /// (e.g., the TLS backend fails to initialize).
    pub fn new(config: OpenAiCompatConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| LlmError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            provider_name: config.provider_name,
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &str {
        &self.provider_name
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResult, LlmError> {
        let body = ChatCompletionsRequest {
            model: &request.model,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            top_p: request.top_p,
        };

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(map_transport_error)?;

        if !status.is_success() {
            let message = upstream_error_message(status, &text);
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    LlmError::AuthenticationFailed(message)
                }
                StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimited(message),
                _ => LlmError::Status {
                    status: status.as_u16(),
                    message,
                },
            });
        }

        let parsed: ChatCompletionsResponse = serde_json::from_str(&text)
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        let choice = parsed.choices.into_iter().next().ok_or(LlmError::EmptyResponse)?;

        tracing::debug!(
            id = ?parsed.id,
            model = ?parsed.model,
            finish_reason = ?choice.finish_reason,
            "completion received"
        );

        Ok(CompletionResult {
            reply_text: choice.message.content.unwrap_or_default(),
            usage: parsed.usage,
        })
    }
}

fn map_transport_error(err: reqwest::Error) -> LlmError {
    if err.is_timeout() {
        LlmError::Timeout(err.to_string())
    } else {
        LlmError::Transport(err.to_string())
    }
}

/// Pull the human-readable message out of an upstream error body.
fn upstream_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        return parsed.error.message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        status.canonical_reason().unwrap_or("unknown error").to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use axum::extract::State;
    use axum::http::HeaderMap;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{Value, json};
    use turbohelp_types::chat::ConversationTurn;
    use turbohelp_types::llm::SamplingParams;

    /// Bind a stub upstream on an ephemeral port and return its base URL.
    async fn spawn_upstream(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn provider_for(base_url: String, timeout: Duration) -> OpenAiCompatibleProvider {
        OpenAiCompatibleProvider::new(OpenAiCompatConfig {
            provider_name: "stub".into(),
            base_url,
            api_key: SecretString::from("ghp_test_token".to_string()),
            timeout,
        })
        .unwrap()
    }

    fn sample_request() -> CompletionRequest {
        let params = SamplingParams::RELAY;
        CompletionRequest {
            model: "openai/gpt-4o".to_string(),
            messages: vec![
                ConversationTurn::system("You are TurboHelp"),
                ConversationTurn::user("What helmet do I need?"),
            ],
            temperature: params.temperature,
            max_tokens: params.max_tokens,
            top_p: params.top_p,
        }
    }

    #[derive(Clone, Default)]
    struct Captured {
        body: Arc<Mutex<Option<Value>>>,
        auth: Arc<Mutex<Option<String>>>,
    }

    async fn capture_and_reply(
        State(captured): State<Captured>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> Json<Value> {
        *captured.body.lock().unwrap() = Some(body);
        *captured.auth.lock().unwrap() = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        Json(json!({
            "id": "chatcmpl-1",
            "model": "gpt-4o",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "A DOT approved full face helmet." },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 900, "completion_tokens": 12, "total_tokens": 912 }
        }))
    }

    #[tokio::test]
    async fn test_complete_sends_openai_shape() {
        let captured = Captured::default();
        let router = Router::new()
            .route("/chat/completions", post(capture_and_reply))
            .with_state(captured.clone());
        let base_url = spawn_upstream(router).await;
        let provider = provider_for(format!("{base_url}/"), Duration::from_secs(5));

        let result = provider.complete(&sample_request()).await.unwrap();
        assert_eq!(result.reply_text, "A DOT approved full face helmet.");
        let usage = result.usage.unwrap();
        assert_eq!(usage.prompt_tokens, Some(json!(900)));
        assert_eq!(usage.total_tokens, Some(json!(912)));

        let body = captured.body.lock().unwrap().clone().unwrap();
        assert_eq!(body["model"], "openai/gpt-4o");
        assert_eq!(body["temperature"], 0.8);
        assert_eq!(body["max_tokens"], 1024);
        assert_eq!(body["top_p"], 1.0);
        assert_eq!(
            body["messages"],
            json!([
                { "role": "system", "content": "You are TurboHelp" },
                { "role": "user", "content": "What helmet do I need?" }
            ])
        );
        assert_eq!(
            captured.auth.lock().unwrap().as_deref(),
            Some("Bearer ghp_test_token")
        );
    }

    #[tokio::test]
    async fn test_complete_null_content_is_empty_reply() {
        let router = Router::new().route(
            "/chat/completions",
            post(|| async {
                Json(json!({ "choices": [{ "message": { "role": "assistant", "content": null } }] }))
            }),
        );
        let provider = provider_for(spawn_upstream(router).await, Duration::from_secs(5));

        let result = provider.complete(&sample_request()).await.unwrap();
        assert_eq!(result.reply_text, "");
        assert!(result.usage.is_none());
    }

    #[tokio::test]
    async fn test_complete_maps_error_status_with_message() {
        let router = Router::new().route(
            "/chat/completions",
            post(|| async {
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": { "message": "upstream exploded", "code": "server_error" } })),
                )
            }),
        );
        let provider = provider_for(spawn_upstream(router).await, Duration::from_secs(5));

        match provider.complete(&sample_request()).await {
            Err(LlmError::Status { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "upstream exploded");
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_complete_maps_unauthorized() {
        let router = Router::new().route(
            "/chat/completions",
            post(|| async {
                (
                    axum::http::StatusCode::UNAUTHORIZED,
                    Json(json!({ "error": { "message": "Bad credentials" } })),
                )
            }),
        );
        let provider = provider_for(spawn_upstream(router).await, Duration::from_secs(5));

        let err = provider.complete(&sample_request()).await.unwrap_err();
        assert!(matches!(err, LlmError::AuthenticationFailed(ref m) if m == "Bad credentials"));
    }

    #[tokio::test]
    async fn test_complete_maps_rate_limit_plain_text() {
        let router = Router::new().route(
            "/chat/completions",
            post(|| async { (axum::http::StatusCode::TOO_MANY_REQUESTS, "slow down") }),
        );
        let provider = provider_for(spawn_upstream(router).await, Duration::from_secs(5));

        let err = provider.complete(&sample_request()).await.unwrap_err();
        assert!(matches!(err, LlmError::RateLimited(ref m) if m == "slow down"));
    }

    #[tokio::test]
    async fn test_complete_rejects_empty_choices() {
        let router = Router::new().route(
            "/chat/completions",
            post(|| async { Json(json!({ "choices": [] })) }),
        );
        let provider = provider_for(spawn_upstream(router).await, Duration::from_secs(5));

        let err = provider.complete(&sample_request()).await.unwrap_err();
        assert!(matches!(err, LlmError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_complete_rejects_malformed_body() {
        let router = Router::new().route("/chat/completions", post(|| async { "not json" }));
        let provider = provider_for(spawn_upstream(router).await, Duration::from_secs(5));

        let err = provider.complete(&sample_request()).await.unwrap_err();
        assert!(matches!(err, LlmError::Deserialization(_)));
    }

    #[tokio::test]
    async fn test_complete_times_out() {
        let router = Router::new().route(
            "/chat/completions",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({ "choices": [] }))
            }),
        );
        let provider = provider_for(spawn_upstream(router).await, Duration::from_millis(200));

        let err = provider.complete(&sample_request()).await.unwrap_err();
        assert!(matches!(err, LlmError::Timeout(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_complete_connection_refused_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let provider = provider_for(format!("http://{addr}"), Duration::from_secs(5));
        let err = provider.complete(&sample_request()).await.unwrap_err();
        assert!(matches!(err, LlmError::Transport(_)), "got {err:?}");
    }

    #[test]
    fn test_completions_url_trims_trailing_slash() {
        let provider = provider_for(
            "https://models.github.ai/inference/".to_string(),
            Duration::from_secs(60),
        );
        assert_eq!(
            provider.completions_url(),
            "https://models.github.ai/inference/chat/completions"
        );
    }

    #[test]
    fn test_upstream_error_message_fallbacks() {
        assert_eq!(
            upstream_error_message(StatusCode::BAD_GATEWAY, "  "),
            "Bad Gateway"
        );
        assert_eq!(
            upstream_error_message(StatusCode::BAD_GATEWAY, "<html>proxy</html>"),
            "<html>proxy</html>"
        );
    }
}
