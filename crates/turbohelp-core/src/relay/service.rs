//! ChatRelay -- builds the outbound completion request and forwards it.
//!
//! One validated [`ChatRequest`] produces exactly one upstream call. The
//! outbound sequence is always `[system prompt] ++ client turns`, sampled
//! with the fixed [`SamplingParams::RELAY`] values. Failures are returned
//! to the caller as-is; nothing here retries.

use tracing::{Instrument, debug, error, info_span};

use turbohelp_types::chat::{ChatRequest, ConversationTurn};
use turbohelp_types::llm::{CompletionRequest, CompletionResult, LlmError, SamplingParams};

use crate::llm::box_provider::BoxLlmProvider;

use super::prompt::SYSTEM_PROMPT;

/// Forwards client conversations to the upstream provider.
///
/// Read-only after construction and shared across all requests.
pub struct ChatRelay {
    provider: BoxLlmProvider,
    model: String,
    system_prompt: &'static str,
    sampling: SamplingParams,
}

impl ChatRelay {
    /// Create a relay that sends `model` to `provider` with the built-in
    /// system prompt.
    pub fn new(provider: BoxLlmProvider, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            system_prompt: SYSTEM_PROMPT,
            sampling: SamplingParams::RELAY,
        }
    }

    /// Model identifier sent with every request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Name of the upstream provider.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Build the outbound request: system turn first, then the client turns
    /// in their original order. A client-supplied system turn is forwarded
    /// untouched after ours.
    pub fn build_request(&self, request: ChatRequest) -> CompletionRequest {
        let mut messages = Vec::with_capacity(request.turns.len() + 1);
        messages.push(ConversationTurn::system(self.system_prompt));
        messages.extend(request.turns);

        CompletionRequest {
            model: self.model.clone(),
            messages,
            temperature: self.sampling.temperature,
            max_tokens: self.sampling.max_tokens,
            top_p: self.sampling.top_p,
        }
    }

    /// Relay a conversation upstream and return the provider's reply.
    pub async fn relay(&self, request: ChatRequest) -> Result<CompletionResult, LlmError> {
        let request = self.build_request(request);

        let span = info_span!(
            "gen_ai.complete",
            gen_ai.system = self.provider.name(),
            gen_ai.request.model = %request.model,
            gen_ai.request.max_tokens = request.max_tokens,
            gen_ai.request.temperature = request.temperature,
            turns = request.messages.len(),
        );

        let result = self.provider.complete(&request).instrument(span).await;

        match &result {
            Ok(completion) => {
                if let Some(usage) = &completion.usage {
                    debug!(
                        prompt_tokens = ?usage.prompt_tokens,
                        completion_tokens = ?usage.completion_tokens,
                        total_tokens = ?usage.total_tokens,
                        "upstream completion finished"
                    );
                }
            }
            Err(e) => error!(error = %e, provider = self.provider.name(), "Chat API error"),
        }

        result
    }
}
