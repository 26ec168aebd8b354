//! LlmProvider trait definition.
//!
//! The core abstraction every upstream completion backend implements.
//! Uses RPITIT for `complete`; see `BoxLlmProvider` for the object-safe form.

use turbohelp_types::llm::{CompletionRequest, CompletionResult, LlmError};

/// Trait for LLM provider backends.
///
/// Implementations must be safe to share across concurrent requests; the
/// relay holds a single instance for the lifetime of the process.
///
/// Implementations live in turbohelp-infra (e.g., `OpenAiCompatibleProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "github-models").
    fn name(&self) -> &str;

    /// Send a completion request and receive the reply from the first choice.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResult, LlmError>> + Send;
}
