//! Configuration for OpenAI-compatible providers.

use std::time::Duration;

use secrecy::SecretString;

/// Connect timeout applied to every upstream connection.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for an OpenAI-compatible LLM provider.
///
/// Used to construct an [`super::OpenAiCompatibleProvider`]. Not `Debug`,
/// since it holds the credential.
pub struct OpenAiCompatConfig {
    /// Human-readable provider name (e.g., "github-models").
    pub provider_name: String,
    /// Base URL for the API; `/chat/completions` is appended.
    pub base_url: String,
    /// Bearer credential.
    pub api_key: SecretString,
    /// Total timeout for one completion call.
    pub timeout: Duration,
}
