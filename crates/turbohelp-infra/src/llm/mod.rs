//! LLM provider implementations.
//!
//! Provides [`create_provider`], which builds the upstream client the relay
//! uses from the process configuration and credential.

pub mod openai_compat;

use std::time::Duration;

use secrecy::SecretString;

use turbohelp_core::llm::box_provider::BoxLlmProvider;
use turbohelp_types::config::RelayConfig;
use turbohelp_types::llm::LlmError;

use self::openai_compat::OpenAiCompatibleProvider;
use self::openai_compat::config::OpenAiCompatConfig;

/// Create the upstream [`BoxLlmProvider`] for the relay.
///
/// The provider talks to `config.base_url` with the given bearer credential
/// and a total timeout of `config.timeout_secs`.
pub fn create_provider(config: &RelayConfig, api_key: SecretString) -> Result<BoxLlmProvider, LlmError> {
    let provider = OpenAiCompatibleProvider::new(OpenAiCompatConfig {
        provider_name: provider_name_for(&config.base_url).to_string(),
        base_url: config.base_url.clone(),
        api_key,
        timeout: Duration::from_secs(config.timeout_secs),
    })?;
    Ok(BoxLlmProvider::new(provider))
}

/// Label the upstream for logs and the startup banner.
fn provider_name_for(base_url: &str) -> &'static str {
    if base_url.contains("models.github.ai") {
        "github-models"
    } else if base_url.contains("api.openai.com") {
        "openai"
    } else {
        "openai-compatible"
    }
}
