//! Application state shared by all request handlers.
//!
//! Built once at startup and never written afterwards, so handlers share it
//! without locking.

use std::sync::Arc;

use secrecy::SecretString;

use turbohelp_core::relay::ChatRelay;
use turbohelp_infra::llm::create_provider;
use turbohelp_types::config::RelayConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<ChatRelay>,
}

impl AppState {
    pub fn new(relay: ChatRelay) -> Self {
        Self {
            relay: Arc::new(relay),
        }
    }

    /// Wire the upstream provider and relay from configuration.
    pub fn from_config(config: &RelayConfig, api_key: SecretString) -> anyhow::Result<Self> {
        let provider = create_provider(config, api_key)?;
        Ok(Self::new(ChatRelay::new(provider, config.model.clone())))
    }
}
