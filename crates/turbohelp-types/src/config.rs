//! Relay configuration types.
//!
//! `RelayConfig` is the process-wide, read-only configuration built once at
//! startup. It can be partially loaded from an optional `turbohelp.toml`;
//! every field has a default so an empty or missing file is valid. The
//! upstream credential is deliberately not part of this type.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BASE_URL: &str = "https://models.github.ai/inference";
pub const DEFAULT_MODEL: &str = "openai/gpt-4o";
pub const DEFAULT_STATIC_DIR: &str = "public";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Top-level configuration for the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Address the HTTP server binds to.
    pub host: String,
    /// Port the HTTP server listens on.
    pub port: u16,
    /// Base URL of the OpenAI-compatible completion API.
    pub base_url: String,
    /// Model identifier sent with every completion request.
    pub model: String,
    /// Directory holding the front-end page and its assets.
    pub static_dir: PathBuf,
    /// Total timeout for one upstream call, in seconds.
    pub timeout_secs: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
