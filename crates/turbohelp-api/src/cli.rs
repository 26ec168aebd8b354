//! Command-line arguments for the `turbohelp` binary.
//!
//! Every setting can also come from an environment variable or from the
//! optional TOML file; flags and env vars override the file. Variables in a
//! `.env` file are loaded first but never replace ones already set.

use std::path::{Path, PathBuf};

use clap::Parser;

use turbohelp_types::config::RelayConfig;

/// TurboHelp chat relay: forwards chat turns to an LLM with the Team Turbo system prompt.
#[derive(Parser)]
#[command(name = "turbohelp", version, about, long_about = None)]
pub struct Cli {
    /// Address to bind.
    #[arg(long, env = "TURBOHELP_HOST")]
    pub host: Option<String>,

    /// Port to listen on.
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Base URL of the OpenAI-compatible completion API.
    #[arg(long, env = "TURBOHELP_BASE_URL")]
    pub base_url: Option<String>,

    /// Model identifier sent upstream.
    #[arg(long, env = "TURBOHELP_MODEL")]
    pub model: Option<String>,

    /// Directory with the front-end page and assets.
    #[arg(long, env = "TURBOHELP_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Upstream request timeout in seconds.
    #[arg(long, env = "TURBOHELP_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Optional TOML config file.
    #[arg(long, env = "TURBOHELP_CONFIG", default_value = "turbohelp.toml")]
    pub config: PathBuf,

    /// Upstream bearer credential. Prefer the environment variable.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: String,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long)]
    pub otel: bool,

    /// Suppress all output except errors.
    #[arg(long)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default tracing filter for the chosen verbosity. `RUST_LOG` wins over this.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "info",
            1 => "info,turbohelp=debug,tower_http=debug",
            _ => "trace",
        }
    }

    /// Layer flag/env values over a config loaded from file.
    pub fn apply_overrides(&self, mut config: RelayConfig) -> RelayConfig {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(static_dir) = &self.static_dir {
            config.static_dir = static_dir.clone();
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.timeout_secs = timeout_secs;
        }
        config
    }
}

/// Load variables from a `.env` file into the process environment.
///
/// Returns `Ok(false)` when the file does not exist. Runs before tracing is
/// up, so the caller logs the outcome.
pub fn load_env_file(path: &Path) -> Result<bool, dotenvy::Error> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(e),
    }
}
