//! TurboHelp chat relay entry point.
//!
//! Binary name: `turbohelp`
//!
//! Loads `.env`, parses CLI arguments, layers them over the optional config
//! file, wires the upstream provider, then serves the chat API and the static
//! front-end.

mod banner;
mod cli;
mod http;
mod state;

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use secrecy::SecretString;

use turbohelp_infra::config::load_relay_config;
use turbohelp_observe::tracing_setup::{init_tracing, shutdown_tracing};

use cli::Cli;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_file = cli::load_env_file(Path::new(".env"));
    let cli = Cli::parse();

    init_tracing(cli.log_filter(), cli.otel).map_err(|e| anyhow::anyhow!(e))?;

    match env_file {
        Ok(true) => tracing::info!("loaded environment from .env"),
        Ok(false) => tracing::debug!("no .env file found"),
        Err(e) => tracing::warn!("ignoring malformed .env: {e}"),
    }

    let config = cli.apply_overrides(load_relay_config(&cli.config).await);
    let api_key = SecretString::from(cli.github_token);

    let state = AppState::from_config(&config, api_key)?;

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    banner::print_startup_banner(
        &addr,
        &config.static_dir,
        state.relay.model(),
        state.relay.provider_name(),
    );

    let router = http::router::build_router(state, &config.static_dir);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("\n  Server stopped.");
    shutdown_tracing();

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
