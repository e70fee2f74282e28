//! medic agent server entry point.
//!
//! Initialises tracing, loads configuration from environment variables
//! (prefixed with `MEDIC_SERVER_`), detects the platform once, and serves
//! the REST routes and the JSON-RPC endpoint at `/mcp`.

mod auth;
mod routes;
mod rpc;
mod state;

use std::sync::Arc;

use anyhow::{Context, Result};
use medic_common::ServerConfig;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialise tracing with RUST_LOG env filter.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("medic-server starting");

    // 2. Load configuration from MEDIC_SERVER_* env vars.
    let config: ServerConfig = envy::prefixed("MEDIC_SERVER_")
        .from_env()
        .context("failed to load config from MEDIC_SERVER_* env vars")?;

    tracing::info!(
        listen_addr = %config.listen_addr,
        auth_enabled = config.api_key.as_deref().is_some_and(|k| !k.is_empty()),
        config_file = ?config.config,
        "configuration loaded",
    );

    // 3. Platform facts and probe settings are resolved once, here.
    let state = Arc::new(AppState::from_config(&config));
    tracing::info!(
        os = %state.assistant.platform().os_family,
        hostname = %state.assistant.platform().hostname,
        "platform detected",
    );

    let router = routes::router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .context("failed to bind TCP listener")?;

    tracing::info!("medic agent ready on http://{}", config.listen_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("medic-server shut down");
    Ok(())
}

/// Wait for SIGINT (Ctrl-C) for graceful shutdown.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("received shutdown signal");
}
