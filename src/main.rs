//! rueda-console server entry point.
//!
//! Loads configuration, optionally seeds demo data, and serves the REST API.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use rueda_console::app_state::AppState;
use rueda_console::config::{ConsoleConfig, LogFormat};
use rueda_console::domain::ConsoleStore;
use rueda_console::domain::seed::seed_demo_data;
use rueda_console::server::build_app;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ConsoleConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
    tracing::info!(addr = %config.listen_addr, "starting rueda-console");

    // Build domain layer
    let store = Arc::new(ConsoleStore::new());
    if config.seed_demo_data {
        seed_demo_data(&store)
            .await
            .context("failed to seed demo data")?;
    }

    // Build service layer and router
    let app = build_app(AppState::new(store), config.request_timeout());

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("cannot bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
