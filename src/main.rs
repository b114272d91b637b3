//! hookreg - Webhook registry entry point.
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Open the store selected by `DATABASE_URL` (runs migrations for PostgreSQL)
//! 3. Build HTTP router with routes and middleware
//! 4. Serve on the configured port until shutdown

use hookreg::{config::Config, server, store};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    tracing::info!(store = ?config.store_kind(), port = config.port, "Configuration loaded");

    let store = store::connect(&config).await?;

    server::serve(store, config.port).await?;

    Ok(())
}
