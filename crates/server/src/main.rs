//! Project board development server.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use server::build_router;
use server::config::Config;
use server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    tracing::info!(users = config.users.len(), static_dir = %config.static_dir.display(), "starting");

    let mut state = AppState::new(&config.users);
    if let Some(offset) = config.utc_offset {
        tracing::info!(%offset, "reading naive deadlines at fixed offset");
        state = state.with_utc_offset(offset);
    }
    let app = build_router(state, &config.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("listening on http://{addr}");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
