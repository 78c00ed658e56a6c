// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::score_explorer::ScoreExplorer;
use crate::infrastructure::config::load_explorer_config;
use crate::infrastructure::json_repository::JsonDatasetRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::routes::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_explorer_config()?;

    // Load the dataset once; it stays read-only for the process lifetime
    let repository = Arc::new(JsonDatasetRepository::new(&config.dataset.path));
    let explorer = ScoreExplorer::load(repository).await?;

    let state = Arc::new(AppState::new(explorer));
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = config.server.bind_address().parse()?;
    tracing::info!("Starting collaboration-explorer on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
