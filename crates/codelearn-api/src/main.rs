//! Learn to Code API server binary.

use clap::Parser;
use codelearn_api::{create_router, ApiConfig, AppState, Args};
use codelearn_core::TopicDirectory;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse command line args
    let args = Args::parse();
    let config = ApiConfig::from(&args);

    // Build the topic directory
    let directory = TopicDirectory::builtin();
    info!(topics = directory.len(), "Loaded topic directory");

    // Create application state
    let state = AppState::new(directory);

    // Create router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    info!("API server listening on http://{}", config.listen_addr());

    axum::serve(listener, app).await?;

    Ok(())
}
