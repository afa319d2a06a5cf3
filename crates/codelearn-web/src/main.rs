use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use codelearn_web::{
    config::{Args, WebConfig},
    create_router,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let log_filter = args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("codelearn_web={},tower_http=info", log_filter).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Create configuration
    let config: WebConfig = args.into();
    let listen_addr = config.listen_addr();
    let base_url = config.base_url();
    let open_browser = config.open_browser;

    // Create router
    let app = create_router();

    // Bind to address
    let listener = TcpListener::bind(&listen_addr).await?;

    tracing::info!("Learn to Code frontend starting on {}", base_url);
    tracing::info!("Health check at {}/health", base_url);

    // Open browser if requested
    if open_browser {
        tracing::info!("Opening browser...");
        if let Err(e) = open::that(&base_url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    println!();
    println!("  ╔═══════════════════════════════════════════════════════╗");
    println!("  ║                                                       ║");
    println!("  ║   Learn to Code is running!                           ║");
    println!("  ║                                                       ║");
    println!("  ║   Local:   {}   ║", format!("{:<38}", base_url));
    println!("  ║                                                       ║");
    println!("  ║   Press Ctrl+C to stop                                ║");
    println!("  ║                                                       ║");
    println!("  ╚═══════════════════════════════════════════════════════╝");
    println!();

    // Start server
    axum::serve(listener, app).await?;

    Ok(())
}
