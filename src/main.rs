//! Upcheck: a minimal HTTP status endpoint server.
//!
//! This is the application entry point. It initializes tracing, sets up the
//! axum router with the single status route, and starts the HTTP server on
//! the fixed port.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use upcheck::config::DEFAULT_LOG_FILTER;
use upcheck::routes::create_router;
use upcheck::server::start_server;

/// Upcheck: a minimal HTTP status endpoint server
#[derive(Parser, Debug)]
#[command(name = "upcheck", version, about)]
struct Args {
    /// Log level filter (e.g., "upcheck=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Create router and start server
    let app = create_router();
    start_server(app).await?;

    Ok(())
}
