//! Quickstart: a minimal JSON HTTP service.
//!
//! This is the application entry point. It initializes tracing, loads configuration
//! from an optional TOML file plus environment and CLI overrides, sets up the Axum router
//! and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use quickstart::config::{AppConfig, CliOverrides, LogFormat, DEFAULT_LOG_FILTER};
use quickstart::create_router;
use quickstart::http::start_server;

/// Quickstart: a minimal JSON HTTP service
#[derive(Parser, Debug)]
#[command(name = "quickstart", version, about)]
struct Args {
    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// Bind host, overrides config and HOST
    #[arg(long)]
    host: Option<String>,

    /// Listen port, overrides config and PORT
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level filter (e.g., "quickstart=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration: file < environment < CLI
    let file_config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let config = file_config.with_overrides(CliOverrides {
        host: args.host,
        port: args.port,
    })?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry = tracing_subscriber::registry().with(EnvFilter::new(&log_filter));
    match config.logging.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!(
        config = args.config.as_deref().unwrap_or("<defaults>"),
        host = %config.http.host,
        port = config.http.port,
        "Loaded configuration"
    );

    let app = create_router();
    start_server(app, &config).await?;

    Ok(())
}
