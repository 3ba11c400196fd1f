//! first-app entry point.
//!
//! Loads `.env` if present, initializes tracing, resolves configuration from
//! the environment, and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use first_app::config::{Config, LogFormat, DEFAULT_LOG_FILTER, ENV_LOG_FORMAT};

/// first-app: health check and static home page server
#[derive(Parser, Debug)]
#[command(name = "first-app", version, about)]
struct Args {
    /// Log level filter (e.g., "first_app=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log format: "text" or "json" (overrides LOG_FORMAT)
    #[arg(long)]
    log_format: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // A missing .env file is fine; real environment variables take precedence
    let dotenv = dotenvy::dotenv();

    // Tracing comes up before configuration so invalid values get logged
    let log_format = args
        .log_format
        .or_else(|| std::env::var(ENV_LOG_FORMAT).ok())
        .map(|raw| LogFormat::parse(&raw))
        .unwrap_or_default();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry = tracing_subscriber::registry().with(EnvFilter::new(&log_filter));
    match log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "Loaded environment file");
    }

    let mut config = Config::from_env();
    config.logging.format = log_format;

    if let Err(e) = first_app::run(config).await {
        tracing::error!(error = %e, "Server failed");
        return Err(e.into());
    }

    Ok(())
}
