//! IPCA API Server binary.

use std::path::Path;

use clap::Parser;
use ipca_server::{run_server, AppState, ServerConfig};
use tracing_subscriber::EnvFilter;

/// IPCA history and inflation adjustment REST API Server
#[derive(Parser, Debug)]
#[command(name = "ipca-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML configuration file (used when it exists)
    #[arg(short, long, default_value = "config/ipca.toml")]
    config: String,

    /// Host address to bind to (overrides config)
    #[arg(short = 'H', long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// JSON dataset to serve instead of the bundled series (overrides config)
    #[arg(short, long)]
    dataset: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        "debug,tower_http=debug"
    } else {
        "info,tower_http=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    tracing::info!("IPCA Server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let mut config = if Path::new(&args.config).exists() {
        tracing::info!("Loading configuration from {}", args.config);
        ServerConfig::from_file(&args.config)?
    } else {
        tracing::info!("Using default configuration");
        ServerConfig::default()
    };

    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if args.dataset.is_some() {
        config.dataset_path = args.dataset;
    }

    let state = AppState::from_config(&config)?;
    run_server(state, &config.host, config.port).await
}
