//! HR analytics dashboard server.
//!
//! ## Usage
//!
//! ```bash
//! # Serve with ./config/dashboard.yaml
//! hr-dashboard
//!
//! # Custom config and port
//! hr-dashboard --config /etc/hr/dashboard.yaml --port 9000
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use hr_dashboard::api::{AppState, create_router};
use hr_dashboard::config::ConfigLoader;
use hr_dashboard::store::open_store;

/// HR analytics dashboard server
#[derive(Parser, Debug)]
#[command(name = "hr-dashboard")]
#[command(about = "Serves filterable employee analytics over HTTP")]
#[command(version)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "./config/dashboard.yaml")]
    config: PathBuf,

    /// Host address to bind to (overrides the configuration file)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides the configuration file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_level = if args.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = ConfigLoader::load(&args.config)?.into_config();
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let store = open_store(&config.store)?;
    let router = create_router(AppState::new(store));

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!(
        address = %addr,
        version = env!("CARGO_PKG_VERSION"),
        "HR dashboard listening"
    );

    axum::serve(listener, router).await?;

    Ok(())
}
