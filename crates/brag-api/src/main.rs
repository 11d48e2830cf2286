//! BragBoard API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p brag-api
//! ```
//!
//! Configuration is loaded from environment variables (`.env` supported).

use brag_common::{try_init_tracing, AppConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting BragBoard API server...");

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        port = config.server.port,
        seed_demo_data = config.feed.seed_demo_data,
        "Configuration loaded"
    );

    brag_api::run(config).await?;

    Ok(())
}
