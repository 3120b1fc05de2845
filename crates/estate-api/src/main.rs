//! Estate API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p estate-api
//! ```
//!
//! Configuration is loaded from environment variables, with a `.env` file
//! picked up in development.

use estate_common::{try_init_tracing, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Run the server
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        eprintln!("Server failed to start: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration first; the tracing format depends on the environment
    let config = AppConfig::from_env()?;

    if let Err(e) = try_init_tracing(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!("Starting Estate API Server...");
    info!(
        env = ?config.app.env,
        port = config.api.port,
        "Configuration loaded"
    );

    estate_api::run(config).await?;

    Ok(())
}
