//! TimeForged Dashboard development server
//!
//! Run with: cargo run --bin tfdash-serve
//!
//! Serves `dashboard-ui/dist` and forwards `/api` and `/health` to the
//! TimeForged daemon.
//!
//! # Configuration
//!
//! `<config_dir>/timeforged/dash.toml` (`[serve]` section), overridden by:
//! - `TF_DASH_HOST`: Host to bind to (default: 127.0.0.1)
//! - `TF_DASH_PORT`: Port to listen on (default: 5173)
//! - `TF_BACKEND_URL`: Backend to forward to (default: http://127.0.0.1:6175)
//! - `TF_DASH_STATIC_DIR`: Built dashboard (default: dashboard-ui/dist)
//! - `RUST_LOG` / `TF_LOG_LEVEL`: Log level (default: info)

use timeforged_dash::{config::Config, logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, problems) = Config::load_default();
    logging::init(&config.logging, "info");
    for problem in &problems {
        tracing::warn!("{}", problem);
    }

    tracing::info!("Starting TimeForged dashboard server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Static directory: {:?}", config.serve.static_dir);

    server::serve(&config.serve).await?;

    Ok(())
}
