//! Development Server
//!
//! Serves the built dashboard and forwards API traffic to the backend, so the
//! browser sees a single origin during local development.
//!
//! # Routes
//!
//! - `ANY /api`, `ANY /api/*` - Forwarded to the backend
//! - `ANY /health`, `ANY /health/*` - Forwarded to the backend
//! - everything else - Static file from the dashboard build, falling back
//!   to `index.html` so client-side routes like `/settings` load the app
//!
//! # Example
//!
//! ```rust,ignore
//! use timeforged_dash::config::ServeConfig;
//! use timeforged_dash::server::serve;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     serve(&ServeConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod proxy;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::ServerState;

use axum::{http::HeaderValue, routing::any, Router};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::ServeConfig;

/// Build the development server router
pub fn build_router(state: ServerState, config: &ServeConfig) -> Router {
    let index = config.static_dir.join("index.html");
    let assets = ServeDir::new(&config.static_dir).fallback(ServeFile::new(index));

    let router = Router::new()
        .route("/api", any(proxy::forward))
        .route("/api/*rest", any(proxy::forward))
        .route("/health", any(proxy::forward))
        .route("/health/*rest", any(proxy::forward))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state));

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    if origins.is_empty() {
        router
    } else {
        router.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any),
        )
    }
}

/// Start the development server
pub async fn serve(config: &ServeConfig) -> ServerResult<()> {
    if !config.static_dir.join("index.html").exists() {
        tracing::warn!(
            "No index.html in {:?}; run `trunk build` in dashboard-ui first",
            config.static_dir
        );
    }

    let state = ServerState::new(&config.backend_url);
    let router = build_router(state, config);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Dashboard listening on http://{}", addr);
    tracing::info!("Forwarding /api and /health to {}", config.backend_url);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Dashboard server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
