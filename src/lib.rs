//! # TimeForged Dashboard
//!
//! Client side of the TimeForged time-tracking service: an authenticated
//! REST client, the credential store it reads its API key from, report
//! renderers, and a development server for the browser dashboard.
//!
//! ## Modules
//!
//! - [`api`]: Typed client for the TimeForged REST API
//! - [`credentials`]: Persistent storage for the API key
//! - [`report`]: Date-range presets and text rendering
//! - [`server`]: Static dashboard + backend forwarding (development)
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use timeforged_dash::{ApiClient, CredentialStore, FileStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(FileStore::open_default());
//!     store.set("tf_0123456789abcdef")?;
//!
//!     let client = ApiClient::new("http://127.0.0.1:6175", store);
//!     let summary = client.summary(Some("2024-01-01"), None).await?;
//!
//!     println!("Tracked {:.0}s", summary.total_seconds);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod credentials;
pub mod logging;
pub mod report;
pub mod server;

pub use api::{
    ApiClient, CategorySummary, ClientError, ClientResult, DateRange, DaySummary,
    HealthResponse, HourlyActivity, ReportQuery, Session, StatusResponse, Summary, UserInfo,
};

pub use credentials::{CredentialError, CredentialStore, FileStore, MemoryStore};

pub use config::{ClientConfig, Config, ConfigError, LoggingConfig, ServeConfig};

pub use report::{RangePreset, ReportRange};

pub use server::{build_router, serve, ServerError, ServerState};
