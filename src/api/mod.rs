//! TimeForged REST API
//!
//! Typed client for the TimeForged backend.
//!
//! # Endpoints
//!
//! - `GET /api/v1/status` - Service status snapshot
//! - `GET /api/v1/reports/summary?from=&to=` - Aggregate report
//! - `GET /api/v1/reports/sessions?from=&to=` - Tracked sessions
//! - `GET /api/v1/reports/activity?from=&to=` - Hour-of-day activity
//! - `GET /api/v1/me` - Identity of the key owner
//! - `GET /health` - Unauthenticated liveness probe
//!
//! Every request carries `Content-Type: application/json`, plus
//! `X-Api-Key` when a key is stored.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use timeforged_dash::api::ApiClient;
//! use timeforged_dash::credentials::{CredentialStore, MemoryStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(MemoryStore::new());
//!     store.set("abc123")?;
//!
//!     let client = ApiClient::new("http://127.0.0.1:6175", store);
//!     let summary = client.summary(Some("2024-01-01"), Some("2024-01-31")).await?;
//!     println!("{} projects", summary.projects.len());
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod dto;
pub mod error;
pub mod query;

pub use client::{ApiClient, API_KEY_HEADER, DEFAULT_SERVER_URL};
pub use dto::{
    CategorySummary, DaySummary, ErrorResponse, HealthResponse, HourlyActivity, Session,
    StatusResponse, Summary, UserInfo,
};
pub use error::{ClientError, ClientResult};
pub use query::{DateRange, ReportQuery};
