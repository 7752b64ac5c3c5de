//! Data Transfer Objects
//!
//! Response types returned by the TimeForged REST API.
//! These are decoded verbatim from JSON and never mutated by the client.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================
// STATUS DTOs
// ============================================

/// Response from `GET /api/v1/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Status: "ok"
    pub status: String,
    /// Backend version string
    pub version: String,
    /// Number of registered users
    pub user_count: i64,
    /// Number of recorded events
    pub event_count: i64,
}

/// Response from the unauthenticated `GET /health` probe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

// ============================================
// REPORT DTOs
// ============================================

/// Aggregate report over a date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Total tracked time in the range
    pub total_seconds: f64,
    /// Start of the range
    pub from: DateTime<Utc>,
    /// End of the range
    pub to: DateTime<Utc>,
    /// Breakdown by project
    pub projects: Vec<CategorySummary>,
    /// Breakdown by language
    pub languages: Vec<CategorySummary>,
    /// Per-day totals
    pub days: Vec<DaySummary>,
}

/// One row of a project or language breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub name: String,
    pub total_seconds: f64,
    /// Share of the summary total, 0-100
    pub percent: f64,
}

/// Total tracked time for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub total_seconds: f64,
}

/// A contiguous tracked interval of activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_seconds: f64,
    /// Project tag, if the session's events carried one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    pub event_count: i64,
}

/// Events bucketed by hour of day, independent of date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyActivity {
    /// Hour of day, 0-23
    pub hour: u8,
    pub total_seconds: f64,
    pub event_count: i64,
}

// ============================================
// USER DTOs
// ============================================

/// Identity of the user owning the API key (`GET /api/v1/me`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl UserInfo {
    /// Display name if set, otherwise the username
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.username)
    }
}

// ============================================
// ERROR DTOs
// ============================================

/// Error body returned by the backend on non-success status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: String,
}
