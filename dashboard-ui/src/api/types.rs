//! Response Types
//!
//! JSON bodies returned by the TimeForged API.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    pub user_count: i64,
    pub event_count: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Aggregate report over a date range
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Summary {
    pub total_seconds: f64,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub projects: Vec<CategorySummary>,
    pub languages: Vec<CategorySummary>,
    pub days: Vec<DaySummary>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategorySummary {
    pub name: String,
    pub total_seconds: f64,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub total_seconds: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Session {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_seconds: f64,
    #[serde(default)]
    pub project: Option<String>,
    pub event_count: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HourlyActivity {
    pub hour: u8,
    pub total_seconds: f64,
    pub event_count: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl UserInfo {
    /// Display name when set, otherwise the username
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}

/// Error body; `error` is usually a string but is taken as any JSON value
#[derive(Debug, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl ApiError {
    /// Message carried by `error`; empty when it is missing, falsy or not a scalar
    pub fn message(&self) -> String {
        use serde_json::Value;

        match &self.error {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
            Some(Value::Bool(true)) => "true".to_string(),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_without_project() {
        let session: Session = serde_json::from_str(
            r#"{"start":"2024-01-15T09:00:00Z","end":"2024-01-15T10:30:00Z",
                "duration_seconds":5400.0,"event_count":42}"#,
        )
        .unwrap();
        assert_eq!(session.project, None);
        assert_eq!(session.duration_seconds, 5400.0);
    }

    #[test]
    fn test_user_label() {
        let user: UserInfo = serde_json::from_str(
            r#"{"id":"3f1c2b9e-0000-4000-8000-000000000001","username":"ada"}"#,
        )
        .unwrap();
        assert_eq!(user.label(), "ada");
    }
}
