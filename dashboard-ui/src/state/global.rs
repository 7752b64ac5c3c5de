//! Global Application State
//!
//! Reactive state management using Leptos signals.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use leptos::*;

use crate::api::{ApiClient, KeyStore};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// API client, reads the key from localStorage per request
    pub client: ApiClient,
    /// Whether a key is stored; refreshed by the settings page
    pub has_key: RwSignal<bool>,
    /// Bumped on every save or clear, so a replaced key refetches reports
    pub key_generation: RwSignal<u32>,
    /// Range shown on the dashboard
    pub range: RwSignal<DashboardRange>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Date ranges offered on the dashboard
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DashboardRange {
    Today,
    #[default]
    Week,
    Month,
}

impl DashboardRange {
    pub const ALL: [DashboardRange; 3] = [Self::Today, Self::Week, Self::Month];

    pub fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Week => "Last 7 days",
            Self::Month => "Last 30 days",
        }
    }

    /// `from`/`to` query bounds relative to `now`
    pub fn bounds(self, now: DateTime<Utc>) -> (String, String) {
        let to = now.to_rfc3339_opts(SecondsFormat::Secs, true);
        let from = match self {
            Self::Today => format!("{}T00:00:00Z", now.format("%Y-%m-%d")),
            Self::Week => (now - Duration::days(7)).to_rfc3339_opts(SecondsFormat::Secs, true),
            Self::Month => (now - Duration::days(30)).to_rfc3339_opts(SecondsFormat::Secs, true),
        };
        (from, to)
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

impl GlobalState {
    pub fn new() -> Self {
        let store = KeyStore;
        Self {
            client: ApiClient::new("", store),
            has_key: create_rw_signal(store.has()),
            key_generation: create_rw_signal(0),
            range: create_rw_signal(DashboardRange::default()),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
        }
    }

    /// Re-read key presence after a save or clear
    pub fn refresh_key(&self) {
        self.has_key.set(self.client.store().has());
        self.key_generation.update(|generation| *generation = generation.wrapping_add(1));
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_range_bounds() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap();

        assert_eq!(
            DashboardRange::Today.bounds(now),
            ("2024-03-15T00:00:00Z".to_string(), "2024-03-15T14:30:00Z".to_string())
        );
        assert_eq!(DashboardRange::Week.bounds(now).0, "2024-03-08T14:30:00Z");
        assert_eq!(DashboardRange::Month.bounds(now).0, "2024-02-14T14:30:00Z");
    }

    #[test]
    fn test_default_range_is_week() {
        assert_eq!(DashboardRange::default(), DashboardRange::Week);
        assert_eq!(DashboardRange::default().label(), "Last 7 days");
    }
}
