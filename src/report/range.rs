//! Report date ranges
//!
//! Presets resolve against a caller-supplied "now" so they can be tested.

use chrono::{DateTime, Duration, NaiveDate, SecondsFormat, Utc};
use std::fmt;
use std::str::FromStr;

use crate::api::DateRange;

/// Named report windows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePreset {
    Today,
    Yesterday,
    Week,
    Month,
}

impl RangePreset {
    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            RangePreset::Today => "Today",
            RangePreset::Yesterday => "Yesterday",
            RangePreset::Week => "Last 7 days",
            RangePreset::Month => "Last 30 days",
        }
    }

    /// Concrete bounds relative to `now`
    pub fn resolve(self, now: DateTime<Utc>) -> DateRange {
        match self {
            RangePreset::Today => whole_day(now.date_naive()),
            RangePreset::Yesterday => whole_day(now.date_naive() - Duration::days(1)),
            RangePreset::Week => trailing_days(now, 7),
            RangePreset::Month => trailing_days(now, 30),
        }
    }
}

fn whole_day(date: NaiveDate) -> DateRange {
    DateRange::between(format!("{}T00:00:00Z", date), format!("{}T23:59:59Z", date))
}

fn trailing_days(now: DateTime<Utc>, days: i64) -> DateRange {
    let from = now - Duration::days(days);
    DateRange::between(
        from.to_rfc3339_opts(SecondsFormat::Secs, true),
        now.to_rfc3339_opts(SecondsFormat::Secs, true),
    )
}

impl FromStr for RangePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "today" => Ok(RangePreset::Today),
            "yesterday" => Ok(RangePreset::Yesterday),
            "week" => Ok(RangePreset::Week),
            "month" => Ok(RangePreset::Month),
            other => Err(format!(
                "Unknown range: {}. Use today, yesterday, week, or month.",
                other
            )),
        }
    }
}

impl fmt::Display for RangePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A preset window or explicit bounds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportRange {
    Preset(RangePreset),
    Custom {
        from: Option<String>,
        to: Option<String>,
    },
}

impl ReportRange {
    /// Explicit bounds win over the preset when either is given
    pub fn from_args(preset: RangePreset, from: Option<String>, to: Option<String>) -> Self {
        if from.is_some() || to.is_some() {
            ReportRange::Custom { from, to }
        } else {
            ReportRange::Preset(preset)
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportRange::Preset(preset) => preset.label(),
            ReportRange::Custom { .. } => "Custom range",
        }
    }

    pub fn resolve(&self, now: DateTime<Utc>) -> DateRange {
        match self {
            ReportRange::Preset(preset) => preset.resolve(now),
            ReportRange::Custom { from, to } => DateRange::new(from.as_deref(), to.as_deref()),
        }
    }
}
