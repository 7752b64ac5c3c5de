//! Display formatting helpers

use chrono::{DateTime, Utc};

/// `3h 25m`, `45m` or `0m`
pub fn duration(seconds: f64) -> String {
    let minutes = (seconds.max(0.0) / 60.0).round() as u64;
    let (hours, minutes) = (minutes / 60, minutes % 60);
    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// `09:05`
pub fn clock(at: &DateTime<Utc>) -> String {
    at.format("%H:%M").to_string()
}

/// Width of a bar relative to `max`, as a CSS percentage
pub fn bar_width(value: f64, max: f64) -> String {
    if max <= 0.0 {
        return "0%".to_string();
    }
    format!("{:.1}%", (value / max * 100.0).clamp(0.0, 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_duration() {
        assert_eq!(duration(0.0), "0m");
        assert_eq!(duration(2700.0), "45m");
        assert_eq!(duration(12300.0), "3h 25m");
        assert_eq!(duration(3599.0), "1h 0m");
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(50.0, 200.0), "25.0%");
        assert_eq!(bar_width(10.0, 0.0), "0%");
    }

    #[test]
    fn test_clock() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 9, 5, 0).unwrap();
        assert_eq!(clock(&at), "09:05");
        assert_eq!(percent(62.54), "62.5%");
    }
}
