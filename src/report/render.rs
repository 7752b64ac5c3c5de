//! Plain-text report rendering
//!
//! Every renderer returns a `String` so the CLI decides where it goes.

use std::fmt::Write;

use crate::api::{
    CategorySummary, HealthResponse, HourlyActivity, Session, StatusResponse, Summary, UserInfo,
};

const BAR_WIDTH: usize = 30;

/// Format seconds as `Xh Ym`, rounded to the nearest minute
pub fn format_duration(seconds: f64) -> String {
    let minutes = (seconds.max(0.0) / 60.0).round() as u64;
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Horizontal bar of `#` proportional to `value / max`
fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * width as f64).round().max(1.0) as usize;
    "#".repeat(len.min(width))
}

pub fn render_status(status: &StatusResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "TimeForged Status");
    let _ = writeln!(out, "  Version:  {}", status.version);
    let _ = writeln!(out, "  Status:   {}", status.status);
    let _ = writeln!(out, "  Users:    {}", status.user_count);
    let _ = writeln!(out, "  Events:   {}", status.event_count);
    out
}

pub fn render_health(health: &HealthResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "TimeForged Status");
    let _ = writeln!(out, "  Version:  {}", health.version);
    let _ = writeln!(out, "  Status:   {}", health.status);
    let _ = writeln!(out, "  (authenticate with an API key for full status)");
    out
}

pub fn render_user(user: &UserInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Logged in as {}", user.label());
    let _ = writeln!(out, "  Username: {}", user.username);
    let _ = writeln!(out, "  User ID:  {}", user.id);
    out
}

fn render_breakdown(out: &mut String, title: &str, rows: &[CategorySummary]) {
    if rows.is_empty() {
        return;
    }

    let max = rows.iter().map(|r| r.total_seconds).fold(0.0, f64::max);

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{:<24} {:>10} {:>5}", "Name", "Time", "%");
    let _ = writeln!(out, "{}", "-".repeat(41 + BAR_WIDTH + 1));
    for row in rows {
        let _ = writeln!(
            out,
            "{:<24} {:>10} {:>4.0}% {}",
            row.name,
            format_duration(row.total_seconds),
            row.percent,
            bar(row.total_seconds, max, BAR_WIDTH)
        );
    }
}

/// Summary report: total, project and language breakdowns, daily totals
pub fn render_summary(summary: &Summary, label: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Report: {}", label);
    let _ = writeln!(
        out,
        "  {} to {}",
        summary.from.format("%Y-%m-%d %H:%M"),
        summary.to.format("%Y-%m-%d %H:%M")
    );
    let _ = writeln!(out, "  Total: {}", format_duration(summary.total_seconds));

    if summary.total_seconds <= 0.0 && summary.projects.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "No activity recorded for the selected time range");
        return out;
    }

    render_breakdown(&mut out, "Projects", &summary.projects);
    render_breakdown(&mut out, "Languages", &summary.languages);

    if !summary.days.is_empty() {
        let max = summary.days.iter().map(|d| d.total_seconds).fold(0.0, f64::max);

        let _ = writeln!(out);
        let _ = writeln!(out, "Daily Breakdown");
        let _ = writeln!(out, "{:<12} {:>10}", "Date", "Time");
        let _ = writeln!(out, "{}", "-".repeat(24 + BAR_WIDTH));
        for day in &summary.days {
            let _ = writeln!(
                out,
                "{:<12} {:>10} {}",
                day.date.to_string(),
                format_duration(day.total_seconds),
                bar(day.total_seconds, max, BAR_WIDTH)
            );
        }
    }

    out
}

/// Session list, one row per session (times in UTC)
pub fn render_sessions(sessions: &[Session]) -> String {
    let mut out = String::new();

    if sessions.is_empty() {
        let _ = writeln!(out, "No sessions for the selected time range");
        return out;
    }

    let _ = writeln!(
        out,
        "{:<17} {:<6} {:>10} {:<20} {:>7}",
        "Start (UTC)", "End", "Duration", "Project", "Events"
    );
    let _ = writeln!(out, "{}", "-".repeat(64));
    for session in sessions {
        let _ = writeln!(
            out,
            "{:<17} {:<6} {:>10} {:<20} {:>7}",
            session.start.format("%Y-%m-%d %H:%M").to_string(),
            session.end.format("%H:%M").to_string(),
            format_duration(session.duration_seconds),
            session.project.as_deref().unwrap_or("-"),
            session.event_count
        );
    }

    let total: f64 = sessions.iter().map(|s| s.duration_seconds).sum();
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} sessions, {} total",
        sessions.len(),
        format_duration(total)
    );
    out
}

/// Hour-of-day chart covering all 24 hours; missing hours render empty
pub fn render_activity(activity: &[HourlyActivity]) -> String {
    let mut out = String::new();

    if activity.is_empty() {
        let _ = writeln!(out, "No activity for the selected time range");
        return out;
    }

    let mut hours = [(0.0f64, 0i64); 24];
    for bucket in activity.iter().filter(|b| b.hour < 24) {
        let slot = &mut hours[bucket.hour as usize];
        slot.0 += bucket.total_seconds;
        slot.1 += bucket.event_count;
    }
    let max = hours.iter().map(|h| h.0).fold(0.0, f64::max);

    let _ = writeln!(out, "{:<6} {:>10} {:>7}", "Hour", "Time", "Events");
    let _ = writeln!(out, "{}", "-".repeat(25 + BAR_WIDTH));
    for (hour, (seconds, events)) in hours.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:02}:00  {:>10} {:>7} {}",
            hour,
            format_duration(*seconds),
            events,
            bar(*seconds, max, BAR_WIDTH)
        );
    }
    out
}
