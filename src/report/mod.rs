//! Report presentation
//!
//! Date-range presets for report commands and plain-text renderers for
//! the records returned by the API.

pub mod range;
pub mod render;

pub use range::{RangePreset, ReportRange};
pub use render::{
    format_duration, render_activity, render_health, render_sessions, render_status,
    render_summary, render_user,
};
