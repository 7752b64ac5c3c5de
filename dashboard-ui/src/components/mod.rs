//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod activity_chart;
pub mod breakdown;
pub mod daily_chart;
pub mod loading;
pub mod nav;
pub mod range_picker;
pub mod session_list;
pub mod stat_card;
pub mod toast;

pub use activity_chart::ActivityChart;
pub use breakdown::Breakdown;
pub use daily_chart::DailyChart;
pub use loading::{CardSkeleton, Loading};
pub use nav::Nav;
pub use range_picker::RangePicker;
pub use session_list::SessionList;
pub use stat_card::StatCard;
pub use toast::Toast;
