//! Activity Chart Component
//!
//! Hour-of-day histogram. The API omits idle hours; the chart always shows
//! all 24.

use leptos::*;

use crate::api::HourlyActivity;
use crate::format;

/// Seconds tracked per hour, indexed 0..24
pub fn hourly_buckets(activity: &[HourlyActivity]) -> [f64; 24] {
    let mut buckets = [0.0; 24];
    for entry in activity {
        if let Some(bucket) = buckets.get_mut(entry.hour as usize) {
            *bucket += entry.total_seconds;
        }
    }
    buckets
}

#[component]
pub fn ActivityChart(activity: Vec<HourlyActivity>) -> impl IntoView {
    let buckets = hourly_buckets(&activity);
    let max = buckets.iter().copied().fold(0.0, f64::max);

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Activity by Hour"</h2>
            <div class="flex items-end gap-1 h-32">
                {buckets.into_iter().enumerate().map(|(hour, seconds)| {
                    let title = format!("{:02}:00 {}", hour, format::duration(seconds));
                    view! {
                        <div class="flex-1 flex flex-col justify-end h-full" title=title>
                            <div class="bg-amber-500/80 rounded-t" style:height=format::bar_width(seconds, max) />
                        </div>
                    }
                }).collect_view()}
            </div>
            <div class="flex justify-between text-xs text-gray-500 mt-2">
                <span>"00"</span>
                <span>"06"</span>
                <span>"12"</span>
                <span>"18"</span>
                <span>"23"</span>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hourly_buckets_fill_gaps() {
        let activity = vec![
            HourlyActivity { hour: 9, total_seconds: 1800.0, event_count: 10 },
            HourlyActivity { hour: 14, total_seconds: 3600.0, event_count: 25 },
        ];
        let buckets = hourly_buckets(&activity);

        assert_eq!(buckets.len(), 24);
        assert_eq!(buckets[9], 1800.0);
        assert_eq!(buckets[14], 3600.0);
        assert_eq!(buckets.iter().filter(|s| **s == 0.0).count(), 22);
    }

    #[test]
    fn test_hourly_buckets_ignore_out_of_range() {
        let activity = vec![HourlyActivity { hour: 24, total_seconds: 60.0, event_count: 1 }];
        assert!(hourly_buckets(&activity).iter().all(|s| *s == 0.0));
    }
}
