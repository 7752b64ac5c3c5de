//! Daily Chart Component
//!
//! Column chart of per-day totals.

use leptos::*;

use crate::api::DaySummary;
use crate::format;

#[component]
pub fn DailyChart(days: Vec<DaySummary>) -> impl IntoView {
    let max = days.iter().map(|d| d.total_seconds).fold(0.0, f64::max);

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Daily Totals"</h2>
            {if days.is_empty() {
                view! { <p class="text-gray-500">"No data for this range"</p> }.into_view()
            } else {
                view! {
                    <div class="flex items-end gap-1 h-40">
                        {days.into_iter().map(|day| {
                            let height = format::bar_width(day.total_seconds, max);
                            let title = format!(
                                "{}: {}",
                                day.date.format("%a %b %-d"),
                                format::duration(day.total_seconds)
                            );
                            view! {
                                <div class="flex-1 flex flex-col justify-end h-full" title=title>
                                    <div class="bg-amber-500 rounded-t" style:height=height />
                                    <span class="text-xs text-gray-500 text-center mt-1">
                                        {day.date.format("%d").to_string()}
                                    </span>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_view()
            }}
        </section>
    }
}
