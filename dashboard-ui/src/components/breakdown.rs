//! Breakdown Component
//!
//! Ranked list of projects or languages with proportional bars.

use leptos::*;

use crate::api::CategorySummary;
use crate::format;

#[component]
pub fn Breakdown(
    title: &'static str,
    rows: Vec<CategorySummary>,
) -> impl IntoView {
    let max = rows.iter().map(|r| r.total_seconds).fold(0.0, f64::max);

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">{title}</h2>
            {if rows.is_empty() {
                view! { <p class="text-gray-500">"No data for this range"</p> }.into_view()
            } else {
                view! {
                    <ul class="space-y-3">
                        {rows.into_iter().map(|row| {
                            let width = format::bar_width(row.total_seconds, max);
                            view! {
                                <li>
                                    <div class="flex justify-between text-sm mb-1">
                                        <span class="truncate">{row.name}</span>
                                        <span class="text-gray-400">
                                            {format::duration(row.total_seconds)}
                                            " · "
                                            {format::percent(row.percent)}
                                        </span>
                                    </div>
                                    <div class="h-2 bg-gray-700 rounded">
                                        <div class="h-2 bg-amber-500 rounded" style:width=width />
                                    </div>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                }.into_view()
            }}
        </section>
    }
}
