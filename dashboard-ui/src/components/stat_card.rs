//! Stat Card Component
//!
//! Headline figure with a caption.

use leptos::*;

#[component]
pub fn StatCard(
    /// Caption above the value
    label: &'static str,
    /// Headline value
    #[prop(into)]
    value: String,
    /// Optional detail line
    #[prop(optional, into)]
    detail: Option<String>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <span class="text-gray-400 text-sm">{label}</span>
            <div class="text-3xl font-bold mt-2 truncate">{value}</div>
            {detail.map(|d| view! {
                <div class="text-sm text-gray-500 mt-1 truncate">{d}</div>
            })}
        </div>
    }
}
