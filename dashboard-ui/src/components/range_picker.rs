//! Range Picker Component
//!
//! Button group bound to the dashboard range.

use leptos::*;

use crate::state::{DashboardRange, GlobalState};

#[component]
pub fn RangePicker() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let range = state.range;

    view! {
        <div class="flex space-x-1 bg-gray-800 rounded-lg p-1">
            {DashboardRange::ALL.into_iter().map(|option| view! {
                <button
                    on:click=move |_| range.set(option)
                    class=move || {
                        let base = "px-3 py-1 rounded-md text-sm font-medium transition-colors";
                        if range.get() == option {
                            format!("{} bg-amber-600 text-white", base)
                        } else {
                            format!("{} text-gray-400 hover:bg-gray-700", base)
                        }
                    }
                >
                    {option.label()}
                </button>
            }).collect_view()}
        </div>
    }
}
