//! Session List Component

use leptos::*;

use crate::api::Session;
use crate::format;

/// Most recent sessions first
#[component]
pub fn SessionList(sessions: Vec<Session>) -> impl IntoView {
    let mut sessions = sessions;
    sessions.sort_by(|a, b| b.start.cmp(&a.start));

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Sessions"</h2>
            {if sessions.is_empty() {
                view! { <p class="text-gray-500">"No sessions in this range"</p> }.into_view()
            } else {
                view! {
                    <table class="w-full text-sm">
                        <thead class="text-gray-400 text-left">
                            <tr>
                                <th class="py-2">"Date"</th>
                                <th>"Time"</th>
                                <th>"Project"</th>
                                <th class="text-right">"Duration"</th>
                                <th class="text-right">"Events"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {sessions.into_iter().map(|s| view! {
                                <tr class="border-t border-gray-700">
                                    <td class="py-2">{s.start.format("%Y-%m-%d").to_string()}</td>
                                    <td>{format!("{} - {}", format::clock(&s.start), format::clock(&s.end))}</td>
                                    <td class="truncate">{s.project.unwrap_or_else(|| "-".to_string())}</td>
                                    <td class="text-right">{format::duration(s.duration_seconds)}</td>
                                    <td class="text-right text-gray-400">{s.event_count}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_view()
            }}
        </section>
    }
}
