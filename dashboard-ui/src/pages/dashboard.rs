//! Dashboard Page
//!
//! Reports for the selected range: headline cards, breakdowns, daily totals,
//! hourly activity and sessions.

use leptos::*;
use leptos_router::*;

use crate::api::{ApiClient, CategorySummary, HourlyActivity, Session, Summary};
use crate::components::{
    ActivityChart, Breakdown, CardSkeleton, DailyChart, Loading, RangePicker, SessionList,
    StatCard,
};
use crate::format;
use crate::state::{DashboardRange, GlobalState};

/// Everything the dashboard shows for one range
#[derive(Clone, Debug, PartialEq)]
struct DashboardData {
    summary: Summary,
    sessions: Vec<Session>,
    activity: Vec<HourlyActivity>,
}

async fn load(client: ApiClient, range: DashboardRange) -> Result<DashboardData, String> {
    let (from, to) = range.bounds(chrono::Utc::now());
    let (from, to) = (Some(from.as_str()), Some(to.as_str()));

    let summary = client.summary(from, to).await?;
    let sessions = client.sessions(from, to).await?;
    let activity = client.activity(from, to).await?;

    Ok(DashboardData { summary, sessions, activity })
}

/// Largest entry of a breakdown
fn top(rows: &[CategorySummary]) -> Option<&CategorySummary> {
    rows.iter().max_by(|a, b| a.total_seconds.total_cmp(&b.total_seconds))
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let client = state.client;

    let data = create_local_resource(
        move || (state.range.get(), state.has_key.get(), state.key_generation.get()),
        move |(range, has_key, _)| async move {
            if !has_key {
                return None;
            }
            state.loading.set(true);
            let result = load(client, range).await;
            state.loading.set(false);
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Failed to load reports: {}", e).into());
            }
            Some(result)
        },
    );

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">
                        {move || state.range.get().label()}
                    </p>
                </div>
                <RangePicker />
            </div>

            <Show when=move || state.has_key.get() fallback=|| view! { <NoKeyPrompt /> }>
                <Transition fallback=move || view! { <DashboardSkeleton /> }>
                    {move || data.get().flatten().map(|result| match result {
                        Ok(data) => view! { <Reports data=data /> }.into_view(),
                        Err(e) => view! { <LoadError message=e /> }.into_view(),
                    })}
                </Transition>
            </Show>
        </div>
    }
}

#[component]
fn Reports(data: DashboardData) -> impl IntoView {
    let DashboardData { summary, sessions, activity } = data;

    let top_project = top(&summary.projects).map(|p| p.name.clone());
    let top_language = top(&summary.languages).map(|l| l.name.clone());
    let session_count = sessions.len();

    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <StatCard
                label="Total time"
                value=format::duration(summary.total_seconds)
                detail=format!("{} - {}", summary.from.format("%b %-d"), summary.to.format("%b %-d"))
            />
            <StatCard label="Sessions" value=session_count.to_string() />
            <StatCard label="Top project" value=top_project.unwrap_or_else(|| "-".to_string()) />
            <StatCard label="Top language" value=top_language.unwrap_or_else(|| "-".to_string()) />
        </div>

        <div class="grid md:grid-cols-2 gap-8">
            <Breakdown title="Projects" rows=summary.projects />
            <Breakdown title="Languages" rows=summary.languages />
        </div>

        <DailyChart days=summary.days />
        <ActivityChart activity=activity />
        <SessionList sessions=sessions />
    }
}

#[component]
fn DashboardSkeleton() -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <CardSkeleton />
            <CardSkeleton />
            <CardSkeleton />
            <CardSkeleton />
        </div>
        <Loading />
    }
}

#[component]
fn LoadError(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-red-900/40 border border-red-700 rounded-xl p-6">
            <h2 class="text-lg font-semibold text-red-300">"Could not load reports"</h2>
            <p class="text-red-200 mt-1">{message}</p>
        </div>
    }
}

#[component]
fn NoKeyPrompt() -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-8 text-center">
            <div class="text-5xl mb-4">"🔑"</div>
            <h2 class="text-xl font-semibold mb-2">"No API key configured"</h2>
            <p class="text-gray-400 mb-6">"Add your TimeForged API key to see your reports."</p>
            <A
                href="/settings"
                class="px-6 py-3 bg-amber-600 hover:bg-amber-700 rounded-lg font-medium transition-colors"
            >
                "Open Settings"
            </A>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, total_seconds: f64) -> CategorySummary {
        CategorySummary { name: name.to_string(), total_seconds, percent: 0.0 }
    }

    #[test]
    fn test_top_picks_largest() {
        let rows = vec![category("api", 1200.5), category("web", 5400.5), category("cli", 30.5)];
        assert_eq!(top(&rows).map(|c| c.name.as_str()), Some("web"));
    }

    #[test]
    fn test_top_of_empty() {
        assert!(top(&[]).is_none());
    }
}
