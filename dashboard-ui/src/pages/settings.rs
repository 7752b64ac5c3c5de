//! Settings Page
//!
//! API key management and server status.

use leptos::*;

use crate::api::{HealthResponse, StatusResponse};
use crate::state::GlobalState;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Connect the dashboard to your TimeForged account"</p>
            </div>

            <ApiKeySettings />
            <ServerStatus />
            <AboutSection />
        </div>
    }
}

/// API key input with save, clear and test
#[component]
fn ApiKeySettings() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let store = state.client.store();

    let (key_input, set_key_input) = create_signal(String::new());
    let (testing, set_testing) = create_signal(false);
    let (test_result, set_test_result) = create_signal(None::<Result<String, String>>);

    let save_key = move |_| {
        let key = key_input.get();
        let key = key.trim();
        if key.is_empty() {
            state.show_error("Enter an API key first");
            return;
        }
        store.set(key);
        set_key_input.set(String::new());
        set_test_result.set(None);
        state.refresh_key();
        state.show_success("API key saved");
    };

    let clear_key = move |_| {
        store.clear();
        set_test_result.set(None);
        state.refresh_key();
        state.show_success("API key cleared");
    };

    let test_key = move |_| {
        set_testing.set(true);
        set_test_result.set(None);

        spawn_local(async move {
            match state.client.me().await {
                Ok(user) => {
                    state.show_success(&format!("Authenticated as {}", user.username));
                    set_test_result.set(Some(Ok(user.label().to_string())));
                }
                Err(e) => {
                    state.show_error(&format!("Key test failed: {}", e));
                    set_test_result.set(Some(Err(e)));
                }
            }
            set_testing.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"API Key"</h2>

            <div class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"TimeForged API key"</label>
                    <div class="flex space-x-2">
                        <input
                            type="password"
                            placeholder=move || if state.has_key.get() { "•••••••• (stored)" } else { "tf_..." }
                            prop:value=move || key_input.get()
                            on:input=move |ev| set_key_input.set(event_target_value(&ev))
                            class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-amber-500 focus:outline-none"
                        />
                        <button
                            on:click=save_key
                            class="px-4 py-3 bg-amber-600 hover:bg-amber-700
                                   rounded-lg font-medium transition-colors"
                        >
                            "Save"
                        </button>
                        <button
                            on:click=clear_key
                            disabled=move || !state.has_key.get()
                            class="px-4 py-3 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                                   disabled:text-gray-500 rounded-lg font-medium transition-colors"
                        >
                            "Clear"
                        </button>
                        <button
                            on:click=test_key
                            disabled=move || testing.get() || !state.has_key.get()
                            class="px-4 py-3 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                                   disabled:text-gray-500 rounded-lg font-medium transition-colors"
                        >
                            {move || if testing.get() { "Testing..." } else { "Test" }}
                        </button>
                    </div>
                </div>

                <div class="flex items-center space-x-2">
                    <span class="text-sm text-gray-400">"Status:"</span>
                    {move || {
                        if state.has_key.get() {
                            view! { <span class="text-green-400">"Key stored"</span> }.into_view()
                        } else {
                            view! { <span class="text-yellow-400">"No key stored"</span> }.into_view()
                        }
                    }}
                </div>

                {move || test_result.get().map(|result| match result {
                    Ok(name) => view! {
                        <p class="text-green-400">{format!("✓ Signed in as {}", name)}</p>
                    }.into_view(),
                    Err(e) => view! {
                        <p class="text-red-400">{format!("✕ {}", e)}</p>
                    }.into_view(),
                })}
            </div>
        </section>
    }
}

/// What the server reported
#[derive(Clone, Debug)]
enum ServerInfo {
    Status(StatusResponse),
    /// `/health` answered after `/api/v1/status` failed with the given error
    Health(HealthResponse, String),
}

/// Backend status from `/api/v1/status`, falling back to `/health`
#[component]
fn ServerStatus() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let client = state.client;

    let (refresh, set_refresh) = create_signal(0u32);
    let info = create_local_resource(
        move || (refresh.get(), state.key_generation.get()),
        move |_| async move {
            match client.status().await {
                Ok(status) => Ok(ServerInfo::Status(status)),
                Err(status_error) => client
                    .health()
                    .await
                    .map(|health| ServerInfo::Health(health, status_error.clone()))
                    .map_err(|_| status_error),
            }
        },
    );

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">"Server"</h2>
                <button
                    on:click=move |_| set_refresh.update(|n| *n += 1)
                    class="px-3 py-1 bg-gray-700 hover:bg-gray-600 rounded-md text-sm transition-colors"
                >
                    "Refresh"
                </button>
            </div>

            <Transition fallback=|| view! { <span class="inline-block loading-spinner w-4 h-4" /> }>
                {move || info.get().map(|result| match result {
                    Ok(ServerInfo::Status(status)) => view! {
                        <dl class="grid grid-cols-2 gap-2 text-sm">
                            <dt class="text-gray-400">"Status"</dt>
                            <dd class="text-green-400">{status.status}</dd>
                            <dt class="text-gray-400">"Version"</dt>
                            <dd>{status.version}</dd>
                            <dt class="text-gray-400">"Users"</dt>
                            <dd>{status.user_count}</dd>
                            <dt class="text-gray-400">"Events"</dt>
                            <dd>{status.event_count}</dd>
                        </dl>
                    }.into_view(),
                    Ok(ServerInfo::Health(health, reason)) => view! {
                        <dl class="grid grid-cols-2 gap-2 text-sm">
                            <dt class="text-gray-400">"Health"</dt>
                            <dd class="text-green-400">{health.status}</dd>
                            <dt class="text-gray-400">"Version"</dt>
                            <dd>{health.version}</dd>
                        </dl>
                        <p class="text-xs text-gray-500 mt-2">{format!("Status unavailable: {}", reason)}</p>
                    }.into_view(),
                    Err(e) => view! {
                        <p class="text-red-400">{format!("Unreachable: {}", e)}</p>
                    }.into_view(),
                })}
            </Transition>
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"About"</h2>

            <div class="space-y-4 text-gray-300">
                <p>
                    "The dashboard reads reports from the TimeForged daemon. "
                    "Your API key stays in this browser's local storage and is sent "
                    "with each request as the X-Api-Key header."
                </p>
                <p class="text-sm text-gray-400">
                    {format!("Dashboard v{}", env!("CARGO_PKG_VERSION"))}
                </p>
            </div>
        </section>
    }
}
