//! TimeForged Dashboard
//!
//! Browser dashboard for the TimeForged time tracker, built with Leptos (WASM).
//!
//! # Features
//!
//! - Summary, sessions and hourly activity for a selectable range
//! - API key management in local storage
//! - Server status check
//!
//! # Architecture
//!
//! Client-side rendered Leptos application compiled to WebAssembly. It calls
//! the TimeForged REST API on the same origin; `trunk serve` or
//! `tfdash-serve` forwards `/api` and `/health` to the daemon.

use leptos::*;

mod api;
mod app;
mod components;
mod format;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
