//! Pitwall Dashboard
//!
//! Motorsport statistics dashboard built with Leptos (WASM).
//!
//! # Pages
//!
//! - Dashboard: race overview and lap time progression
//! - Race Analytics: lap times per driver, pit stops, race statistics
//! - Driver Comparison: pick two drivers, compare statistics and attributes
//! - Team Analytics: constructor standings and wins distribution
//! - Profile: signed-in user preferences and favorites
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! All state lives in a `pitwall` store snapshot held in a signal; pages
//! dispatch intents and re-derive their views from the snapshot.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
