//! Card Components
//!
//! Panels used by every page.

use leptos::*;

/// Titled content panel
#[component]
pub fn Card(
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    subtitle: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="mb-4">
                <h2 class="text-xl font-semibold">{title}</h2>
                {subtitle.map(|s| view! { <p class="text-gray-400 text-sm mt-1">{s}</p> })}
            </div>
            {children()}
        </section>
    }
}

/// Single headline number
#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    icon: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4">
            <div class="flex items-center justify-between mb-2">
                <span class="text-sm text-gray-400">{label}</span>
                {icon.map(|i| view! { <span class="text-xl">{i}</span> })}
            </div>
            <div class="text-2xl font-bold truncate">{move || value.get()}</div>
        </div>
    }
}
