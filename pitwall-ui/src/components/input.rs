//! Text Input Component

use leptos::*;

/// Labelled text input bound to a signal
#[component]
pub fn Input(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm text-gray-400 mb-2">{label}</span>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-2
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </label>
    }
}
