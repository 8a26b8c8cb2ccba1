//! Button Component

use leptos::*;

/// Visual weight of a button
#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-primary-600 hover:bg-primary-700 text-white",
            ButtonVariant::Secondary => "bg-gray-700 hover:bg-gray-600 text-gray-200",
            ButtonVariant::Danger => "bg-red-600 hover:bg-red-700 text-white",
        }
    }
}

#[component]
pub fn Button(
    #[prop(into)]
    on_click: Callback<()>,
    #[prop(optional)]
    variant: ButtonVariant,
    #[prop(optional, into)]
    active: MaybeSignal<bool>,
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            on:click=move |_| on_click.call(())
            disabled=move || disabled.get()
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors \
                            disabled:opacity-50 disabled:cursor-not-allowed";
                let ring = if active.get() { " ring-2 ring-primary-400" } else { "" };
                format!("{} {}{}", base, variant.class(), ring)
            }
        >
            {children()}
        </button>
    }
}
