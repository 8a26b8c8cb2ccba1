//! Navigation Components
//!
//! Top bar with brand and account status, and the page sidebar.

use leptos::*;
use leptos_router::*;

use pitwall::store::UserIntent;

use crate::state::GlobalState;

/// Header bar component
#[component]
pub fn Navbar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let username = create_memo(move |_| {
        state.snapshot.with(|s| s.user.user.as_ref().map(|u| u.username.clone()))
    });

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🏁"</span>
                        <span class="text-xl font-bold text-white">"Pitwall"</span>
                    </A>

                    // Account status
                    <div class="flex items-center space-x-4 text-sm">
                        {move || match username.get() {
                            Some(name) => view! {
                                <A href="/profile" class="text-gray-300 hover:text-white">{name}</A>
                                <button
                                    on:click=move |_| state.dispatch(UserIntent::Logout)
                                    class="px-3 py-1 rounded-lg bg-gray-700 hover:bg-gray-600 transition-colors"
                                >
                                    "Sign out"
                                </button>
                            }.into_view(),
                            None => view! {
                                <span class="text-gray-400">"Not signed in"</span>
                            }.into_view(),
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Page sidebar component
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="w-56 shrink-0 bg-gray-800 border-r border-gray-700 min-h-full py-6 px-3">
            <div class="flex flex-col space-y-1">
                <NavLink href="/" label="Dashboard" />
                <NavLink href="/race-analytics" label="Race Analytics" />
                <NavLink href="/driver-comparison" label="Driver Comparison" />
                <NavLink href="/team-analytics" label="Team Analytics" />
                <NavLink href="/profile" label="Profile" />
            </div>
        </aside>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
