//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{Navbar, Sidebar, Toast};
use crate::pages::{DriverComparison, Dashboard, Profile, RaceAnalytics, TeamAnalytics};
use crate::state::global::provide_global_state;
use crate::state::GlobalState;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    let state = provide_global_state();

    // Load the dataset once on startup
    spawn_local(api::load_dataset(state, api::get_dataset_url()));

    // Signed-out visitors get the dark theme
    let dark = create_memo(move |_| {
        state.snapshot.with(|s| {
            s.user
                .user
                .as_ref()
                .map_or(true, |u| u.preferences.dark_mode)
        })
    });

    view! {
        <Router>
            <div class=move || {
                if dark.get() {
                    "dark min-h-screen bg-gray-900 text-white flex flex-col"
                } else {
                    "min-h-screen bg-gray-100 text-gray-900 flex flex-col"
                }
            }>
                // Navigation header
                <Navbar />

                <div class="flex flex-1">
                    <Sidebar />

                    // Main content area
                    <main class="flex-1 px-6 py-8 pb-24">
                        <Routes>
                            <Route path="/" view=Dashboard />
                            <Route path="/race-analytics" view=RaceAnalytics />
                            <Route path="/driver-comparison" view=DriverComparison />
                            <Route path="/team-analytics" view=TeamAnalytics />
                            <Route path="/profile" view=Profile />
                            <Route path="/*any" view=NotFound />
                        </Routes>
                    </main>
                </div>

                // Footer with sync status
                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Footer component showing dataset sync status
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="flex items-center justify-between text-sm">
                // Live race indicator
                <div class="flex items-center space-x-2">
                    {move || {
                        let live = state.snapshot.with(|s| {
                            s.race.current_race.as_ref().is_some_and(|r| r.is_live)
                        });
                        if live {
                            view! {
                                <span class="flex items-center space-x-1 text-green-400">
                                    <span class="w-2 h-2 bg-green-400 rounded-full pulse" />
                                    <span>"Live"</span>
                                </span>
                            }.into_view()
                        } else {
                            view! {
                                <span class="flex items-center space-x-1 text-gray-400">
                                    <span class="w-2 h-2 bg-gray-400 rounded-full" />
                                    <span>"No live session"</span>
                                </span>
                            }.into_view()
                        }
                    }}
                </div>

                // Last sync time
                <div class="text-gray-400">
                    {move || {
                        state.last_sync.get()
                            .map(|dt| format!("Last sync: {}", dt.format("%H:%M:%S")))
                            .unwrap_or_else(|| "Not synced".to_string())
                    }}
                </div>

                // Loading indicator
                {move || {
                    if state.loading.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-primary-400">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
