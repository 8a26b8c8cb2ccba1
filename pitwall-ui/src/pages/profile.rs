//! Profile Page
//!
//! Signed-in user, preferences and favorites, plus the data source.

use leptos::*;

use pitwall::store::{FavoriteDriver, FavoriteTeam, UserIntent};
use pitwall::views::{profile_summary, ProfileSummary};

use crate::api;
use crate::components::{Button, ButtonVariant, Card, Input};
use crate::state::GlobalState;

/// Profile page component
#[component]
pub fn Profile() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let profile = create_memo(move |_| state.snapshot.with(|s| profile_summary(&s.user)));

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Profile"</h1>
                <p class="text-gray-400 mt-1">
                    {move || match profile.get() {
                        ProfileSummary::SignedIn { username, email, .. } => {
                            format!("{} · {}", username, email)
                        }
                        ProfileSummary::SignedOut => "Not signed in".to_string(),
                    }}
                </p>
            </div>

            {move || match profile.get() {
                ProfileSummary::SignedIn {
                    favorite_drivers,
                    favorite_teams,
                    dark_mode,
                    notifications,
                    ..
                } => view! {
                    <Preferences dark_mode=dark_mode notifications=notifications />
                    <div class="grid md:grid-cols-2 gap-8">
                        <FavoriteDrivers favorites=favorite_drivers />
                        <FavoriteTeams favorites=favorite_teams />
                    </div>
                }.into_view(),
                ProfileSummary::SignedOut => view! {
                    <Card title="Signed out">
                        <p class="text-gray-400 text-sm">
                            "Preferences and favorites are available once a user is loaded."
                        </p>
                    </Card>
                }.into_view(),
            }}

            <DataSource />
        </div>
    }
}

/// Dark mode, notifications and sign out
#[component]
fn Preferences(dark_mode: bool, notifications: bool) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <Card title="Preferences">
            <div class="flex flex-wrap gap-3">
                <Button
                    variant=ButtonVariant::Secondary
                    active=dark_mode
                    on_click=move |_| state.dispatch(UserIntent::ToggleDarkMode)
                >
                    {if dark_mode { "Dark mode: on" } else { "Dark mode: off" }}
                </Button>
                <Button
                    variant=ButtonVariant::Secondary
                    active=notifications
                    on_click=move |_| state.dispatch(UserIntent::ToggleNotifications)
                >
                    {if notifications { "Notifications: on" } else { "Notifications: off" }}
                </Button>
                <Button
                    variant=ButtonVariant::Danger
                    on_click=move |_| {
                        state.dispatch(UserIntent::Logout);
                        state.show_success("Signed out");
                    }
                >
                    "Sign out"
                </Button>
            </div>
        </Card>
    }
}

/// Favorite drivers with add/remove
#[component]
fn FavoriteDrivers(favorites: Vec<FavoriteDriver>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let filter = create_rw_signal(String::new());

    let favorite_ids: Vec<String> = favorites.iter().map(|f| f.id.clone()).collect();
    let candidates = create_memo(move |_| {
        let needle = filter.get().to_lowercase();
        state.snapshot.with(|s| {
            s.driver
                .drivers
                .iter()
                .filter(|d| !favorite_ids.contains(&d.id))
                .filter(|d| !needle.is_empty() && d.name.to_lowercase().contains(&needle))
                .map(|d| FavoriteDriver {
                    id: d.id.clone(),
                    name: d.name.clone(),
                    team: d.team.clone(),
                })
                .collect::<Vec<_>>()
        })
    });

    view! {
        <Card title="Favorite Drivers">
            <ul class="space-y-2 mb-4">
                {favorites.into_iter().map(|fav| {
                    let id = fav.id.clone();
                    view! {
                        <li class="flex items-center justify-between">
                            <span>{fav.name}<span class="text-gray-400 text-sm ml-2">{fav.team}</span></span>
                            <button
                                on:click=move |_| state.dispatch(UserIntent::RemoveFavoriteDriver(id.clone()))
                                class="text-gray-400 hover:text-red-400"
                            >
                                "✕"
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>

            <Input label="Add driver" value=filter placeholder="Search by name" />
            <div class="flex flex-wrap gap-2 mt-2">
                {move || candidates.get().into_iter().map(|fav| {
                    let name = fav.name.clone();
                    view! {
                        <Button
                            variant=ButtonVariant::Secondary
                            on_click=move |_| {
                                state.dispatch(UserIntent::AddFavoriteDriver(fav.clone()));
                                filter.set(String::new());
                            }
                        >
                            {name}
                        </Button>
                    }
                }).collect_view()}
            </div>
        </Card>
    }
}

/// Favorite teams with add/remove
#[component]
fn FavoriteTeams(favorites: Vec<FavoriteTeam>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let favorite_ids: Vec<String> = favorites.iter().map(|f| f.id.clone()).collect();
    let candidates = create_memo(move |_| {
        state.snapshot.with(|s| {
            s.team
                .teams
                .iter()
                .filter(|t| !favorite_ids.contains(&t.id))
                .map(|t| FavoriteTeam {
                    id: t.id.clone(),
                    name: t.name.clone(),
                })
                .collect::<Vec<_>>()
        })
    });

    view! {
        <Card title="Favorite Teams">
            <ul class="space-y-2 mb-4">
                {favorites.into_iter().map(|fav| {
                    let id = fav.id.clone();
                    view! {
                        <li class="flex items-center justify-between">
                            <span>{fav.name}</span>
                            <button
                                on:click=move |_| state.dispatch(UserIntent::RemoveFavoriteTeam(id.clone()))
                                class="text-gray-400 hover:text-red-400"
                            >
                                "✕"
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>

            <div class="flex flex-wrap gap-2">
                {move || candidates.get().into_iter().map(|fav| {
                    let name = fav.name.clone();
                    view! {
                        <Button
                            variant=ButtonVariant::Secondary
                            on_click=move |_| state.dispatch(UserIntent::AddFavoriteTeam(fav.clone()))
                        >
                            {format!("+ {}", name)}
                        </Button>
                    }
                }).collect_view()}
            </div>
        </Card>
    }
}

/// Dataset URL and intent-log replay
#[component]
fn DataSource() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let dataset_url = create_rw_signal(api::get_dataset_url());
    let replay_url = create_rw_signal(String::new());

    let reload = move |_| {
        let url = dataset_url.get_untracked();
        api::set_dataset_url(&url);
        spawn_local(api::load_dataset(state, url));
    };

    let replay = move |_| {
        let url = replay_url.get_untracked();
        if url.trim().is_empty() {
            state.show_error("Enter an intent log URL");
            return;
        }
        spawn_local(api::replay_intents(state, url));
    };

    view! {
        <Card title="Data Source">
            <div class="space-y-4">
                <Input label="Dataset URL" value=dataset_url placeholder=api::DEFAULT_DATASET_URL />
                <Button on_click=reload disabled=state.loading>"Reload"</Button>

                <Input label="Intent log URL" value=replay_url placeholder="/data/intents.json" />
                <Button variant=ButtonVariant::Secondary on_click=replay disabled=state.loading>
                    "Replay"
                </Button>
            </div>
        </Card>
    }
}
