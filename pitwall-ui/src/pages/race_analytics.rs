//! Race Analytics Page
//!
//! Lap times per driver, pit stop totals and race statistics.

use leptos::*;

use pitwall::views::{driver_lap_series, pit_stop_totals, race_stats};

use crate::components::{Card, Chart, ChartKind, ChartSkeleton, StatCard};
use crate::state::GlobalState;

/// Race analytics page component
#[component]
pub fn RaceAnalytics() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let laps = create_memo(move |_| {
        let palette = state.palette.get();
        state.snapshot.with(|s| {
            driver_lap_series(s.race.current_race.as_ref(), &s.driver.drivers, &palette)
        })
    });
    let pits = create_memo(move |_| {
        let palette = state.palette.get();
        state.snapshot.with(|s| {
            pit_stop_totals(s.race.current_race.as_ref(), &s.driver.drivers, &palette)
        })
    });
    let stats = create_memo(move |_| state.snapshot.with(|s| race_stats(s.race.current_race.as_ref())));
    let loading = create_memo(move |_| state.snapshot.with(|s| s.race.loading));

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Race Analytics"</h1>
                <p class="text-gray-400 mt-1">
                    {move || state.snapshot.with(|s| {
                        s.race.current_race
                            .as_ref()
                            .map(|r| format!("{} · {}", r.name, r.date.format("%b %d, %Y")))
                            .unwrap_or_else(|| "No active race".to_string())
                    })}
                </p>
            </div>

            // Race statistics
            <section class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <StatCard label="Total Laps" value=Signal::derive(move || stats.get().total_laps.to_string()) />
                <StatCard label="Total Pit Stops" value=Signal::derive(move || stats.get().total_pit_stops.to_string()) />
                <StatCard label="Race Status" value=Signal::derive(move || stats.get().status) />
                <StatCard label="Circuit" value=Signal::derive(move || stats.get().circuit) />
            </section>

            <div class="grid md:grid-cols-2 gap-8">
                <Card title="Lap Times Comparison" subtitle="Seconds per lap, by driver">
                    {move || {
                        if loading.get() {
                            view! { <ChartSkeleton /> }.into_view()
                        } else {
                            view! { <Chart kind=ChartKind::Line data=laps /> }.into_view()
                        }
                    }}
                </Card>

                <Card title="Pit Stop Analysis" subtitle="Cumulative pit stop duration (s)">
                    {move || {
                        if loading.get() {
                            view! { <ChartSkeleton /> }.into_view()
                        } else {
                            view! { <Chart kind=ChartKind::Bar data=pits /> }.into_view()
                        }
                    }}
                </Card>
            </div>

            <HistoricalRaces />
        </div>
    }
}

/// Archive of earlier races
#[component]
fn HistoricalRaces() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <Card title="Previous Races">
            <div class="space-y-2">
                {move || {
                    let races = state.snapshot.with(|s| s.race.historical_races.clone());
                    if races.is_empty() {
                        view! {
                            <p class="text-gray-400 text-sm">"No previous races"</p>
                        }.into_view()
                    } else {
                        races.into_iter().rev().map(|race| {
                            view! {
                                <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                                    <div>
                                        <span class="font-medium">{race.name}</span>
                                        <span class="text-gray-400 text-sm ml-2">{race.circuit}</span>
                                    </div>
                                    <span class="text-gray-400 text-sm">
                                        {race.date.format("%b %d, %Y").to_string()}
                                    </span>
                                </div>
                            }
                        }).collect_view()
                    }
                }}
            </div>
        </Card>
    }
}
