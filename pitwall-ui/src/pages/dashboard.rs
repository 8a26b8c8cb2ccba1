//! Dashboard Page
//!
//! Race overview: headline counters and lap time progression.

use leptos::*;

use pitwall::views::dashboard_summary;

use crate::components::{Card, Chart, ChartKind, ChartSkeleton, StatCard};
use crate::state::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let summary = create_memo(move |_| {
        let palette = state.palette.get();
        state.snapshot.with(|s| dashboard_summary(s, &palette))
    });
    let race_loading = create_memo(move |_| state.snapshot.with(|s| s.race.loading));

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Race Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Live timing and season overview"</p>
            </div>

            // Summary row
            <section class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <StatCard
                    label="Active Drivers"
                    icon="👤"
                    value=Signal::derive(move || summary.get().active_drivers.to_string())
                />
                <StatCard
                    label="Teams"
                    icon="🏎"
                    value=Signal::derive(move || summary.get().teams.to_string())
                />
                <StatCard
                    label="Current Race"
                    icon="🏁"
                    value=Signal::derive(move || summary.get().current_race)
                />
                <StatCard
                    label="Completed Laps"
                    icon="⏱"
                    value=Signal::derive(move || summary.get().completed_laps.to_string())
                />
            </section>

            // Lap time progression
            <Card title="Lap Time Progression" subtitle="Seconds per lap, current race">
                {move || {
                    if race_loading.get() {
                        view! { <ChartSkeleton /> }.into_view()
                    } else {
                        view! {
                            <Chart
                                kind=ChartKind::Line
                                data=Signal::derive(move || summary.get().lap_times)
                            />
                        }.into_view()
                    }
                }}
            </Card>
        </div>
    }
}
