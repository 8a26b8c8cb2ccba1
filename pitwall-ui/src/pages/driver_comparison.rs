//! Driver Comparison Page
//!
//! Pick two drivers and compare their season statistics and attributes.
//! Charts appear only once two drivers are selected.

use leptos::*;

use pitwall::store::{ComparisonPhase, DriverIntent, MAX_COMPARISON};
use pitwall::views::{comparison_bars, comparison_radar, head_to_head};

use crate::components::{Button, ButtonVariant, Card, Chart, ChartKind, Loading};
use crate::state::GlobalState;

/// Driver comparison page component
#[component]
pub fn DriverComparison() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let phase = create_memo(move |_| state.snapshot.with(|s| s.driver.comparison_drivers.phase()));

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Driver Comparison"</h1>
                    <p class="text-gray-400 mt-1">
                        {move || match phase.get() {
                            ComparisonPhase::Idle => "Select two drivers to compare".to_string(),
                            ComparisonPhase::OneSelected => "Select one more driver".to_string(),
                            ComparisonPhase::TwoSelected => {
                                format!("Comparing {} drivers", MAX_COMPARISON)
                            }
                        }}
                    </p>
                </div>

                <Button
                    variant=ButtonVariant::Secondary
                    disabled=Signal::derive(move || phase.get() == ComparisonPhase::Idle)
                    on_click=move |_| state.dispatch(DriverIntent::ClearComparison)
                >
                    "Clear"
                </Button>
            </div>

            <DriverPicker />

            {move || {
                if phase.get() == ComparisonPhase::TwoSelected {
                    view! { <ComparisonCharts /> }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </div>
    }
}

/// Grid of driver toggles
#[component]
fn DriverPicker() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <Card title="Drivers">
            {move || {
                let (drivers, loading) = state.snapshot.with(|s| (s.driver.drivers.clone(), s.driver.loading));
                if loading {
                    return view! { <Loading /> }.into_view();
                }
                if drivers.is_empty() {
                    return view! {
                        <p class="text-gray-400 text-sm">"No drivers loaded"</p>
                    }.into_view();
                }

                view! {
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-3">
                        {drivers.into_iter().map(|driver| {
                            let id = driver.id.clone();
                            let selected = Signal::derive({
                                let id = id.clone();
                                move || state.snapshot.with(|s| s.driver.comparison_drivers.contains(&id))
                            });
                            view! {
                                <Button
                                    variant=ButtonVariant::Secondary
                                    active=selected
                                    on_click=move |_| state.dispatch(DriverIntent::ToggleComparison(id.clone()))
                                >
                                    <span class="font-bold mr-2">{driver.number}</span>
                                    <span>{driver.name}</span>
                                    <span class="block text-xs text-gray-400">{driver.team}</span>
                                </Button>
                            }
                        }).collect_view()}
                    </div>
                }.into_view()
            }}
        </Card>
    }
}

/// Bar, radar and head-to-head table for the two selected drivers
#[component]
fn ComparisonCharts() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let bars = create_memo(move |_| {
        let palette = state.palette.get();
        state.snapshot.with(|s| comparison_bars(&s.driver, &palette))
    });
    let radar = create_memo(move |_| {
        let palette = state.palette.get();
        state.snapshot.with(|s| comparison_radar(&s.driver, &palette))
    });
    let rows = create_memo(move |_| state.snapshot.with(|s| head_to_head(&s.driver)));

    view! {
        <div class="grid md:grid-cols-2 gap-8">
            <Card title="Performance Comparison">
                <Chart kind=ChartKind::Bar data=bars />
            </Card>
            <Card title="Driver Attributes">
                <Chart kind=ChartKind::Radar data=radar />
            </Card>
        </div>

        <Card title="Head to Head">
            <table class="w-full text-sm">
                <thead>
                    <tr class="text-left text-gray-400 border-b border-gray-700">
                        <th class="py-2">"Driver"</th>
                        <th class="py-2 text-right">"Points"</th>
                        <th class="py-2 text-right">"Wins"</th>
                        <th class="py-2 text-right">"Podiums"</th>
                        <th class="py-2 text-right">"Fastest Laps"</th>
                        <th class="py-2 text-right">"Experience"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || rows.get().into_iter().map(|row| view! {
                        <tr class="border-b border-gray-700 last:border-0">
                            <td class="py-2 font-medium">{row.name}</td>
                            <td class="py-2 text-right">{row.points}</td>
                            <td class="py-2 text-right">{row.wins}</td>
                            <td class="py-2 text-right">{row.podiums}</td>
                            <td class="py-2 text-right">{row.fastest_laps}</td>
                            <td class="py-2 text-right">{format!("{} years", row.experience)}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </Card>
    }
}
