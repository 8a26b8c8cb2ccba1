//! Team Analytics Page
//!
//! Constructor standings, wins distribution and the team table.

use leptos::*;

use pitwall::store::TeamIntent;
use pitwall::views::{constructor_standings, team_table, wins_distribution, ChartData, Series};

use crate::components::{Card, Chart, ChartKind, ChartSkeleton};
use crate::state::GlobalState;

/// Team analytics page component
#[component]
pub fn TeamAnalytics() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let standings = create_memo(move |_| state.snapshot.with(|s| constructor_standings(&s.team.teams)));
    let wins = create_memo(move |_| {
        state.snapshot.with(|s| {
            let shares = wins_distribution(&s.team.teams);
            ChartData {
                labels: vec!["Wins".to_string()],
                series: shares
                    .into_iter()
                    .map(|w| Series {
                        label: w.name,
                        data: vec![w.wins as f64],
                        color: w.color,
                    })
                    .collect(),
            }
        })
    });
    let loading = create_memo(move |_| state.snapshot.with(|s| s.team.loading));

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Team Analytics"</h1>
                <p class="text-gray-400 mt-1">"Constructor championship"</p>
            </div>

            <div class="grid md:grid-cols-2 gap-8">
                <Card title="Constructor Standings" subtitle="Points">
                    {move || {
                        if loading.get() {
                            view! { <ChartSkeleton /> }.into_view()
                        } else {
                            view! { <Chart kind=ChartKind::Bar data=standings /> }.into_view()
                        }
                    }}
                </Card>

                <Card title="Wins Distribution">
                    {move || {
                        if loading.get() {
                            view! { <ChartSkeleton /> }.into_view()
                        } else {
                            view! { <Chart kind=ChartKind::Doughnut data=wins /> }.into_view()
                        }
                    }}
                </Card>
            </div>

            <TeamTable />
            <SelectedTeam />
        </div>
    }
}

/// Team performance table; clicking a row selects the team
#[component]
fn TeamTable() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let rows = create_memo(move |_| {
        state.snapshot.with(|s| {
            let shares = wins_distribution(&s.team.teams);
            team_table(&s.team.teams)
                .into_iter()
                .zip(shares.into_iter().map(|w| w.share))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <Card title="Team Performance">
            <table class="w-full text-sm">
                <thead>
                    <tr class="text-left text-gray-400 border-b border-gray-700">
                        <th class="py-2">"Team"</th>
                        <th class="py-2 text-right">"Points"</th>
                        <th class="py-2 text-right">"Wins"</th>
                        <th class="py-2 text-right">"Podiums"</th>
                        <th class="py-2 text-right">"Win Share"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || rows.get().into_iter().map(|(row, share)| {
                        let id = row.id.clone();
                        let share = if share.is_finite() {
                            format!("{:.1}%", share * 100.0)
                        } else {
                            "n/a".to_string()
                        };
                        view! {
                            <tr
                                on:click=move |_| state.dispatch(TeamIntent::SelectTeam(id.clone()))
                                class="border-b border-gray-700 last:border-0 cursor-pointer hover:bg-gray-700"
                            >
                                <td class="py-2 font-medium">
                                    <span
                                        class="inline-block w-3 h-3 rounded-full mr-2"
                                        style=format!("background-color: {}", row.color)
                                    />
                                    {row.name}
                                </td>
                                <td class="py-2 text-right">{row.points}</td>
                                <td class="py-2 text-right">{row.wins}</td>
                                <td class="py-2 text-right">{row.podiums}</td>
                                <td class="py-2 text-right">{share}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </Card>
    }
}

/// Line-up of the selected team
#[component]
fn SelectedTeam() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let selected = create_memo(move |_| {
        state.snapshot.with(|s| {
            s.team.selected().map(|team| {
                let drivers: Vec<String> = team
                    .drivers
                    .iter()
                    .map(|id| {
                        s.driver
                            .find(id)
                            .map(|d| format!("#{} {}", d.number, d.name))
                            .unwrap_or_else(|| id.clone())
                    })
                    .collect();
                (team.name.clone(), drivers)
            })
        })
    });

    move || {
        selected.get().map(|(name, drivers)| view! {
            <Card title=name subtitle="Drivers">
                <ul class="space-y-1">
                    {drivers.into_iter().map(|d| view! { <li>{d}</li> }).collect_view()}
                </ul>
            </Card>
        })
    }
}
