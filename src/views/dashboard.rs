//! Dashboard overview

use serde::{Deserialize, Serialize};

use crate::store::RootState;

use super::{lap_progression, ChartData, Palette};

/// Headline counters and the lap progression chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub active_drivers: usize,
    pub teams: usize,
    /// Current race name or "No active race"
    pub current_race: String,
    pub completed_laps: usize,
    pub lap_times: ChartData,
}

pub fn dashboard_summary(state: &RootState, palette: &Palette) -> DashboardSummary {
    let race = state.race.current_race.as_ref();

    DashboardSummary {
        active_drivers: state.driver.drivers.len(),
        teams: state.team.teams.len(),
        current_race: race
            .map(|r| r.name.clone())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "No active race".to_string()),
        completed_laps: race.map_or(0, |r| r.lap_times.len()),
        lap_times: lap_progression(race, palette),
    }
}
