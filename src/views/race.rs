//! Race analytics: pit-stop totals and race statistics

use serde::{Deserialize, Serialize};

use crate::store::{Driver, Race};

use super::{ChartData, Palette, Series};

/// Sum of pit-stop durations up to the last recorded lap
///
/// Only stops whose lap is within the number of lap records count. Pit stops
/// are race-scoped, so there is no per-driver attribution.
pub fn total_pit_duration(race: Option<&Race>) -> f64 {
    match race {
        Some(race) => {
            let laps = race.lap_times.len();
            race.pit_stops
                .iter()
                .filter(|stop| stop.lap as usize <= laps)
                .map(|stop| stop.duration)
                .sum()
        }
        None => 0.0,
    }
}

/// Cumulative pit-stop duration bar for each driver
///
/// Every driver gets the same race-wide total.
pub fn pit_stop_totals(race: Option<&Race>, drivers: &[Driver], palette: &Palette) -> ChartData {
    let total = total_pit_duration(race);

    ChartData {
        labels: drivers.iter().map(|d| d.name.clone()).collect(),
        series: vec![Series {
            label: "Pit Stop Duration".to_string(),
            data: vec![total; drivers.len()],
            color: palette.primary.clone(),
        }],
    }
}

/// Key race indicators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceStats {
    pub total_laps: usize,
    pub total_pit_stops: usize,
    /// "Live" or "Completed"
    pub status: String,
    /// Circuit name or "N/A"
    pub circuit: String,
}

pub fn race_stats(race: Option<&Race>) -> RaceStats {
    RaceStats {
        total_laps: race.map_or(0, |r| r.lap_times.len()),
        total_pit_stops: race.map_or(0, |r| r.pit_stops.len()),
        status: if race.is_some_and(|r| r.is_live) {
            "Live"
        } else {
            "Completed"
        }
        .to_string(),
        circuit: race
            .map(|r| r.circuit.clone())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| "N/A".to_string()),
    }
}
