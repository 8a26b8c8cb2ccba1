//! Race slice
//!
//! Tracks the race currently on screen plus an append-only archive of
//! earlier races. Lap and pit-stop intents only ever touch the current race.

use serde::{Deserialize, Serialize};

use super::intent::RaceIntent;
use super::types::Race;

/// Race store slice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceState {
    pub current_race: Option<Race>,
    pub historical_races: Vec<Race>,
    pub loading: bool,
    pub error: Option<String>,
}

impl RaceState {
    pub(crate) fn reduce(&mut self, intent: RaceIntent) {
        match intent {
            RaceIntent::SetCurrentRace(race) => self.current_race = Some(race),
            RaceIntent::AddHistoricalRace(race) => self.historical_races.push(race),
            RaceIntent::UpdateLapTime(lap) => match self.current_race.as_mut() {
                Some(race) => race.lap_times.push(lap),
                None => tracing::debug!(lap = lap.lap, "lap time without current race ignored"),
            },
            RaceIntent::AddPitStop(stop) => match self.current_race.as_mut() {
                Some(race) => race.pit_stops.push(stop),
                None => tracing::debug!(lap = stop.lap, "pit stop without current race ignored"),
            },
            RaceIntent::SetLoading(loading) => self.loading = loading,
            RaceIntent::SetError(error) => self.error = error,
        }
    }
}
