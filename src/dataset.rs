//! Dataset and intent-log loading
//!
//! The store never fetches data itself. A shell reads a complete dataset
//! (or an intent log) and turns it into intents:
//!
//! ```json
//! {
//!   "drivers": [ ... ],
//!   "teams": [ ... ],
//!   "currentRace": { ... },
//!   "historicalRaces": [ ... ],
//!   "user": { ... }
//! }
//! ```
//!
//! Every section is optional. Records are assumed well-formed beyond what
//! JSON deserialization checks.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::store::{
    Driver, DriverIntent, Intent, Race, RaceIntent, Team, TeamIntent, User, UserIntent,
};

/// Errors while reading a dataset or intent log
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read {path:?}: {error}")]
    Io { path: PathBuf, error: std::io::Error },

    #[error("Failed to parse {what}: {error}")]
    Parse {
        what: String,
        error: serde_json::Error,
    },
}

pub type DatasetResult<T> = Result<T, DatasetError>;

/// A complete snapshot of the data feed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dataset {
    pub drivers: Option<Vec<Driver>>,
    pub teams: Option<Vec<Team>>,
    pub current_race: Option<Race>,
    pub historical_races: Vec<Race>,
    pub user: Option<User>,
}

impl Dataset {
    pub fn from_json(text: &str) -> DatasetResult<Self> {
        serde_json::from_str(text).map_err(|error| DatasetError::Parse {
            what: "dataset".to_string(),
            error,
        })
    }

    pub fn load(path: &Path) -> DatasetResult<Self> {
        let text = read(path)?;
        let dataset = serde_json::from_str::<Self>(&text).map_err(|error| DatasetError::Parse {
            what: path.display().to_string(),
            error,
        })?;

        tracing::info!(
            path = %path.display(),
            drivers = dataset.drivers.as_ref().map_or(0, Vec::len),
            teams = dataset.teams.as_ref().map_or(0, Vec::len),
            "Loaded dataset"
        );
        Ok(dataset)
    }

    /// Intents that populate an empty store with this dataset
    ///
    /// Sections that are absent produce no intent, so existing state for
    /// them is left alone.
    pub fn into_intents(self) -> Vec<Intent> {
        let mut intents = Vec::new();

        if let Some(drivers) = self.drivers {
            intents.push(DriverIntent::SetDrivers(drivers).into());
        }
        if let Some(teams) = self.teams {
            intents.push(TeamIntent::SetTeams(teams).into());
        }
        if let Some(race) = self.current_race {
            intents.push(RaceIntent::SetCurrentRace(race).into());
        }
        intents.extend(
            self.historical_races
                .into_iter()
                .map(|race| RaceIntent::AddHistoricalRace(race).into()),
        );
        if let Some(user) = self.user {
            intents.push(UserIntent::SetUser(Some(user)).into());
        }

        intents
    }
}

/// Parse an intent log (a JSON array of intents)
pub fn parse_intents(text: &str) -> DatasetResult<Vec<Intent>> {
    serde_json::from_str(text).map_err(|error| DatasetError::Parse {
        what: "intent log".to_string(),
        error,
    })
}

/// Read an intent log from disk
pub fn load_intents(path: &Path) -> DatasetResult<Vec<Intent>> {
    let text = read(path)?;
    let intents = parse_intents(&text)?;
    tracing::info!(path = %path.display(), count = intents.len(), "Loaded intent log");
    Ok(intents)
}

fn read(path: &Path) -> DatasetResult<String> {
    std::fs::read_to_string(path).map_err(|error| DatasetError::Io {
        path: path.to_path_buf(),
        error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use std::io::Write;

    const SAMPLE: &str = r##"{
        "drivers": [
            { "driverId": "ver", "name": "Max Verstappen", "number": 1, "team": "Red Bull Racing",
              "performance": { "points": 575, "wins": 19, "podiums": 21, "fastestLaps": 9,
                               "qualifyingRecord": { "q1": 22, "q2": 22, "q3": 21 } } }
        ],
        "teams": [
            { "teamId": "rbr", "name": "Red Bull Racing", "color": "#0600EF", "drivers": ["ver"],
              "performance": { "points": 860, "wins": 21, "podiums": 30, "fastestLaps": 11 } }
        ],
        "currentRace": {
            "raceId": "abu", "raceName": "Abu Dhabi Grand Prix", "circuit": "Yas Marina",
            "date": "2023-11-26", "lapTimes": [], "pitStops": [], "isLive": false
        },
        "user": { "id": "u1", "email": "fan@pitwall.dev", "username": "fan" }
    }"##;

    #[test]
    fn test_dataset_populates_store() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        let mut store = Store::new();
        store.dispatch_all(dataset.into_intents());

        let state = store.state();
        assert_eq!(state.driver.drivers[0].id, "ver");
        assert_eq!(state.team.teams[0].drivers, vec!["ver"]);
        assert_eq!(
            state.race.current_race.as_ref().map(|r| r.name.as_str()),
            Some("Abu Dhabi Grand Prix")
        );
        assert!(state.user.is_authenticated);
        assert_eq!(store.revision(), 4);
    }

    #[test]
    fn test_empty_dataset_has_no_intents() {
        let dataset = Dataset::from_json("{}").unwrap();
        assert!(dataset.into_intents().is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset.teams.unwrap().len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Dataset::load(Path::new("/nonexistent/pitwall.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[test]
    fn test_intent_log() {
        let intents = parse_intents(
            r#"[
                { "driver": { "type": "addToComparison", "payload": "ver" } },
                { "driver": { "type": "clearComparison" } },
                { "user": { "type": "logout" } }
            ]"#,
        )
        .unwrap();
        assert_eq!(intents.len(), 3);

        let err = parse_intents("[{").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse intent log"));
    }
}
