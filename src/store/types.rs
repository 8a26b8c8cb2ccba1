//! Domain records for the Pitwall store
//!
//! Plain data shapes for the four entity kinds the dashboard tracks:
//! - `Driver` with `DriverPerformance` and its `QualifyingRecord`
//! - `Team` with `TeamPerformance`
//! - `Race` with its `LapTime` and `PitStop` sequences
//! - `User` with `UserPreferences`
//!
//! Partial updates are expressed with the `*Patch` structs: every field is
//! optional and only the fields that are present overwrite the target.
//!
//! Field names serialize in camelCase to match the dashboard's JSON feed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Qualifying session appearances (Q1/Q2/Q3)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QualifyingRecord {
    pub q1: u32,
    pub q2: u32,
    pub q3: u32,
}

/// Season performance counters for a driver
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DriverPerformance {
    pub points: f64,
    /// Championship position
    #[serde(default)]
    pub position: u32,
    pub wins: u32,
    pub podiums: u32,
    pub fastest_laps: u32,
    #[serde(default)]
    pub qualifying_record: QualifyingRecord,
}

/// Partial update for `DriverPerformance`
///
/// The merge is shallow: a present `qualifying_record` replaces the whole
/// record rather than merging q1/q2/q3 individually.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DriverPerformancePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wins: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub podiums: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fastest_laps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifying_record: Option<QualifyingRecord>,
}

impl DriverPerformance {
    /// Merge the present fields of `patch` into self
    pub fn apply(&mut self, patch: &DriverPerformancePatch) {
        if let Some(points) = patch.points {
            self.points = points;
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(wins) = patch.wins {
            self.wins = wins;
        }
        if let Some(podiums) = patch.podiums {
            self.podiums = podiums;
        }
        if let Some(fastest_laps) = patch.fastest_laps {
            self.fastest_laps = fastest_laps;
        }
        if let Some(record) = patch.qualifying_record {
            self.qualifying_record = record;
        }
    }
}

/// A driver entry
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    #[serde(alias = "driverId")]
    pub id: String,
    pub name: String,
    pub number: u32,
    /// Team name (free text, not a reference to `Team::id`)
    pub team: String,
    #[serde(default)]
    pub nationality: String,
    #[serde(default)]
    pub image: String,
    pub performance: DriverPerformance,
    #[serde(default)]
    pub age: u32,
    /// Seasons of experience
    #[serde(default)]
    pub experience: u32,
}

impl Driver {
    /// Create a driver with zeroed performance
    pub fn new(id: impl Into<String>, name: impl Into<String>, number: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            number,
            ..Default::default()
        }
    }

    /// Builder method: set team name
    pub fn team(mut self, team: impl Into<String>) -> Self {
        self.team = team.into();
        self
    }

    /// Builder method: set performance counters
    pub fn performance(mut self, performance: DriverPerformance) -> Self {
        self.performance = performance;
        self
    }

    /// Builder method: set age and years of experience
    pub fn career(mut self, age: u32, experience: u32) -> Self {
        self.age = age;
        self.experience = experience;
        self
    }
}

/// Season performance counters for a team
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamPerformance {
    pub points: f64,
    #[serde(default)]
    pub position: u32,
    pub wins: u32,
    pub podiums: u32,
    pub fastest_laps: u32,
}

/// Partial update for `TeamPerformance`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamPerformancePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wins: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub podiums: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fastest_laps: Option<u32>,
}

impl TeamPerformance {
    /// Merge the present fields of `patch` into self
    pub fn apply(&mut self, patch: &TeamPerformancePatch) {
        if let Some(points) = patch.points {
            self.points = points;
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(wins) = patch.wins {
            self.wins = wins;
        }
        if let Some(podiums) = patch.podiums {
            self.podiums = podiums;
        }
        if let Some(fastest_laps) = patch.fastest_laps {
            self.fastest_laps = fastest_laps;
        }
    }
}

/// A constructor entry
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(alias = "teamId")]
    pub id: String,
    pub name: String,
    /// Livery color as a CSS color string
    pub color: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub car_image: String,
    /// Driver ids (informal references, never cascaded)
    #[serde(default)]
    pub drivers: Vec<String>,
    pub performance: TeamPerformance,
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            ..Default::default()
        }
    }

    /// Builder method: set driver ids
    pub fn drivers<I, S>(mut self, drivers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.drivers = drivers.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method: set performance counters
    pub fn performance(mut self, performance: TeamPerformance) -> Self {
        self.performance = performance;
        self
    }
}

/// One recorded lap
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LapTime {
    pub lap: u32,
    /// Lap time as "mm:ss"
    pub time: String,
    /// Running position on this lap (1-based)
    pub position: u32,
}

impl LapTime {
    pub fn new(lap: u32, time: impl Into<String>, position: u32) -> Self {
        Self {
            lap,
            time: time.into(),
            position,
        }
    }
}

/// One pit stop, scoped to the race rather than a driver
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PitStop {
    pub lap: u32,
    /// Stationary time in seconds
    pub duration: f64,
    pub tire_compound: String,
}

impl PitStop {
    pub fn new(lap: u32, duration: f64, tire_compound: impl Into<String>) -> Self {
        Self {
            lap,
            duration,
            tire_compound: tire_compound.into(),
        }
    }
}

/// A race with its lap and pit-stop history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    #[serde(alias = "raceId")]
    pub id: String,
    #[serde(alias = "raceName")]
    pub name: String,
    pub circuit: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub lap_times: Vec<LapTime>,
    #[serde(default)]
    pub pit_stops: Vec<PitStop>,
    #[serde(default)]
    pub is_live: bool,
}

impl Race {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        circuit: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            circuit: circuit.into(),
            date,
            lap_times: Vec::new(),
            pit_stops: Vec::new(),
            is_live: false,
        }
    }

    /// Builder method: mark the race live
    pub fn live(mut self, is_live: bool) -> Self {
        self.is_live = is_live;
        self
    }

    /// Builder method: set lap records
    pub fn laps(mut self, laps: Vec<LapTime>) -> Self {
        self.lap_times = laps;
        self
    }

    /// Builder method: set pit stops
    pub fn pit_stops(mut self, stops: Vec<PitStop>) -> Self {
        self.pit_stops = stops;
        self
    }
}

/// A favorited driver, denormalized for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FavoriteDriver {
    #[serde(alias = "driverId")]
    pub id: String,
    pub name: String,
    pub team: String,
}

/// A favorited team, denormalized for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FavoriteTeam {
    #[serde(alias = "teamId")]
    pub id: String,
    pub name: String,
}

/// Per-user dashboard preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default)]
    pub favorite_drivers: Vec<FavoriteDriver>,
    #[serde(default)]
    pub favorite_teams: Vec<FavoriteTeam>,
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub notifications: bool,
}

/// An authenticated user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub preferences: UserPreferences,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            username: username.into(),
            preferences: UserPreferences::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_patch_is_shallow() {
        let mut perf = DriverPerformance {
            points: 100.0,
            wins: 3,
            qualifying_record: QualifyingRecord { q1: 5, q2: 4, q3: 3 },
            ..Default::default()
        };

        perf.apply(&DriverPerformancePatch {
            wins: Some(4),
            ..Default::default()
        });
        assert_eq!(perf.wins, 4);
        assert_eq!(perf.points, 100.0);
        assert_eq!(perf.qualifying_record.q3, 3);

        perf.apply(&DriverPerformancePatch {
            qualifying_record: Some(QualifyingRecord { q1: 0, q2: 0, q3: 9 }),
            ..Default::default()
        });
        assert_eq!(perf.qualifying_record, QualifyingRecord { q1: 0, q2: 0, q3: 9 });
    }

    #[test]
    fn test_team_patch_empty_is_noop() {
        let mut perf = TeamPerformance {
            points: 400.0,
            wins: 10,
            ..Default::default()
        };
        let before = perf.clone();
        perf.apply(&TeamPerformancePatch::default());
        assert_eq!(perf, before);
    }

    #[test]
    fn test_driver_deserializes_feed_shape() {
        let json = r#"{
            "driverId": "ver",
            "name": "Max Verstappen",
            "number": 1,
            "team": "Red Bull Racing",
            "nationality": "Dutch",
            "image": "",
            "performance": {
                "points": 575, "position": 1, "wins": 19, "podiums": 21,
                "fastestLaps": 9,
                "qualifyingRecord": { "q1": 22, "q2": 22, "q3": 21 }
            },
            "age": 26,
            "experience": 9
        }"#;

        let driver: Driver = serde_json::from_str(json).unwrap();
        assert_eq!(driver.id, "ver");
        assert_eq!(driver.performance.fastest_laps, 9);
        assert_eq!(driver.performance.qualifying_record.q3, 21);
    }

    #[test]
    fn test_race_deserializes_feed_shape() {
        let json = r#"{
            "raceId": "bhr",
            "raceName": "Bahrain Grand Prix",
            "circuit": "Sakhir",
            "date": "2024-03-02",
            "lapTimes": [{ "lap": 1, "time": "01:37", "position": 1 }],
            "pitStops": [{ "lap": 1, "duration": 2.4, "tireCompound": "hard" }],
            "isLive": true
        }"#;

        let race: Race = serde_json::from_str(json).unwrap();
        assert_eq!(race.name, "Bahrain Grand Prix");
        assert_eq!(race.date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        assert_eq!(race.pit_stops[0].tire_compound, "hard");
        assert!(race.is_live);
    }
}
