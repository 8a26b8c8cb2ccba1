//! Intent vocabulary
//!
//! Every state change the dashboard can request, grouped by slice.
//!
//! # Wire format
//!
//! Intents are externally tagged by slice, and each slice intent is a
//! `{"type", "payload"}` pair:
//!
//! ```json
//! { "driver": { "type": "addToComparison", "payload": "ver" } }
//! { "race":   { "type": "addPitStop", "payload": { "lap": 12, "duration": 2.4, "tireCompound": "hard" } } }
//! { "user":   { "type": "toggleDarkMode" } }
//! ```

use serde::{Deserialize, Serialize};

use super::types::{
    Driver, DriverPerformancePatch, FavoriteDriver, FavoriteTeam, LapTime, PitStop, Race, Team,
    TeamPerformancePatch, User,
};

/// Driver slice intents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum DriverIntent {
    SetDrivers(Vec<Driver>),
    AddDriver(Driver),
    RemoveDriver(String),
    SelectDriver(String),
    UpdateDriverPerformance {
        #[serde(alias = "driverId")]
        id: String,
        performance: DriverPerformancePatch,
    },
    UpdateDriverTeam {
        #[serde(alias = "driverId")]
        id: String,
        team: String,
    },
    AddToComparison(String),
    RemoveFromComparison(String),
    ToggleComparison(String),
    ClearComparison,
    SetLoading(bool),
    SetError(Option<String>),
}

/// Team slice intents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum TeamIntent {
    SetTeams(Vec<Team>),
    AddTeam(Team),
    RemoveTeam(String),
    SelectTeam(String),
    UpdateTeamPerformance {
        #[serde(alias = "teamId")]
        id: String,
        performance: TeamPerformancePatch,
    },
    UpdateTeamDrivers {
        #[serde(alias = "teamId")]
        id: String,
        drivers: Vec<String>,
    },
    SetLoading(bool),
    SetError(Option<String>),
}

/// Race slice intents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum RaceIntent {
    SetCurrentRace(Race),
    AddHistoricalRace(Race),
    /// Append a lap record to the current race
    UpdateLapTime(LapTime),
    AddPitStop(PitStop),
    SetLoading(bool),
    SetError(Option<String>),
}

/// User slice intents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum UserIntent {
    SetUser(Option<User>),
    AddFavoriteDriver(FavoriteDriver),
    RemoveFavoriteDriver(String),
    AddFavoriteTeam(FavoriteTeam),
    RemoveFavoriteTeam(String),
    ToggleDarkMode,
    ToggleNotifications,
    Logout,
    SetLoading(bool),
    SetError(Option<String>),
}

/// A request to change store state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Driver(DriverIntent),
    Team(TeamIntent),
    Race(RaceIntent),
    User(UserIntent),
}

impl Intent {
    /// Slice the intent targets
    pub fn slice(&self) -> &'static str {
        match self {
            Intent::Driver(_) => "driver",
            Intent::Team(_) => "team",
            Intent::Race(_) => "race",
            Intent::User(_) => "user",
        }
    }

    /// Intent name as it appears in the `type` field
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Driver(i) => match i {
                DriverIntent::SetDrivers(_) => "setDrivers",
                DriverIntent::AddDriver(_) => "addDriver",
                DriverIntent::RemoveDriver(_) => "removeDriver",
                DriverIntent::SelectDriver(_) => "selectDriver",
                DriverIntent::UpdateDriverPerformance { .. } => "updateDriverPerformance",
                DriverIntent::UpdateDriverTeam { .. } => "updateDriverTeam",
                DriverIntent::AddToComparison(_) => "addToComparison",
                DriverIntent::RemoveFromComparison(_) => "removeFromComparison",
                DriverIntent::ToggleComparison(_) => "toggleComparison",
                DriverIntent::ClearComparison => "clearComparison",
                DriverIntent::SetLoading(_) => "setLoading",
                DriverIntent::SetError(_) => "setError",
            },
            Intent::Team(i) => match i {
                TeamIntent::SetTeams(_) => "setTeams",
                TeamIntent::AddTeam(_) => "addTeam",
                TeamIntent::RemoveTeam(_) => "removeTeam",
                TeamIntent::SelectTeam(_) => "selectTeam",
                TeamIntent::UpdateTeamPerformance { .. } => "updateTeamPerformance",
                TeamIntent::UpdateTeamDrivers { .. } => "updateTeamDrivers",
                TeamIntent::SetLoading(_) => "setLoading",
                TeamIntent::SetError(_) => "setError",
            },
            Intent::Race(i) => match i {
                RaceIntent::SetCurrentRace(_) => "setCurrentRace",
                RaceIntent::AddHistoricalRace(_) => "addHistoricalRace",
                RaceIntent::UpdateLapTime(_) => "updateLapTime",
                RaceIntent::AddPitStop(_) => "addPitStop",
                RaceIntent::SetLoading(_) => "setLoading",
                RaceIntent::SetError(_) => "setError",
            },
            Intent::User(i) => match i {
                UserIntent::SetUser(_) => "setUser",
                UserIntent::AddFavoriteDriver(_) => "addFavoriteDriver",
                UserIntent::RemoveFavoriteDriver(_) => "removeFavoriteDriver",
                UserIntent::AddFavoriteTeam(_) => "addFavoriteTeam",
                UserIntent::RemoveFavoriteTeam(_) => "removeFavoriteTeam",
                UserIntent::ToggleDarkMode => "toggleDarkMode",
                UserIntent::ToggleNotifications => "toggleNotifications",
                UserIntent::Logout => "logout",
                UserIntent::SetLoading(_) => "setLoading",
                UserIntent::SetError(_) => "setError",
            },
        }
    }
}

impl From<DriverIntent> for Intent {
    fn from(intent: DriverIntent) -> Self {
        Intent::Driver(intent)
    }
}

impl From<TeamIntent> for Intent {
    fn from(intent: TeamIntent) -> Self {
        Intent::Team(intent)
    }
}

impl From<RaceIntent> for Intent {
    fn from(intent: RaceIntent) -> Self {
        Intent::Race(intent)
    }
}

impl From<UserIntent> for Intent {
    fn from(intent: UserIntent) -> Self {
        Intent::User(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload_intent() {
        let json = r#"{ "driver": { "type": "addToComparison", "payload": "ver" } }"#;
        let intent: Intent = serde_json::from_str(json).unwrap();
        assert_eq!(intent, Intent::Driver(DriverIntent::AddToComparison("ver".into())));
        assert_eq!(intent.name(), "addToComparison");
        assert_eq!(intent.slice(), "driver");
    }

    #[test]
    fn test_parse_unit_intent() {
        let json = r#"{ "user": { "type": "toggleDarkMode" } }"#;
        let intent: Intent = serde_json::from_str(json).unwrap();
        assert_eq!(intent, Intent::User(UserIntent::ToggleDarkMode));
    }

    #[test]
    fn test_parse_partial_update_with_feed_alias() {
        let json = r#"{
            "driver": {
                "type": "updateDriverPerformance",
                "payload": { "driverId": "ham", "performance": { "wins": 2 } }
            }
        }"#;
        let intent: Intent = serde_json::from_str(json).unwrap();

        match intent {
            Intent::Driver(DriverIntent::UpdateDriverPerformance { id, performance }) => {
                assert_eq!(id, "ham");
                assert_eq!(performance.wins, Some(2));
                assert_eq!(performance.points, None);
            }
            other => panic!("unexpected intent: {:?}", other),
        }
    }

    #[test]
    fn test_serialized_form_matches_wire_format() {
        let intent: Intent = RaceIntent::AddPitStop(PitStop::new(12, 2.4, "hard")).into();
        let value = serde_json::to_value(&intent).unwrap();

        assert_eq!(value["race"]["type"], "addPitStop");
        assert_eq!(value["race"]["payload"]["tireCompound"], "hard");

        let back: Intent = serde_json::from_value(value).unwrap();
        assert_eq!(back, intent);
    }

    #[test]
    fn test_unknown_intent_is_rejected() {
        let json = r#"{ "driver": { "type": "promoteDriver", "payload": "ver" } }"#;
        assert!(serde_json::from_str::<Intent>(json).is_err());
    }
}
