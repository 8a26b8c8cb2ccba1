//! Team slice

use serde::{Deserialize, Serialize};

use super::intent::TeamIntent;
use super::types::Team;

/// Team store slice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamState {
    pub teams: Vec<Team>,
    pub selected_team: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl TeamState {
    pub fn find(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == id)
    }

    pub fn selected(&self) -> Option<&Team> {
        self.selected_team.as_deref().and_then(|id| self.find(id))
    }

    pub(crate) fn reduce(&mut self, intent: TeamIntent) {
        match intent {
            TeamIntent::SetTeams(teams) => self.teams = teams,
            TeamIntent::AddTeam(team) => self.teams.push(team),
            TeamIntent::RemoveTeam(id) => {
                self.teams.retain(|t| t.id != id);
                if self.selected_team.as_deref() == Some(id.as_str()) {
                    self.selected_team = None;
                }
            }
            TeamIntent::SelectTeam(id) => self.selected_team = Some(id),
            TeamIntent::UpdateTeamPerformance { id, performance } => match self.find_mut(&id) {
                Some(team) => team.performance.apply(&performance),
                None => tracing::debug!(team = %id, "performance update for unknown team ignored"),
            },
            TeamIntent::UpdateTeamDrivers { id, drivers } => {
                if let Some(team) = self.find_mut(&id) {
                    team.drivers = drivers;
                }
            }
            TeamIntent::SetLoading(loading) => self.loading = loading,
            TeamIntent::SetError(error) => self.error = error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::types::{TeamPerformance, TeamPerformancePatch};

    fn sample() -> TeamState {
        let mut state = TeamState::default();
        state.reduce(TeamIntent::SetTeams(vec![
            Team::new("rbr", "Red Bull Racing", "#0600EF").drivers(["ver", "per"]),
            Team::new("mer", "Mercedes", "#00D2BE").drivers(["ham", "rus"]),
        ]));
        state
    }

    #[test]
    fn test_remove_clears_selection() {
        let mut state = sample();
        state.reduce(TeamIntent::SelectTeam("mer".into()));
        state.reduce(TeamIntent::RemoveTeam("mer".into()));

        assert_eq!(state.teams.len(), 1);
        assert_eq!(state.selected_team, None);
    }

    #[test]
    fn test_update_performance_merges() {
        let mut state = sample();
        state.reduce(TeamIntent::UpdateTeamPerformance {
            id: "rbr".into(),
            performance: TeamPerformancePatch {
                wins: Some(21),
                ..Default::default()
            },
        });

        let perf = &state.find("rbr").unwrap().performance;
        assert_eq!(
            *perf,
            TeamPerformance {
                wins: 21,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let mut state = sample();
        let before = state.clone();

        state.reduce(TeamIntent::UpdateTeamDrivers {
            id: "fer".into(),
            drivers: vec!["lec".into()],
        });
        state.reduce(TeamIntent::RemoveTeam("fer".into()));

        assert_eq!(state, before);
    }

    #[test]
    fn test_update_drivers_replaces_list() {
        let mut state = sample();
        state.reduce(TeamIntent::UpdateTeamDrivers {
            id: "rbr".into(),
            drivers: vec!["ver".into(), "law".into()],
        });
        assert_eq!(state.find("rbr").unwrap().drivers, vec!["ver", "law"]);
    }
}
