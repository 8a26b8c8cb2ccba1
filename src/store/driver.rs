//! Driver slice
//!
//! Holds the driver collection, the single selection pointer and the
//! two-slot comparison set used by the comparison page.

use serde::{Deserialize, Serialize};

use super::intent::DriverIntent;
use super::types::{Driver, DriverPerformancePatch};

/// Maximum number of drivers compared side by side
pub const MAX_COMPARISON: usize = 2;

/// Progress of the comparison selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonPhase {
    Idle,
    OneSelected,
    TwoSelected,
}

/// Ordered set of at most two driver ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Comparison(Vec<String>);

impl Comparison {
    pub fn ids(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|c| c == id)
    }

    pub fn phase(&self) -> ComparisonPhase {
        match self.0.len() {
            0 => ComparisonPhase::Idle,
            1 => ComparisonPhase::OneSelected,
            _ => ComparisonPhase::TwoSelected,
        }
    }

    /// Add `id` unless it is already present or the set is full.
    /// Returns whether the set changed.
    pub fn add(&mut self, id: &str) -> bool {
        if self.contains(id) || self.0.len() >= MAX_COMPARISON {
            return false;
        }
        self.0.push(id.to_string());
        true
    }

    pub fn remove(&mut self, id: &str) {
        self.0.retain(|c| c != id);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Deselect `id` if selected, otherwise try to select it
    pub fn toggle(&mut self, id: &str) {
        if self.contains(id) {
            self.remove(id);
        } else {
            self.add(id);
        }
    }
}

/// Driver store slice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverState {
    pub drivers: Vec<Driver>,
    pub selected_driver: Option<String>,
    pub comparison_drivers: Comparison,
    pub loading: bool,
    pub error: Option<String>,
}

impl DriverState {
    /// First driver with the given id
    pub fn find(&self, id: &str) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Driver> {
        self.drivers.iter_mut().find(|d| d.id == id)
    }

    /// Drivers currently in the comparison set, in collection order
    pub fn compared(&self) -> Vec<&Driver> {
        self.drivers
            .iter()
            .filter(|d| self.comparison_drivers.contains(&d.id))
            .collect()
    }

    pub fn selected(&self) -> Option<&Driver> {
        self.selected_driver.as_deref().and_then(|id| self.find(id))
    }

    fn update_performance(&mut self, id: &str, patch: &DriverPerformancePatch) {
        match self.find_mut(id) {
            Some(driver) => driver.performance.apply(patch),
            None => tracing::debug!(driver = id, "performance update for unknown driver ignored"),
        }
    }

    fn remove(&mut self, id: &str) {
        self.drivers.retain(|d| d.id != id);
        if self.selected_driver.as_deref() == Some(id) {
            self.selected_driver = None;
        }
        self.comparison_drivers.remove(id);
    }

    pub(crate) fn reduce(&mut self, intent: DriverIntent) {
        match intent {
            DriverIntent::SetDrivers(drivers) => self.drivers = drivers,
            DriverIntent::AddDriver(driver) => self.drivers.push(driver),
            DriverIntent::RemoveDriver(id) => self.remove(&id),
            DriverIntent::SelectDriver(id) => self.selected_driver = Some(id),
            DriverIntent::UpdateDriverPerformance { id, performance } => {
                self.update_performance(&id, &performance)
            }
            DriverIntent::UpdateDriverTeam { id, team } => {
                if let Some(driver) = self.find_mut(&id) {
                    driver.team = team;
                }
            }
            DriverIntent::AddToComparison(id) => {
                if !self.comparison_drivers.add(&id) {
                    tracing::debug!(driver = %id, "comparison add ignored");
                }
            }
            DriverIntent::RemoveFromComparison(id) => self.comparison_drivers.remove(&id),
            DriverIntent::ToggleComparison(id) => self.comparison_drivers.toggle(&id),
            DriverIntent::ClearComparison => self.comparison_drivers.clear(),
            DriverIntent::SetLoading(loading) => self.loading = loading,
            DriverIntent::SetError(error) => self.error = error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::types::DriverPerformance;

    fn state_with(ids: &[&str]) -> DriverState {
        let mut state = DriverState::default();
        for (i, id) in ids.iter().enumerate() {
            state.reduce(DriverIntent::AddDriver(Driver::new(*id, id.to_uppercase(), i as u32)));
        }
        state
    }

    fn ids(state: &DriverState) -> Vec<&str> {
        state.drivers.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn test_add_and_remove_keep_append_order() {
        let mut state = state_with(&["ver", "ham", "lec", "nor"]);
        state.reduce(DriverIntent::RemoveDriver("ham".into()));
        state.reduce(DriverIntent::AddDriver(Driver::new("sai", "SAI", 55)));
        state.reduce(DriverIntent::RemoveDriver("nor".into()));

        assert_eq!(ids(&state), vec!["ver", "lec", "sai"]);
    }

    #[test]
    fn test_add_allows_duplicates_and_lookup_returns_first() {
        let mut state = state_with(&["ver"]);
        state.reduce(DriverIntent::AddDriver(Driver::new("ver", "Second", 33)));

        assert_eq!(state.drivers.len(), 2);
        assert_eq!(state.find("ver").unwrap().number, 0);

        // Removal filters every record with the id
        state.reduce(DriverIntent::RemoveDriver("ver".into()));
        assert!(state.drivers.is_empty());
    }

    #[test]
    fn test_remove_cascades_selection_and_comparison() {
        let mut state = state_with(&["ver", "ham", "lec"]);
        state.reduce(DriverIntent::SelectDriver("ham".into()));
        state.reduce(DriverIntent::AddToComparison("ham".into()));
        state.reduce(DriverIntent::AddToComparison("lec".into()));

        state.reduce(DriverIntent::RemoveDriver("ham".into()));

        assert_eq!(state.selected_driver, None);
        assert_eq!(state.comparison_drivers.ids(), ["lec".to_string()]);
    }

    #[test]
    fn test_remove_other_driver_keeps_selection() {
        let mut state = state_with(&["ver", "ham"]);
        state.reduce(DriverIntent::SelectDriver("ver".into()));
        state.reduce(DriverIntent::RemoveDriver("ham".into()));
        assert_eq!(state.selected_driver.as_deref(), Some("ver"));
    }

    #[test]
    fn test_comparison_caps_at_two() {
        let mut state = state_with(&["ver", "ham", "lec"]);
        for id in ["ver", "ham", "lec", "ver"] {
            state.reduce(DriverIntent::AddToComparison(id.into()));
            assert!(state.comparison_drivers.len() <= MAX_COMPARISON);
        }
        assert_eq!(
            state.comparison_drivers.ids(),
            ["ver".to_string(), "ham".to_string()]
        );
    }

    #[test]
    fn test_comparison_toggle_walks_phases() {
        let mut cmp = Comparison::default();
        assert_eq!(cmp.phase(), ComparisonPhase::Idle);

        cmp.toggle("ver");
        assert_eq!(cmp.phase(), ComparisonPhase::OneSelected);
        cmp.toggle("ham");
        assert_eq!(cmp.phase(), ComparisonPhase::TwoSelected);

        // Third candidate rejected
        cmp.toggle("lec");
        assert_eq!(cmp.ids(), ["ver".to_string(), "ham".to_string()]);

        // Re-toggling deselects
        cmp.toggle("ver");
        assert_eq!(cmp.phase(), ComparisonPhase::OneSelected);
        assert_eq!(cmp.ids(), ["ham".to_string()]);

        cmp.clear();
        assert_eq!(cmp.phase(), ComparisonPhase::Idle);
    }

    #[test]
    fn test_update_performance_unknown_id_is_noop() {
        let mut state = state_with(&["ver", "ham"]);
        let before = state.clone();

        state.reduce(DriverIntent::UpdateDriverPerformance {
            id: "nobody".into(),
            performance: DriverPerformancePatch {
                points: Some(1.0),
                ..Default::default()
            },
        });

        assert_eq!(state, before);
    }

    #[test]
    fn test_update_performance_merges_fields() {
        let mut state = DriverState::default();
        state.reduce(DriverIntent::SetDrivers(vec![Driver::new("ver", "Max", 1).performance(
            DriverPerformance {
                points: 100.0,
                wins: 4,
                podiums: 6,
                ..Default::default()
            },
        )]));

        state.reduce(DriverIntent::UpdateDriverPerformance {
            id: "ver".into(),
            performance: DriverPerformancePatch {
                points: Some(125.0),
                wins: Some(5),
                ..Default::default()
            },
        });

        let perf = &state.find("ver").unwrap().performance;
        assert_eq!(perf.points, 125.0);
        assert_eq!(perf.wins, 5);
        assert_eq!(perf.podiums, 6);
    }

    #[test]
    fn test_update_team_and_flags() {
        let mut state = state_with(&["sai"]);
        state.reduce(DriverIntent::UpdateDriverTeam {
            id: "sai".into(),
            team: "Williams".into(),
        });
        assert_eq!(state.find("sai").unwrap().team, "Williams");

        state.reduce(DriverIntent::SetError(Some("feed down".into())));
        state.reduce(DriverIntent::SetLoading(true));
        // Starting a load does not clear the error
        assert_eq!(state.error.as_deref(), Some("feed down"));
        assert!(state.loading);
    }
}
