//! Team analytics

use serde::{Deserialize, Serialize};

use crate::store::Team;

use super::{ChartData, Series};

/// Constructor points, one bar per team in its own color
///
/// Returned as one single-value series per team so each bar keeps its color.
pub fn constructor_standings(teams: &[Team]) -> ChartData {
    ChartData {
        labels: teams.iter().map(|t| t.name.clone()).collect(),
        series: teams
            .iter()
            .map(|t| Series {
                label: t.name.clone(),
                data: vec![t.performance.points],
                color: t.color.clone(),
            })
            .collect(),
    }
}

/// One slice of the wins doughnut
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinsShare {
    pub name: String,
    pub wins: u32,
    pub color: String,
    /// Fraction of all wins; NaN when nobody has won yet
    #[serde(with = "super::non_finite")]
    pub share: f64,
}

pub fn wins_distribution(teams: &[Team]) -> Vec<WinsShare> {
    let total: u32 = teams.iter().map(|t| t.performance.wins).sum();

    teams
        .iter()
        .map(|t| WinsShare {
            name: t.name.clone(),
            wins: t.performance.wins,
            color: t.color.clone(),
            share: t.performance.wins as f64 / total as f64,
        })
        .collect()
}

/// Row of the team performance table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRow {
    pub id: String,
    pub name: String,
    pub color: String,
    pub points: f64,
    pub wins: u32,
    pub podiums: u32,
    pub fastest_laps: u32,
}

pub fn team_table(teams: &[Team]) -> Vec<TeamRow> {
    teams
        .iter()
        .map(|t| TeamRow {
            id: t.id.clone(),
            name: t.name.clone(),
            color: t.color.clone(),
            points: t.performance.points,
            wins: t.performance.wins,
            podiums: t.performance.podiums,
            fastest_laps: t.performance.fastest_laps,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TeamPerformance;

    fn teams() -> Vec<Team> {
        vec![
            Team::new("rbr", "Red Bull Racing", "#0600EF").performance(TeamPerformance {
                points: 860.0,
                wins: 21,
                podiums: 30,
                ..Default::default()
            }),
            Team::new("fer", "Ferrari", "#DC0000").performance(TeamPerformance {
                points: 406.0,
                wins: 1,
                podiums: 9,
                ..Default::default()
            }),
        ]
    }

    #[test]
    fn test_constructor_standings_keep_team_colors() {
        let chart = constructor_standings(&teams());
        assert_eq!(chart.labels, vec!["Red Bull Racing", "Ferrari"]);
        assert_eq!(chart.series[1].data, vec![406.0]);
        assert_eq!(chart.series[1].color, "#DC0000");
    }

    #[test]
    fn test_wins_distribution_shares() {
        let dist = wins_distribution(&teams());
        assert_eq!(dist[0].wins, 21);
        assert!((dist[0].share + dist[1].share - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_wins_distribution_without_wins_is_nan() {
        let dist = wins_distribution(&[Team::new("wil", "Williams", "#005AFF")]);
        assert!(dist[0].share.is_nan());

        let json = serde_json::to_string(&dist[0]).unwrap();
        assert!(json.contains(r#""share":"NaN""#));
        let back: WinsShare = serde_json::from_str(&json).unwrap();
        assert!(back.share.is_nan());
    }

    #[test]
    fn test_team_table_and_empty_input() {
        let rows = team_table(&teams());
        assert_eq!(rows[0].podiums, 30);
        assert!(team_table(&[]).is_empty());
        assert!(constructor_standings(&[]).series.is_empty());
    }
}
