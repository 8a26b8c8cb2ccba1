//! Driver comparison: statistics bars, attribute radar, head-to-head rows

use serde::{Deserialize, Serialize};

use crate::store::{Driver, DriverState};

use super::{ChartData, Palette, Series};

/// Axis labels of the statistics bar chart
pub const COMPARISON_LABELS: [&str; 5] =
    ["Points", "Wins", "Podiums", "Fastest Laps", "Q3 Appearances"];

/// Axis labels of the attribute radar
pub const RADAR_LABELS: [&str; 5] = ["Race Pace", "Qualifying", "Consistency", "Overtaking", "Defense"];

/// Raw counters compared per driver, in `COMPARISON_LABELS` order
fn comparison_values(driver: &Driver) -> Vec<f64> {
    let perf = &driver.performance;
    vec![
        perf.points,
        perf.wins as f64,
        perf.podiums as f64,
        perf.fastest_laps as f64,
        perf.qualifying_record.q3 as f64,
    ]
}

/// Radar attribute ratios, in `RADAR_LABELS` order
///
/// Consistency (points per win) maps 0/0 to 0 but keeps n/0 as infinity.
/// No other ratio is guarded.
pub fn radar_ratios(driver: &Driver) -> [f64; 5] {
    let perf = &driver.performance;
    let wins = perf.wins as f64;

    let consistency = perf.points / wins;
    let consistency = if consistency.is_nan() { 0.0 } else { consistency };

    [
        perf.points / 10.0,
        perf.qualifying_record.q3 as f64 / 5.0,
        consistency,
        perf.podiums as f64 / 2.0,
        perf.points / (wins + 1.0),
    ]
}

/// Statistics bars for the drivers in the comparison set
pub fn comparison_bars(state: &DriverState, palette: &Palette) -> ChartData {
    ChartData {
        labels: COMPARISON_LABELS.iter().map(|l| l.to_string()).collect(),
        series: state
            .compared()
            .into_iter()
            .map(|driver| Series {
                label: driver.name.clone(),
                data: comparison_values(driver),
                color: palette.primary.clone(),
            })
            .collect(),
    }
}

/// Attribute radar for the drivers in the comparison set
pub fn comparison_radar(state: &DriverState, palette: &Palette) -> ChartData {
    ChartData {
        labels: RADAR_LABELS.iter().map(|l| l.to_string()).collect(),
        series: state
            .compared()
            .into_iter()
            .map(|driver| Series {
                label: driver.name.clone(),
                data: radar_ratios(driver).to_vec(),
                color: palette.primary.clone(),
            })
            .collect(),
    }
}

/// Head-to-head statistics for one compared driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadToHeadRow {
    pub id: String,
    pub name: String,
    pub points: f64,
    pub wins: u32,
    pub podiums: u32,
    pub fastest_laps: u32,
    pub experience: u32,
}

pub fn head_to_head(state: &DriverState) -> Vec<HeadToHeadRow> {
    state
        .compared()
        .into_iter()
        .map(|d| HeadToHeadRow {
            id: d.id.clone(),
            name: d.name.clone(),
            points: d.performance.points,
            wins: d.performance.wins,
            podiums: d.performance.podiums,
            fastest_laps: d.performance.fastest_laps,
            experience: d.experience,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{DriverIntent, DriverPerformance, QualifyingRecord, RootState};

    fn driver(id: &str, points: f64, wins: u32, podiums: u32, q3: u32) -> Driver {
        Driver::new(id, id.to_uppercase(), 0).performance(DriverPerformance {
            points,
            wins,
            podiums,
            fastest_laps: 2,
            qualifying_record: QualifyingRecord { q1: 0, q2: 0, q3 },
            ..Default::default()
        })
    }

    #[test]
    fn test_radar_ratios() {
        let r = radar_ratios(&driver("ver", 100.0, 4, 8, 10));
        assert_eq!(r, [10.0, 2.0, 25.0, 4.0, 20.0]);
    }

    #[test]
    fn test_radar_consistency_zero_over_zero() {
        let r = radar_ratios(&driver("sar", 0.0, 0, 0, 0));
        assert_eq!(r[2], 0.0);
        assert_eq!(r[4], 0.0);
    }

    #[test]
    fn test_radar_consistency_keeps_infinity() {
        let r = radar_ratios(&driver("alo", 62.0, 0, 3, 5));
        assert!(r[2].is_infinite());
        assert_eq!(r[4], 62.0);
    }

    #[test]
    fn test_comparison_views_follow_collection_order() {
        let state = RootState::default()
            .reduce(DriverIntent::SetDrivers(vec![
                driver("ver", 100.0, 4, 8, 10),
                driver("ham", 50.0, 1, 3, 6),
                driver("lec", 70.0, 2, 5, 8),
            ]))
            .reduce(DriverIntent::AddToComparison("lec".into()))
            .reduce(DriverIntent::AddToComparison("ver".into()));

        let palette = Palette::default();
        let bars = comparison_bars(&state.driver, &palette);
        assert_eq!(bars.labels.len(), 5);
        assert_eq!(bars.series.len(), 2);
        assert_eq!(bars.series[0].label, "VER");
        assert_eq!(bars.series[0].data, vec![100.0, 4.0, 8.0, 2.0, 10.0]);

        let radar = comparison_radar(&state.driver, &palette);
        assert_eq!(radar.series[1].label, "LEC");

        let rows = head_to_head(&state.driver);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].points, 70.0);
    }

    #[test]
    fn test_empty_comparison_yields_no_series() {
        let state = DriverState::default();
        assert!(comparison_bars(&state, &Palette::default()).series.is_empty());
        assert!(head_to_head(&state).is_empty());
    }
}
