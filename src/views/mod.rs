//! View Composer
//!
//! Pure derivations from a [`RootState`](crate::store::RootState) snapshot
//! to chart-ready series and summary numbers. Nothing here mutates the
//! store or keeps state between calls, so every function is safe to call
//! on every render.
//!
//! Numeric edge cases are not guarded unless noted: a malformed lap time
//! or a zero denominator shows up as `NaN`/infinity in the output.
//!
//! - **lap**: lap-time parsing and lap series
//! - **race**: pit-stop totals and race statistics
//! - **comparison**: head-to-head bar, radar and stat rows
//! - **team**: constructor standings and wins distribution
//! - **dashboard**: overview counters
//! - **profile**: signed-in user summary

pub mod comparison;
pub mod dashboard;
pub mod lap;
pub mod profile;
pub mod race;
pub mod team;

use serde::{Deserialize, Serialize};

pub use comparison::{
    comparison_bars, comparison_radar, head_to_head, radar_ratios, HeadToHeadRow,
    COMPARISON_LABELS, RADAR_LABELS,
};
pub use dashboard::{dashboard_summary, DashboardSummary};
pub use lap::{driver_lap_series, lap_labels, lap_progression, lap_time_to_seconds};
pub use profile::{profile_summary, ProfileSummary};
pub use race::{pit_stop_totals, race_stats, total_pit_duration, RaceStats};
pub use team::{constructor_standings, team_table, wins_distribution, TeamRow, WinsShare};

/// One data series in a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    #[serde(with = "non_finite::seq")]
    pub data: Vec<f64>,
    pub color: String,
}

/// Labelled chart data (x-axis labels plus one or more series)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

/// JSON form for numbers that may be NaN or infinite
///
/// serde_json writes every non-finite float as `null`, which loses the
/// difference between a malformed lap time and a zero denominator. These
/// helpers write them as the strings `"NaN"`, `"Infinity"` and
/// `"-Infinity"` and accept either form when reading.
pub mod non_finite {
    use serde::de::{self, Deserializer};
    use serde::ser::Serializer;
    use serde::{Deserialize, Serialize};

    struct Number(f64);

    impl Serialize for Number {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self.0 {
                v if v.is_nan() => serializer.serialize_str("NaN"),
                v if v == f64::INFINITY => serializer.serialize_str("Infinity"),
                v if v == f64::NEG_INFINITY => serializer.serialize_str("-Infinity"),
                v => serializer.serialize_f64(v),
            }
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Encoded {
        Plain(f64),
        Text(String),
    }

    impl Encoded {
        fn value<E: de::Error>(self) -> Result<f64, E> {
            match self {
                Encoded::Plain(v) => Ok(v),
                Encoded::Text(text) => match text.as_str() {
                    "NaN" => Ok(f64::NAN),
                    "Infinity" => Ok(f64::INFINITY),
                    "-Infinity" => Ok(f64::NEG_INFINITY),
                    other => Err(E::custom(format!("invalid number {:?}", other))),
                },
            }
        }
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        Number(*value).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Encoded::deserialize(deserializer)?.value()
    }

    /// Same encoding for every element of a sequence
    pub mod seq {
        use super::{Encoded, Number};
        use serde::de::Deserializer;
        use serde::ser::Serializer;
        use serde::Deserialize;

        pub fn serialize<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(values.iter().map(|v| Number(*v)))
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
            Vec::<Encoded>::deserialize(deserializer)?
                .into_iter()
                .map(Encoded::value)
                .collect()
        }
    }
}

/// Colors used when composing series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Fallback series color
    pub primary: String,
    /// Team name → series color for driver lines
    pub team_colors: Vec<(String, String)>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "#ef233c".to_string(),
            team_colors: vec![
                ("Red Bull Racing".to_string(), "#0600EF".to_string()),
                ("Mercedes".to_string(), "#00D2BE".to_string()),
                ("Ferrari".to_string(), "#DC0000".to_string()),
                ("McLaren".to_string(), "#FF8700".to_string()),
            ],
        }
    }
}

impl Palette {
    /// Line color for a driver on `team`, or the primary color
    pub fn team_color(&self, team: &str) -> &str {
        self.team_colors
            .iter()
            .find(|(name, _)| name == team)
            .map(|(_, color)| color.as_str())
            .unwrap_or(self.primary.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Driver, DriverPerformance};

    #[test]
    fn test_team_color_falls_back_to_primary() {
        let palette = Palette::default();
        assert_eq!(palette.team_color("Ferrari"), "#DC0000");
        assert_eq!(palette.team_color("Williams"), "#ef233c");
        // Exact, case-sensitive match
        assert_eq!(palette.team_color("ferrari"), "#ef233c");
    }

    #[test]
    fn test_radar_series_keeps_infinity_in_json() {
        // Points without a win: Consistency is n/0
        let driver = Driver::new("alo", "ALO", 14).performance(DriverPerformance {
            points: 62.0,
            ..Default::default()
        });
        let series = Series {
            label: driver.name.clone(),
            data: radar_ratios(&driver).to_vec(),
            color: "#ef233c".to_string(),
        };

        let json = serde_json::to_string(&series).unwrap();
        assert!(json.contains(r#""data":[6.2,0.0,"Infinity",0.0,62.0]"#));

        let back: Series = serde_json::from_str(&json).unwrap();
        assert_eq!(back, series);
    }

    #[test]
    fn test_series_json_tells_nan_from_infinity() {
        let series = Series {
            label: "Lap Times".to_string(),
            data: vec![lap_time_to_seconds("01:xx"), f64::NEG_INFINITY, 0.0],
            color: "#ef233c".to_string(),
        };

        let json = serde_json::to_string(&series).unwrap();
        assert!(json.contains(r#"["NaN","-Infinity",0.0]"#));

        let back: Series = serde_json::from_str(&json).unwrap();
        assert!(back.data[0].is_nan());
        assert_eq!(back.data[1], f64::NEG_INFINITY);
        assert_eq!(back.data[2], 0.0);

        let err = serde_json::from_str::<Series>(r##"{"label":"x","data":["fast"],"color":"#fff"}"##);
        assert!(err.is_err());
    }
}
