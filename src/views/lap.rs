//! Lap-time series

use crate::store::{Driver, Race};

use super::{ChartData, Palette, Series};

/// Convert a "mm:ss" lap time to seconds
///
/// Splits on ':' and reads the first two parts as numbers. Anything that
/// does not parse yields `NaN` instead of an error; an empty part reads
/// as zero. Parts after the second are ignored.
///
/// A part accepts decimal literals (sign, fraction and exponent), the
/// exact spelling `Infinity` and unsigned `0x`/`0o`/`0b` integers. Other
/// spellings such as `inf` or `nan` are not numbers here.
pub fn lap_time_to_seconds(time: &str) -> f64 {
    let mut parts = time.split(':');
    let minutes = parse_part(parts.next());
    let seconds = parse_part(parts.next());
    minutes * 60.0 + seconds
}

fn parse_part(part: Option<&str>) -> f64 {
    match part.map(str::trim) {
        None => f64::NAN,
        Some("") => 0.0,
        Some(text) => parse_number(text),
    }
}

fn parse_number(text: &str) -> f64 {
    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        let lower = text.get(..2).map(str::to_ascii_lowercase);
        if lower.as_deref() == Some(prefix) {
            return parse_radix(&text[2..], radix);
        }
    }

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, text.strip_prefix('+').unwrap_or(text)),
    };

    if unsigned == "Infinity" {
        return sign * f64::INFINITY;
    }

    let decimal = !unsigned.starts_with(|c| c == '+' || c == '-')
        && unsigned
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !decimal {
        return f64::NAN;
    }

    unsigned
        .parse::<f64>()
        .map(|v| sign * v)
        .unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0, |acc, c| c.to_digit(radix).map(|d| acc * radix as f64 + d as f64))
        .unwrap_or(f64::NAN)
}

/// "Lap N" label for every lap record of the race
pub fn lap_labels(race: Option<&Race>) -> Vec<String> {
    race.map(|r| r.lap_times.iter().map(|l| format!("Lap {}", l.lap)).collect())
        .unwrap_or_default()
}

/// Lap time progression over every lap record (dashboard chart)
pub fn lap_progression(race: Option<&Race>, palette: &Palette) -> ChartData {
    let data: Vec<f64> = race
        .map(|r| r.lap_times.iter().map(|l| lap_time_to_seconds(&l.time)).collect())
        .unwrap_or_default();

    ChartData {
        labels: lap_labels(race),
        series: vec![Series {
            label: "Lap Times".to_string(),
            data,
            color: palette.primary.clone(),
        }],
    }
}

/// One lap-time series per driver
///
/// A lap is attributed to a driver when its running position equals the
/// driver's 1-based index in `drivers` (the index of the first record with
/// that id). Reordering `drivers` changes the attribution.
pub fn driver_lap_series(race: Option<&Race>, drivers: &[Driver], palette: &Palette) -> ChartData {
    let series = drivers
        .iter()
        .map(|driver| {
            let slot = drivers
                .iter()
                .position(|d| d.id == driver.id)
                .map(|i| i as u32 + 1);

            let data = match race {
                Some(race) => race
                    .lap_times
                    .iter()
                    .filter(|lap| Some(lap.position) == slot)
                    .map(|lap| lap_time_to_seconds(&lap.time))
                    .collect(),
                None => Vec::new(),
            };

            Series {
                label: driver.name.clone(),
                data,
                color: palette.team_color(&driver.team).to_string(),
            }
        })
        .collect();

    ChartData {
        labels: lap_labels(race),
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::LapTime;
    use chrono::NaiveDate;

    fn race(laps: &[(u32, &str, u32)]) -> Race {
        Race::new("bhr", "Bahrain", "Sakhir", NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()).laps(
            laps.iter()
                .map(|(lap, time, pos)| LapTime::new(*lap, *time, *pos))
                .collect(),
        )
    }

    #[test]
    fn test_lap_time_to_seconds() {
        assert_eq!(lap_time_to_seconds("01:23"), 83.0);
        assert_eq!(lap_time_to_seconds("00:05"), 5.0);
        assert_eq!(lap_time_to_seconds("1:32.5"), 92.5);
        assert!(lap_time_to_seconds("abc").is_nan());
        assert!(lap_time_to_seconds("01:xx").is_nan());
    }

    #[test]
    fn test_lap_time_edge_cases() {
        assert_eq!(lap_time_to_seconds(":30"), 30.0);
        assert_eq!(lap_time_to_seconds("01:30:99"), 90.0);
        assert!(lap_time_to_seconds("").is_nan());
    }

    #[test]
    fn test_lap_time_numeric_spellings() {
        assert_eq!(lap_time_to_seconds("0x1:00"), 60.0);
        assert_eq!(lap_time_to_seconds("0b10:0o7"), 127.0);
        assert_eq!(lap_time_to_seconds(" 1 : 2e1 "), 80.0);
        assert_eq!(lap_time_to_seconds("+1:.5"), 60.5);
        assert_eq!(lap_time_to_seconds("Infinity:00"), f64::INFINITY);
        assert_eq!(lap_time_to_seconds("-Infinity:00"), f64::NEG_INFINITY);

        assert!(lap_time_to_seconds("inf:00").is_nan());
        assert!(lap_time_to_seconds("01:infinity").is_nan());
        assert!(lap_time_to_seconds("nan:00").is_nan());
        assert!(lap_time_to_seconds("-0x1:00").is_nan());
        assert!(lap_time_to_seconds("0x:00").is_nan());
        assert!(lap_time_to_seconds("+-1:00").is_nan());
        assert!(lap_time_to_seconds("01:.").is_nan());
    }

    #[test]
    fn test_labels_and_progression() {
        let r = race(&[(1, "01:40", 1), (2, "01:38", 1)]);
        let chart = lap_progression(Some(&r), &Palette::default());

        assert_eq!(chart.labels, vec!["Lap 1", "Lap 2"]);
        assert_eq!(chart.series[0].data, vec![100.0, 98.0]);

        let empty = lap_progression(None, &Palette::default());
        assert!(empty.labels.is_empty());
        assert!(empty.series[0].data.is_empty());
    }

    #[test]
    fn test_driver_series_uses_position_index() {
        let drivers = vec![
            Driver::new("ver", "Max", 1).team("Red Bull Racing"),
            Driver::new("lec", "Charles", 16).team("Ferrari"),
            Driver::new("alb", "Alex", 23).team("Williams"),
        ];
        let r = race(&[(1, "01:40", 1), (1, "01:41", 2), (2, "01:39", 1), (2, "01:42", 3)]);

        let chart = driver_lap_series(Some(&r), &drivers, &Palette::default());

        assert_eq!(chart.series.len(), 3);
        assert_eq!(chart.series[0].data, vec![100.0, 99.0]);
        assert_eq!(chart.series[0].color, "#0600EF");
        assert_eq!(chart.series[1].data, vec![101.0]);
        assert_eq!(chart.series[2].data, vec![102.0]);
        assert_eq!(chart.series[2].color, "#ef233c");
    }

    #[test]
    fn test_driver_series_follows_collection_order() {
        let r = race(&[(1, "01:40", 1), (1, "01:41", 2)]);
        let forward = vec![Driver::new("a", "A", 1), Driver::new("b", "B", 2)];
        let reversed = vec![Driver::new("b", "B", 2), Driver::new("a", "A", 1)];

        let f = driver_lap_series(Some(&r), &forward, &Palette::default());
        let rv = driver_lap_series(Some(&r), &reversed, &Palette::default());

        assert_eq!(f.series[0].label, "A");
        assert_eq!(f.series[0].data, vec![100.0]);
        assert_eq!(rv.series[0].label, "B");
        assert_eq!(rv.series[0].data, vec![100.0]);
    }

    #[test]
    fn test_duplicate_ids_share_first_slot() {
        let r = race(&[(1, "01:40", 1), (1, "01:41", 2)]);
        let drivers = vec![Driver::new("a", "A", 1), Driver::new("a", "A again", 1)];

        let chart = driver_lap_series(Some(&r), &drivers, &Palette::default());
        assert_eq!(chart.series[1].data, vec![100.0]);
    }

    #[test]
    fn test_driver_series_without_race() {
        let drivers = vec![Driver::new("a", "A", 1)];
        let chart = driver_lap_series(None, &drivers, &Palette::default());
        assert_eq!(chart.series.len(), 1);
        assert!(chart.series[0].data.is_empty());
    }
}
