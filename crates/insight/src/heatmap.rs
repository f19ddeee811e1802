//! Weekly congestion heatmap aggregation.

use chrono::{Datelike, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use series_spi::Observation;

/// One weekday row of the congestion heatmap.
///
/// Hours with no samples hold 0.0 in both vectors; the heatmap renders a
/// cold cell there, unlike the bucketed series where an empty slot is a
/// gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapRow {
    /// Short weekday label ("Mon".."Sun").
    pub weekday: String,
    /// 1 = Monday .. 7 = Sunday.
    pub weekday_index: u32,
    /// 24 entries, one per hour of day.
    pub hourly_average: Vec<f64>,
    /// 24 entries, one per hour of day.
    pub hourly_max: Vec<f64>,
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Aggregate observations into a 7x24 weekday/hour heatmap.
///
/// The output always has 7 rows (Monday first) of 24 hourly cells,
/// regardless of input coverage.
pub fn weekly_heatmap(observations: &[Observation]) -> Vec<HeatmapRow> {
    let mut sums = [[0.0f64; 24]; 7];
    let mut counts = [[0usize; 24]; 7];
    let mut maxima = [[0.0f64; 24]; 7];

    for obs in observations {
        let day = obs.timestamp.weekday().num_days_from_monday() as usize;
        let hour = obs.timestamp.hour() as usize;
        sums[day][hour] += obs.density;
        counts[day][hour] += 1;
        if obs.density > maxima[day][hour] {
            maxima[day][hour] = obs.density;
        }
    }

    WEEKDAYS
        .iter()
        .enumerate()
        .map(|(d, &weekday)| {
            let hourly_average = (0..24)
                .map(|h| {
                    if counts[d][h] > 0 {
                        sums[d][h] / counts[d][h] as f64
                    } else {
                        0.0
                    }
                })
                .collect();
            let hourly_max = maxima[d].to_vec();

            HeatmapRow {
                weekday: weekday.to_string(),
                weekday_index: d as u32 + 1,
                hourly_average,
                hourly_max,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_shape_is_always_7_by_24() {
        let rows = weekly_heatmap(&[]);
        assert_eq!(rows.len(), 7);
        for row in &rows {
            assert_eq!(row.hourly_average.len(), 24);
            assert_eq!(row.hourly_max.len(), 24);
        }
        assert_eq!(rows[0].weekday, "Mon");
        assert_eq!(rows[0].weekday_index, 1);
        assert_eq!(rows[6].weekday, "Sun");
        assert_eq!(rows[6].weekday_index, 7);
    }

    #[test]
    fn test_cells_aggregate_average_and_max() {
        // 2026-03-09 is a Monday.
        let monday_9am_1 = Utc.with_ymd_and_hms(2026, 3, 9, 9, 5, 0).unwrap();
        let monday_9am_2 = Utc.with_ymd_and_hms(2026, 3, 9, 9, 40, 0).unwrap();
        let obs = [
            Observation::new(monday_9am_1, 0.2),
            Observation::new(monday_9am_2, 0.6),
        ];

        let rows = weekly_heatmap(&obs);
        let monday = &rows[0];
        assert!((monday.hourly_average[9] - 0.4).abs() < 1e-12);
        assert_eq!(monday.hourly_max[9], 0.6);
    }

    #[test]
    fn test_empty_cells_are_zero() {
        let monday = Utc.with_ymd_and_hms(2026, 3, 9, 9, 0, 0).unwrap();
        let rows = weekly_heatmap(&[Observation::new(monday, 0.5)]);

        assert_eq!(rows[0].hourly_average[8], 0.0);
        assert_eq!(rows[1].hourly_average[9], 0.0);
    }

    #[test]
    fn test_days_split_correctly() {
        let monday = Utc.with_ymd_and_hms(2026, 3, 9, 12, 0, 0).unwrap();
        let sunday = Utc.with_ymd_and_hms(2026, 3, 8, 12, 0, 0).unwrap();
        let rows = weekly_heatmap(&[
            Observation::new(monday, 0.3),
            Observation::new(sunday, 0.7),
        ]);

        assert_eq!(rows[0].hourly_average[12], 0.3);
        assert_eq!(rows[6].hourly_average[12], 0.7);
    }
}
