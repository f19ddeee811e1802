//! Bucket label generation.

use chrono::Duration;
use series_spi::TimeWindow;

/// One display label per bucket index, matching `resample` output 1:1.
///
/// Sub-day windows label bucket starts as `HH:mm`; longer windows use
/// `M/D`.
pub fn bucket_labels(window: &TimeWindow) -> Vec<String> {
    let sub_day = window.span() <= Duration::hours(24);
    (0..window.bucket_count())
        .map(|index| {
            let start = window.bucket_start(index);
            if sub_day {
                start.format("%H:%M").to_string()
            } else {
                start.format("%-m/%-d").to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_sub_day_labels_use_clock_time() {
        let start = Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 3, 14, 11, 0, 0).unwrap();
        let w = TimeWindow::new(start, end, Duration::minutes(30)).unwrap();

        let labels = bucket_labels(&w);
        assert_eq!(labels, vec!["09:00", "09:30", "10:00", "10:30"]);
    }

    #[test]
    fn test_multi_day_labels_use_dates() {
        let start = Utc.with_ymd_and_hms(2026, 3, 8, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 3, 11, 0, 0, 0).unwrap();
        let w = TimeWindow::new(start, end, Duration::days(1)).unwrap();

        let labels = bucket_labels(&w);
        assert_eq!(labels, vec!["3/8", "3/9", "3/10"]);
    }

    #[test]
    fn test_label_count_matches_bucket_count() {
        let start = Utc.with_ymd_and_hms(2026, 3, 14, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 3, 14, 2, 1, 0).unwrap();
        let w = TimeWindow::new(start, end, Duration::minutes(5)).unwrap();

        assert_eq!(bucket_labels(&w).len(), w.bucket_count());
    }

    #[test]
    fn test_exactly_24h_window_still_uses_clock_time() {
        let start = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap();
        let w = TimeWindow::new(start, end, Duration::hours(6)).unwrap();

        assert_eq!(bucket_labels(&w), vec!["12:00", "18:00", "00:00", "06:00"]);
    }
}
