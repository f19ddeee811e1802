//! Chart view construction.

use series_spi::{Bucket, ChartView, DisplayBand, Result, SeriesError, TimeWindow};

use crate::labels::bucket_labels;

/// Project a bucket sequence down to its averages, preserving gaps.
pub fn bucket_averages(buckets: &[Option<Bucket>]) -> Vec<Option<f64>> {
    buckets
        .iter()
        .map(|bucket| bucket.as_ref().map(|b| b.average))
        .collect()
}

/// Compose an immutable chart view from resampled series.
///
/// Labels are generated from the window, which guarantees the 1:1
/// label-to-bucket pairing. A comparison series must already be aligned
/// to the same window; a length mismatch is a caller bug and is rejected.
pub fn build_chart_view(
    window: &TimeWindow,
    primary: &[Option<Bucket>],
    comparison: Option<&[Option<Bucket>]>,
    band: Option<DisplayBand>,
) -> Result<ChartView> {
    let expected = window.bucket_count();
    if primary.len() != expected {
        return Err(SeriesError::LengthMismatch {
            expected,
            got: primary.len(),
        });
    }
    if let Some(series) = comparison {
        if series.len() != expected {
            return Err(SeriesError::LengthMismatch {
                expected,
                got: series.len(),
            });
        }
    }

    Ok(ChartView {
        labels: bucket_labels(window),
        primary: bucket_averages(primary),
        comparison: comparison.map(bucket_averages),
        band,
    })
}
