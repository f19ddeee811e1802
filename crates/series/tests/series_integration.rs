//! Integration tests for crowdpulse-series
//!
//! Exercises the gap-insertion mode, window validation, and the render
//! adapter contract against an in-memory backend.

use chrono::{DateTime, Duration, TimeZone, Utc};
use series::{
    build_chart_view, insert_gaps, resample, ChartView, GapConfig, Observation, Period,
    RenderAdapter, Result, SeriesError, TimeWindow,
};

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

fn obs(secs: i64, density: f64) -> Observation {
    Observation::new(at(secs), density)
}

#[test]
fn gap_mode_preserves_sample_cardinality() {
    let config = GapConfig::default();
    let samples = [obs(0, 0.2), obs(130, 0.3)];

    let values = insert_gaps(&samples, config.threshold_seconds);
    assert_eq!(values, vec![Some(0.2), None, Some(0.3)]);
}

#[test]
fn gap_mode_and_bucket_mode_differ_in_cardinality() {
    let samples = [obs(0, 0.2), obs(130, 0.3), obs(150, 0.4)];

    // Gap mode: one entry per sample plus inserted breaks.
    let gapped = insert_gaps(&samples, 120.0);
    assert_eq!(gapped.len(), 4);

    // Bucket mode: fixed cardinality from the grid, whatever the input.
    let window = TimeWindow::new(at(0), at(600), Duration::minutes(1)).unwrap();
    let buckets = resample(&samples, &window);
    assert_eq!(buckets.len(), 10);
}

#[test]
fn invalid_windows_fail_fast() {
    assert!(TimeWindow::new(at(100), at(100), Duration::minutes(5)).is_err());
    assert!(TimeWindow::new(at(100), at(0), Duration::minutes(5)).is_err());
    assert!(TimeWindow::new(at(0), at(100), Duration::zero()).is_err());
}

#[test]
fn period_rejects_unknown_keyword_with_context() {
    let err = Period::parse("30d").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("period"));
    assert!(message.contains("30d"));
}

/// Minimal recording backend for the adapter lifecycle.
#[derive(Default)]
struct RecordingBackend {
    created: usize,
    updated: usize,
    destroyed: usize,
}

struct Surface {
    points: usize,
}

impl RenderAdapter for RecordingBackend {
    type Handle = Surface;

    fn create(&mut self, view: &ChartView) -> Result<Surface> {
        if view.labels.len() != view.primary.len() {
            return Err(SeriesError::LengthMismatch {
                expected: view.labels.len(),
                got: view.primary.len(),
            });
        }
        self.created += 1;
        Ok(Surface { points: view.primary.len() })
    }

    fn update(&mut self, handle: &mut Surface, view: &ChartView) -> Result<()> {
        self.updated += 1;
        handle.points = view.primary.len();
        Ok(())
    }

    fn destroy(&mut self, _handle: Surface) {
        self.destroyed += 1;
    }
}

#[test]
fn adapter_lifecycle_runs_against_core_views() {
    let window = TimeWindow::new(at(0), at(3600), Duration::minutes(5)).unwrap();
    let first = build_chart_view(&window, &resample(&[obs(10, 0.4)], &window), None, None).unwrap();
    let second =
        build_chart_view(&window, &resample(&[obs(10, 0.4), obs(700, 0.6)], &window), None, None)
            .unwrap();

    let mut backend = RecordingBackend::default();
    let mut handle = backend.create(&first).unwrap();
    assert_eq!(handle.points, 12);

    backend.update(&mut handle, &second).unwrap();
    backend.destroy(handle);

    assert_eq!(backend.created, 1);
    assert_eq!(backend.updated, 1);
    assert_eq!(backend.destroyed, 1);
}

#[test]
fn chart_view_serializes_gaps_as_nulls() {
    let window = TimeWindow::new(at(0), at(900), Duration::minutes(5)).unwrap();
    let view = build_chart_view(&window, &resample(&[obs(30, 0.5)], &window), None, None).unwrap();

    let json = serde_json::to_value(&view).unwrap();
    let primary = json["primary"].as_array().unwrap();
    assert_eq!(primary[0], 0.5);
    assert!(primary[1].is_null());
}
