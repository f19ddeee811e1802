//! End-to-end tests for crowdpulse-series
//!
//! Tests complete alignment workflows using only this crate's API.

use chrono::{DateTime, Duration, TimeZone, Utc};
use series::{
    align_comparison, build_chart_view, resample, ComparisonOffset, Observation, Period,
};

fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 14, 0, 0).unwrap()
}

/// Samples every 90 seconds over the trailing two hours.
fn todays_samples(end: DateTime<Utc>) -> Vec<Observation> {
    (0..80)
        .map(|i| {
            let ts = end - Duration::seconds(90 * (80 - i));
            let density = 0.35 + 0.2 * ((i as f64) / 12.0).sin();
            Observation::new(ts, density)
        })
        .collect()
}

#[test]
fn e2e_period_to_chart_view_workflow() {
    let end = anchor();
    let window = Period::TwoHours.window_ending_at(end).unwrap();
    let today = todays_samples(end);

    let primary = resample(&today, &window);
    assert_eq!(primary.len(), 24);

    // Yesterday's raw samples live 24h in the past but overlay cleanly.
    let offset = ComparisonOffset::Yesterday;
    let yesterday: Vec<Observation> = todays_samples(end - offset.duration());
    let comparison = align_comparison(&yesterday, &window, offset.duration());
    assert_eq!(comparison.len(), primary.len());

    let view = build_chart_view(&window, &primary, Some(&comparison), None).unwrap();
    assert_eq!(view.labels.len(), 24);
    assert_eq!(view.labels[0], "12:00");
    assert_eq!(view.primary.len(), 24);

    // The two periods carry the same synthetic signal, so aligned indices
    // agree wherever both have data.
    let aligned = view.comparison.unwrap();
    for (p, c) in view.primary.iter().zip(aligned.iter()) {
        if let (Some(p), Some(c)) = (p, c) {
            assert!((p - c).abs() < 1e-9);
        }
    }
}

#[test]
fn e2e_week_period_uses_date_labels() {
    let end = anchor();
    let window = Period::Week.window_ending_at(end).unwrap();
    let primary = resample(&[], &window);

    let view = build_chart_view(&window, &primary, None, None).unwrap();
    assert_eq!(view.labels.len(), 168);
    assert_eq!(view.labels[0], "3/7");
    assert!(view.primary.iter().all(|v| v.is_none()));
}

#[test]
fn e2e_sparse_day_renders_gaps() {
    let end = anchor();
    let window = Period::Day.window_ending_at(end).unwrap();

    // Two isolated bursts of data in an otherwise silent day.
    let mut samples = Vec::new();
    for i in 0..5 {
        samples.push(Observation::new(
            window.start() + Duration::minutes(60 + i),
            0.4,
        ));
        samples.push(Observation::new(
            window.start() + Duration::minutes(900 + i),
            0.7,
        ));
    }

    let buckets = resample(&samples, &window);
    assert_eq!(buckets.len(), 288);

    let populated = buckets.iter().filter(|b| b.is_some()).count();
    assert_eq!(populated, 2);
    assert!(buckets[0].is_none());
}

#[test]
fn e2e_comparison_period_keywords() {
    let end = anchor();
    let window = Period::parse("24h").unwrap().window_ending_at(end).unwrap();

    let last_week = ComparisonOffset::parse("last-week").unwrap();
    let raw = vec![Observation::new(end - Duration::days(7) - Duration::hours(1), 0.55)];
    let aligned = align_comparison(&raw, &window, last_week.duration());

    assert_eq!(aligned.len(), window.bucket_count());
    let hit = aligned.iter().flatten().count();
    assert_eq!(hit, 1);
}
