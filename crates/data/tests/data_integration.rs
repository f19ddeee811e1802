//! Integration tests for crowdpulse-data
//!
//! Exercises the ingest boundary end to end: raw JSON in, typed
//! observations out, with an in-memory observation source.

use chrono::{DateTime, TimeZone, Utc};
use data::{
    coerce_observations, parse_history, DensityPoint, FetchConfig, FetchConfigBuilder,
    ObservationSource, Result,
};
use series_spi::Observation;

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

#[test]
fn raw_history_json_becomes_observations() {
    let json = r#"[
        {"timestamp":"2026-03-14T09:00:00","density":0.41,"personCount":12},
        {"timestamp":"2026-03-14T09:00:30","density":0.44},
        {"timestamp":"oops","density":0.50},
        {"timestamp":"2026-03-14T09:01:00","density":1.44},
        {"timestamp":"2026-03-14T09:01:30","density":0.47}
    ]"#;

    let observations = parse_history(json).unwrap();

    // The malformed timestamp and the out-of-range density are dropped;
    // the rest survive in input order.
    assert_eq!(observations.len(), 3);
    assert_eq!(observations[0].density, 0.41);
    assert_eq!(observations[2].density, 0.47);
    assert!(observations[0].timestamp < observations[1].timestamp);
}

#[test]
fn whole_batch_failure_is_an_error_not_a_panic() {
    assert!(parse_history("{\"not\":\"an array\"}").is_err());
}

#[test]
fn boundary_values_are_kept() {
    let points = vec![
        DensityPoint {
            timestamp: "2026-03-14T09:00:00".to_string(),
            density: 0.0,
            person_count: None,
        },
        DensityPoint {
            timestamp: "2026-03-14T09:05:00".to_string(),
            density: 1.0,
            person_count: Some(400),
        },
    ];
    let observations = coerce_observations(&points);
    assert_eq!(observations.len(), 2);
}

/// Fixture source used by rendering-layer tests.
struct FixtureSource {
    samples: Vec<Observation>,
}

impl ObservationSource for FixtureSource {
    fn name(&self) -> &str {
        "fixture"
    }

    fn fetch_history_sync(
        &self,
        _camera_id: u64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Observation>> {
        Ok(self
            .samples
            .iter()
            .copied()
            .filter(|obs| obs.timestamp >= start && obs.timestamp < end)
            .collect())
    }
}

#[test]
fn observation_source_contract_with_fetch_config() {
    let source = FixtureSource {
        samples: (0..10)
            .map(|i| Observation::new(at(i * 60), 0.3 + 0.01 * i as f64))
            .collect(),
    };

    let config = FetchConfig::new(7, at(120), at(300));
    let fetched = source
        .fetch_history_sync(config.camera_id, config.start, config.end)
        .unwrap();

    assert_eq!(fetched.len(), 3);
    assert_eq!(fetched[0].timestamp, at(120));
}

#[test]
fn fetch_config_builder_round_trip() {
    let config = FetchConfigBuilder::new()
        .camera_id(9)
        .start(at(0))
        .end(at(3600))
        .build()
        .unwrap();

    assert_eq!(config.camera_id, 9);
    assert_eq!(config.end - config.start, chrono::Duration::hours(1));
}
