//! Ingest validation and coercion.

use chrono::{DateTime, NaiveDateTime, Utc};
use data_spi::{DataError, DensityPoint, Result};
use series_spi::Observation;

/// Parse an ISO-8601 timestamp, with or without a zone suffix.
///
/// The analytics backend emits local date-times without an offset
/// (`2026-03-14T09:30:00`); zoned RFC 3339 strings are accepted too and
/// normalized to UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = raw.parse::<DateTime<Utc>>() {
        return Some(ts);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Validate and coerce raw wire points into typed observations.
///
/// A point is dropped when its timestamp does not parse or its density is
/// not a finite number in `[0, 1]`. Dropping is per point; the surviving
/// points keep their input order.
pub fn coerce_observations(points: &[DensityPoint]) -> Vec<Observation> {
    let mut observations = Vec::with_capacity(points.len());
    let mut skipped = 0usize;

    for point in points {
        let Some(timestamp) = parse_timestamp(&point.timestamp) else {
            skipped += 1;
            continue;
        };
        if !point.density.is_finite() || !(0.0..=1.0).contains(&point.density) {
            skipped += 1;
            continue;
        }
        observations.push(Observation::new(timestamp, point.density));
    }

    if skipped > 0 {
        tracing::debug!(skipped, kept = observations.len(), "dropped unusable density points");
    }
    observations
}

/// Parse a density-history JSON array into observations.
///
/// A malformed array is an error; malformed individual points are
/// skipped per [`coerce_observations`].
pub fn parse_history(json: &str) -> Result<Vec<Observation>> {
    let points: Vec<DensityPoint> =
        serde_json::from_str(json).map_err(|e| DataError::ParseError(e.to_string()))?;
    Ok(coerce_observations(&points))
}
