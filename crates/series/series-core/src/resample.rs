//! Bucketed resampling and comparison alignment.

use chrono::Duration;
use series_spi::{Bucket, Observation, TimeWindow};

struct Accumulator {
    sum: f64,
    count: usize,
    min: f64,
    max: f64,
    peak: Observation,
}

impl Accumulator {
    fn seed(obs: Observation) -> Self {
        Self {
            sum: obs.density,
            count: 1,
            min: obs.density,
            max: obs.density,
            peak: obs,
        }
    }

    fn add(&mut self, obs: Observation) {
        self.sum += obs.density;
        self.count += 1;
        self.min = self.min.min(obs.density);
        self.max = self.max.max(obs.density);
        // Equal maxima resolve to the earlier timestamp.
        if obs.density > self.peak.density
            || (obs.density == self.peak.density && obs.timestamp < self.peak.timestamp)
        {
            self.peak = obs;
        }
    }

    fn into_bucket(self) -> Bucket {
        Bucket {
            average: self.sum / self.count as f64,
            min: self.min,
            max: self.max,
            sample_count: self.count,
            peak: Some(self.peak),
        }
    }
}

/// Resample irregular observations into the window's fixed bucket grid.
///
/// Observations outside `[start, end)` are silently discarded. Input
/// order does not matter and duplicate timestamps are tolerated. The
/// output always has exactly `window.bucket_count()` entries; a bucket
/// with no contributing samples is `None`.
pub fn resample(observations: &[Observation], window: &TimeWindow) -> Vec<Option<Bucket>> {
    let mut slots: Vec<Option<Accumulator>> = Vec::with_capacity(window.bucket_count());
    slots.resize_with(window.bucket_count(), || None);

    for obs in observations {
        let Some(index) = window.index_of(obs.timestamp) else {
            continue;
        };
        if let Some(acc) = slots[index].as_mut() {
            acc.add(*obs);
        } else {
            slots[index] = Some(Accumulator::seed(*obs));
        }
    }

    slots
        .into_iter()
        .map(|slot| slot.map(Accumulator::into_bucket))
        .collect()
}

/// Overlay a comparison period onto the primary window.
///
/// Every observation is shifted forward by `offset` before bucketing, so
/// a series whose raw timestamps are a day or a week earlier lands on the
/// same bucket indices as the primary series. An empty input yields an
/// all-`None` sequence of the primary window's length.
pub fn align_comparison(
    observations: &[Observation],
    primary_window: &TimeWindow,
    offset: Duration,
) -> Vec<Option<Bucket>> {
    let shifted: Vec<Observation> = observations.iter().map(|obs| obs.shifted(offset)).collect();
    resample(&shifted, primary_window)
}
