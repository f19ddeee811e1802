//! Legacy gap-insertion rendering path.

use series_spi::Observation;

/// Insert line breaks where consecutive samples are too far apart.
///
/// Unlike [`resample`], this mode keeps the original sample cardinality:
/// the output is every input density in order, with one `None` inserted
/// before each sample whose distance to its predecessor exceeds
/// `gap_threshold_seconds`. Output length is input length plus the number
/// of detected gaps.
///
/// [`resample`]: crate::resample
pub fn insert_gaps(observations: &[Observation], gap_threshold_seconds: f64) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(observations.len());
    for (i, obs) in observations.iter().enumerate() {
        if i > 0 {
            let delta_ms = (obs.timestamp - observations[i - 1].timestamp).num_milliseconds();
            if delta_ms as f64 / 1000.0 > gap_threshold_seconds {
                out.push(None);
            }
        }
        out.push(Some(obs.density));
    }
    out
}
