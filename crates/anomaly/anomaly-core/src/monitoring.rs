//! Real-time monitoring implementation.

use anomaly_api::MonitorConfig;
use anomaly_spi::{Alert, AnomalyAssessor, AnomalyError, MonitoringStream, Result};
use chrono::{DateTime, Utc};

use super::alerting::create_alert;

/// Rolling monitor for streaming anomaly assessment.
///
/// Each pushed sample is assessed against the buffered history *before*
/// it joins the buffer, so a spike is judged by the normal run that
/// preceded it.
pub struct Monitor<A: AnomalyAssessor> {
    assessor: A,
    buffer: Vec<f64>,
    buffer_size: usize,
}

impl<A: AnomalyAssessor> Monitor<A> {
    /// Create a new monitor with the given assessor and buffer size.
    pub fn new(assessor: A, buffer_size: usize) -> Self {
        Self {
            assessor,
            buffer: Vec::with_capacity(buffer_size),
            buffer_size,
        }
    }

    /// Create from configuration.
    pub fn from_config(assessor: A, config: MonitorConfig) -> Self {
        Self::new(assessor, config.buffer_size)
    }

    /// Get the underlying assessor.
    pub fn assessor(&self) -> &A {
        &self.assessor
    }
}

impl<A: AnomalyAssessor> MonitoringStream<A> for Monitor<A> {
    fn push(&mut self, timestamp: DateTime<Utc>, density: f64) -> Result<Option<Alert>> {
        let alert = match self.assessor.assess(density, &self.buffer) {
            Ok(assessment) if assessment.is_anomalous => {
                Some(create_alert(timestamp, density, assessment.z_score))
            }
            Ok(_) => None,
            // Warm-up: not enough history buffered yet.
            Err(AnomalyError::InsufficientHistory { .. }) => None,
            Err(e) => return Err(e),
        };

        self.buffer.push(density);
        if self.buffer.len() > self.buffer_size {
            self.buffer.remove(0);
        }

        Ok(alert)
    }

    fn buffer(&self) -> &[f64] {
        &self.buffer
    }

    fn reset(&mut self) {
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{ZScoreAssessor, DANGER_Z};
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_no_alert_during_warmup() {
        let mut monitor = Monitor::new(ZScoreAssessor::new(10), 20);
        for i in 0..9 {
            let alert = monitor.push(at(i), 0.4).unwrap();
            assert!(alert.is_none());
        }
    }

    #[test]
    fn test_alert_on_spike_after_warmup() {
        let mut monitor = Monitor::new(ZScoreAssessor::new(10), 20);
        for i in 0..15 {
            monitor.push(at(i), 0.40 + 0.01 * (i % 3) as f64).unwrap();
        }

        let alert = monitor.push(at(15), 0.95).unwrap().expect("spike should alert");
        assert_eq!(alert.value, 0.95);
        assert!(alert.z_score > DANGER_Z);
    }

    #[test]
    fn test_buffer_is_bounded() {
        let mut monitor = Monitor::new(ZScoreAssessor::new(2), 5);
        for i in 0..12 {
            monitor.push(at(i), 0.4).unwrap();
        }
        assert_eq!(monitor.buffer().len(), 5);
    }

    #[test]
    fn test_reset_clears_history() {
        let mut monitor = Monitor::new(ZScoreAssessor::new(3), 10);
        for i in 0..5 {
            monitor.push(at(i), 0.4).unwrap();
        }
        monitor.reset();
        assert!(monitor.buffer().is_empty());
    }

    #[test]
    fn test_steady_stream_never_alerts() {
        let mut monitor = Monitor::new(ZScoreAssessor::new(5), 30);
        for i in 0..50 {
            let alert = monitor.push(at(i), 0.5).unwrap();
            assert!(alert.is_none());
        }
    }
}
