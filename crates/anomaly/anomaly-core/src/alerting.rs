//! Alert construction.

use anomaly_spi::{Alert, AnomalySeverity};
use chrono::{DateTime, Utc};

use crate::scoring::severity_for;

/// Create an alert for an anomalous observation.
pub fn create_alert(timestamp: DateTime<Utc>, value: f64, z_score: f64) -> Alert {
    let severity = severity_for(z_score);
    let message = format!(
        "Density anomaly: value={:.4}, z-score={:.4}",
        value, z_score
    );

    Alert {
        timestamp,
        value,
        z_score,
        severity,
        message,
    }
}

/// Alert builder for custom alert creation.
#[derive(Debug, Clone)]
pub struct AlertBuilder {
    timestamp: DateTime<Utc>,
    value: f64,
    z_score: f64,
    severity: Option<AnomalySeverity>,
    message: Option<String>,
}

impl AlertBuilder {
    /// Create a new alert builder.
    pub fn new(timestamp: DateTime<Utc>, value: f64, z_score: f64) -> Self {
        Self {
            timestamp,
            value,
            z_score,
            severity: None,
            message: None,
        }
    }

    /// Set custom severity.
    pub fn severity(mut self, severity: AnomalySeverity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Set custom message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Build the alert.
    pub fn build(self) -> Alert {
        let severity = self.severity.unwrap_or_else(|| severity_for(self.z_score));
        let message = self.message.unwrap_or_else(|| {
            format!(
                "Density anomaly: value={:.4}, z-score={:.4}",
                self.value, self.z_score
            )
        });

        Alert {
            timestamp: self.timestamp,
            value: self.value,
            z_score: self.z_score,
            severity,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_create_alert_severity_follows_z() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
        assert_eq!(create_alert(ts, 0.7, 2.0).severity, AnomalySeverity::Warning);
        assert_eq!(create_alert(ts, 0.9, 3.2).severity, AnomalySeverity::Danger);
    }

    #[test]
    fn test_builder_overrides() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
        let alert = AlertBuilder::new(ts, 0.8, 1.9)
            .severity(AnomalySeverity::Danger)
            .message("manual escalation")
            .build();

        assert_eq!(alert.severity, AnomalySeverity::Danger);
        assert_eq!(alert.message, "manual escalation");
        assert_eq!(alert.timestamp, ts);
    }

    #[test]
    fn test_builder_defaults_match_create_alert() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
        let built = AlertBuilder::new(ts, 0.8, 2.0).build();
        let created = create_alert(ts, 0.8, 2.0);
        assert_eq!(built, created);
    }
}
