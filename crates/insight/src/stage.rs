//! Stage-alert timeline and danger ETA.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::levels::DANGER_THRESHOLD;

/// Seconds within which an entering-danger ETA is worth announcing.
pub const ETA_NOTICE_WINDOW_SECONDS: i64 = 600;
/// Per-minute density velocity above which escalation is called out.
pub const RAPID_RISE_PER_MINUTE: f64 = 0.02;
/// Default number of timeline alerts.
pub const DEFAULT_ALERT_LIMIT: usize = 10;

/// Severity of a stage alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageSeverity {
    Info,
    Warning,
    Danger,
}

/// A coded, severity-tagged event derived from the density timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageAlert {
    /// Stable wire identifier ("A1", "A3", "A4", "A6").
    pub code: &'static str,
    pub title: &'static str,
    pub message: String,
    pub severity: StageSeverity,
    pub timestamp: DateTime<Utc>,
    pub density: f64,
}

/// One sample of the recent trend timeline, newest first in API usage.
///
/// Velocity and acceleration arrive in per-second units from the
/// analytics backend and are converted for display and ETA math.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendSample {
    pub timestamp: DateTime<Utc>,
    pub density: f64,
    /// Density change per second, if the backend derived one.
    pub velocity: Option<f64>,
    /// Velocity change per second squared.
    pub acceleration: Option<f64>,
}

/// Convert a per-second velocity to per-minute.
pub fn velocity_per_minute(velocity_per_second: Option<f64>) -> Option<f64> {
    velocity_per_second.map(|v| v * 60.0)
}

/// Convert a per-second-squared acceleration to per-minute-squared.
pub fn acceleration_per_minute2(acceleration_per_second2: Option<f64>) -> Option<f64> {
    acceleration_per_second2.map(|a| a * 3600.0)
}

/// Direction of a threshold-crossing estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EtaKind {
    None,
    EnteringDanger,
    ExitingDanger,
}

/// Estimated time until the danger threshold is crossed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Eta {
    pub kind: EtaKind,
    pub seconds: Option<i64>,
    pub message: String,
}

impl Eta {
    fn none(message: &str) -> Self {
        Self {
            kind: EtaKind::None,
            seconds: None,
            message: message.to_string(),
        }
    }
}

fn format_minutes(eta_seconds: i64) -> String {
    let minutes = (eta_seconds as f64 / 60.0).ceil() as i64;
    format!("~{} min", minutes)
}

/// Estimate when the current trend crosses the danger threshold.
///
/// Inputs are per-minute units. Below the threshold and rising yields an
/// entering estimate; above it and falling, an exiting estimate. A flat
/// or diverging trend has no ETA.
pub fn compute_eta(
    density: Option<f64>,
    velocity_per_min: Option<f64>,
    accel_per_min2: Option<f64>,
) -> Eta {
    let Some(density) = density else {
        return Eta::none("no recent analysis data");
    };
    let Some(v) = velocity_per_min else {
        return Eta::none("not enough samples for a trend");
    };
    let a = accel_per_min2.unwrap_or(0.0);

    if density < DANGER_THRESHOLD && v > 0.0 {
        return match eta_seconds_to_threshold(density, v, a, DANGER_THRESHOLD) {
            Some(seconds) => Eta {
                kind: EtaKind::EnteringDanger,
                seconds: Some(seconds),
                message: format!("danger level expected in {}", format_minutes(seconds)),
            },
            None => Eta::none("trend too volatile to estimate danger entry"),
        };
    }

    if density >= DANGER_THRESHOLD && v < 0.0 {
        return match eta_seconds_to_threshold(density, v, a, DANGER_THRESHOLD) {
            Some(seconds) => Eta {
                kind: EtaKind::ExitingDanger,
                seconds: Some(seconds),
                message: format!("easing below danger expected in {}", format_minutes(seconds)),
            },
            None => Eta::none("trend too volatile to estimate danger exit"),
        };
    }

    Eta::none("no danger-level change indicated by the current trend")
}

/// Solve for the first future crossing of `target`, in seconds.
///
/// Linear when acceleration is negligible; otherwise the positive-minimum
/// root of `0.5*a*t^2 + v*t + (density - target) = 0` (t in minutes).
fn eta_seconds_to_threshold(density: f64, v: f64, a: f64, target: f64) -> Option<i64> {
    let diff = density - target;

    if a.abs() < 1e-6 {
        if v.abs() < 1e-6 {
            return None;
        }
        let minutes = -diff / v;
        return if minutes > 0.0 {
            Some((minutes * 60.0).round() as i64)
        } else {
            None
        };
    }

    let qa = 0.5 * a;
    let qb = v;
    let qc = diff;
    let discriminant = qb * qb - 4.0 * qa * qc;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt = discriminant.sqrt();
    let denom = 2.0 * qa;
    let t1 = (-qb + sqrt) / denom;
    let t2 = (-qb - sqrt) / denom;

    positive_minimum(t1, t2).map(|minutes| (minutes * 60.0).round() as i64)
}

fn positive_minimum(t1: f64, t2: f64) -> Option<f64> {
    match (t1 > 0.0, t2 > 0.0) {
        (true, true) => Some(t1.min(t2)),
        (true, false) => Some(t1),
        (false, true) => Some(t2),
        (false, false) => None,
    }
}

/// Duration of the current contiguous danger run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DangerWindow {
    pub seconds: i64,
    pub since: Option<DateTime<Utc>>,
}

impl DangerWindow {
    pub fn empty() -> Self {
        Self { seconds: 0, since: None }
    }
}

/// Scan a newest-first timeline for the contiguous run at or above the
/// danger threshold ending at the newest sample.
pub fn danger_window(samples_desc: &[TrendSample]) -> DangerWindow {
    let Some(latest) = samples_desc.first() else {
        return DangerWindow::empty();
    };
    if latest.density < DANGER_THRESHOLD {
        return DangerWindow::empty();
    }

    let end = latest.timestamp;
    let mut start = end;
    for sample in &samples_desc[1..] {
        if sample.density < DANGER_THRESHOLD {
            break;
        }
        start = sample.timestamp;
    }

    let seconds = (end - start).num_seconds().max(0);
    DangerWindow {
        seconds,
        since: Some(start),
    }
}

/// Build the coded alert timeline from a newest-first sample run.
///
/// Emits, per sample: an imminent-danger notice when an entering ETA
/// falls inside the notice window, a threshold-breach event, a rapid-
/// escalation event while breached and rising fast, and a recovery event
/// on the first sample back under the threshold.
pub fn stage_alert_timeline(samples_desc: &[TrendSample], limit: usize) -> Vec<StageAlert> {
    let mut alerts = Vec::new();
    if samples_desc.is_empty() || limit == 0 {
        return alerts;
    }

    for (i, current) in samples_desc.iter().enumerate() {
        if alerts.len() >= limit {
            break;
        }
        let previous = samples_desc.get(i + 1);

        let velocity = velocity_per_minute(current.velocity);
        let acceleration = acceleration_per_minute2(current.acceleration);
        let eta = compute_eta(Some(current.density), velocity, acceleration);

        for alert in alerts_for_sample(current, previous, velocity, &eta) {
            alerts.push(alert);
            if alerts.len() >= limit {
                break;
            }
        }
    }

    alerts
}

fn alerts_for_sample(
    current: &TrendSample,
    previous: Option<&TrendSample>,
    velocity_per_min: Option<f64>,
    eta: &Eta,
) -> Vec<StageAlert> {
    let mut alerts = Vec::new();
    let timestamp = current.timestamp;
    let density = current.density;

    if eta.kind == EtaKind::EnteringDanger {
        if let Some(seconds) = eta.seconds {
            if seconds > 0 && seconds <= ETA_NOTICE_WINDOW_SECONDS {
                alerts.push(StageAlert {
                    code: "A1",
                    title: "Imminent danger",
                    message: format!("danger level expected in {}", format_minutes(seconds)),
                    severity: StageSeverity::Warning,
                    timestamp,
                    density,
                });
            }
        }
    }

    if density >= DANGER_THRESHOLD {
        alerts.push(StageAlert {
            code: "A3",
            title: "Danger threshold breached",
            message: format!(
                "density {:.2} exceeded the {:.2} threshold",
                density, DANGER_THRESHOLD
            ),
            severity: StageSeverity::Danger,
            timestamp,
            density,
        });

        if let Some(v) = velocity_per_min {
            if v > RAPID_RISE_PER_MINUTE {
                alerts.push(StageAlert {
                    code: "A4",
                    title: "Rapid escalation",
                    message: format!("rising at +{:.2} pts/min", v * 100.0),
                    severity: StageSeverity::Danger,
                    timestamp,
                    density,
                });
            }
        }
    } else if previous.is_some_and(|p| p.density >= DANGER_THRESHOLD) {
        alerts.push(StageAlert {
            code: "A6",
            title: "Danger cleared",
            message: "density dropped back below the danger threshold".to_string(),
            severity: StageSeverity::Info,
            timestamp,
            density,
        });
    }

    alerts
}
