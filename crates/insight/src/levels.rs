//! Congestion level classification.

use serde::{Deserialize, Serialize};

/// Density at or above which a camera is considered busy.
pub const CAUTION_THRESHOLD: f64 = 0.30;
/// Density at or above which a camera is considered dangerous.
pub const DANGER_THRESHOLD: f64 = 0.60;

/// Qualitative congestion level derived from a normalized density value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CongestionLevel {
    NoData,
    Free,
    Caution,
    Danger,
}

impl CongestionLevel {
    /// Classify a density reading; `None` means no recent data.
    pub fn resolve(density: Option<f64>) -> Self {
        let Some(density) = density else {
            return CongestionLevel::NoData;
        };
        if density >= DANGER_THRESHOLD {
            CongestionLevel::Danger
        } else if density >= CAUTION_THRESHOLD {
            CongestionLevel::Caution
        } else {
            CongestionLevel::Free
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            CongestionLevel::NoData => "No data",
            CongestionLevel::Free => "Free",
            CongestionLevel::Caution => "Caution",
            CongestionLevel::Danger => "Danger",
        }
    }

    /// Display tone used by status chips.
    pub fn tone(&self) -> &'static str {
        match self {
            CongestionLevel::NoData | CongestionLevel::Free => "neutral",
            CongestionLevel::Caution => "warning",
            CongestionLevel::Danger => "danger",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_thresholds() {
        assert_eq!(CongestionLevel::resolve(None), CongestionLevel::NoData);
        assert_eq!(CongestionLevel::resolve(Some(0.0)), CongestionLevel::Free);
        assert_eq!(CongestionLevel::resolve(Some(0.29)), CongestionLevel::Free);
        assert_eq!(CongestionLevel::resolve(Some(0.30)), CongestionLevel::Caution);
        assert_eq!(CongestionLevel::resolve(Some(0.59)), CongestionLevel::Caution);
        assert_eq!(CongestionLevel::resolve(Some(0.60)), CongestionLevel::Danger);
        assert_eq!(CongestionLevel::resolve(Some(0.95)), CongestionLevel::Danger);
    }

    #[test]
    fn test_tones() {
        assert_eq!(CongestionLevel::Free.tone(), "neutral");
        assert_eq!(CongestionLevel::Caution.tone(), "warning");
        assert_eq!(CongestionLevel::Danger.tone(), "danger");
    }
}
