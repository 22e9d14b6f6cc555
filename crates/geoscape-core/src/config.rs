//! Tunable radar and detection parameters.
//!
//! Defaults come from `constants.rs`; scenario files may override any field.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::GeoscapeError;

/// Radar tuning shared by every radar in a campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    /// Base radar detection range at level 1 (degrees).
    pub base_range: f64,
    /// Base radar tracking range at level 1 (degrees).
    pub base_tracking_range: f64,
    /// Aircraft radar detection range at level 1 (degrees).
    pub aircraft_range: f64,
    /// Aircraft radar tracking range at level 1 (degrees).
    pub aircraft_tracking_range: f64,
    /// Level installations run their radar at.
    pub installation_level: u32,
    /// Relative range gained per level above 1.
    pub upgrade_factor: f64,
    /// First-contact probability per second inside detection range.
    pub detection_rate_per_sec: f64,
    /// Simulated seconds between detection passes.
    pub detection_interval_secs: f64,
    /// Discard the rest of a tick and pause when a new contact is detected.
    pub halt_on_detection: bool,
    /// Coverage raster size.
    pub coverage_width: u32,
    pub coverage_height: u32,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            base_range: RADAR_BASE_RANGE,
            base_tracking_range: RADAR_BASE_TRACKING_RANGE,
            aircraft_range: RADAR_AIRCRAFT_RANGE,
            aircraft_tracking_range: RADAR_AIRCRAFT_TRACKING_RANGE,
            installation_level: RADAR_INSTALLATION_LEVEL,
            upgrade_factor: RADAR_UPGRADE_FACTOR,
            detection_rate_per_sec: DETECTION_RATE_PER_SEC,
            detection_interval_secs: DETECTION_INTERVAL_SECS,
            halt_on_detection: true,
            coverage_width: COVERAGE_WIDTH,
            coverage_height: COVERAGE_HEIGHT,
        }
    }
}

impl RadarConfig {
    /// Probability that one detection pass picks up a contact inside detection range.
    pub fn detection_probability(&self) -> f64 {
        let p = self.detection_rate_per_sec * self.detection_interval_secs;
        if p.is_nan() {
            return 0.0;
        }
        p.clamp(0.0, 1.0)
    }

    /// Reject configurations that would break radar invariants.
    pub fn validate(&self) -> Result<(), GeoscapeError> {
        if self.detection_interval_secs <= 0.0 || !self.detection_interval_secs.is_finite() {
            return Err(GeoscapeError::Config(format!(
                "detection_interval_secs must be positive, got {}",
                self.detection_interval_secs
            )));
        }
        if self.base_tracking_range < self.base_range {
            return Err(GeoscapeError::Config(
                "base_tracking_range must not be shorter than base_range".into(),
            ));
        }
        if self.aircraft_tracking_range < self.aircraft_range {
            return Err(GeoscapeError::Config(
                "aircraft_tracking_range must not be shorter than aircraft_range".into(),
            ));
        }
        if self.upgrade_factor <= 0.0 {
            return Err(GeoscapeError::Config(format!(
                "upgrade_factor must be positive, got {}",
                self.upgrade_factor
            )));
        }
        if self.detection_rate_per_sec < 0.0 {
            return Err(GeoscapeError::Config(
                "detection_rate_per_sec must not be negative".into(),
            ));
        }
        if self.coverage_width == 0 || self.coverage_height == 0 {
            return Err(GeoscapeError::Config("coverage raster must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_detection_probability() {
        let config = RadarConfig::default();
        let p = config.detection_probability();
        assert!((p - 0.225).abs() < 1e-12, "got {p}");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_probability_scales_with_interval() {
        let config = RadarConfig {
            detection_interval_secs: DETECTION_INTERVAL_SECS / 2.0,
            ..Default::default()
        };
        assert!((config.detection_probability() - 0.1125).abs() < 1e-12);
    }

    #[test]
    fn test_probability_is_clamped() {
        let config = RadarConfig {
            detection_rate_per_sec: 1.0,
            ..Default::default()
        };
        assert_eq!(config.detection_probability(), 1.0);
    }

    #[test]
    fn test_validate_rejects_short_tracking_range() {
        let config = RadarConfig {
            base_tracking_range: 10.0,
            base_range: 20.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(GeoscapeError::Config(_))));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: RadarConfig =
            serde_json::from_str(r#"{"base_range": 30.0, "base_tracking_range": 40.0}"#)
                .unwrap();
        assert_eq!(config.base_range, 30.0);
        assert_eq!(config.aircraft_range, RADAR_AIRCRAFT_RANGE);
        assert!(config.halt_on_detection);
    }
}
