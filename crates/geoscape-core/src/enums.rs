//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// What kind of owner a radar is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RadarOwnerKind {
    Base,
    Installation,
    Aircraft,
}

impl RadarOwnerKind {
    /// Static owners feed the static coverage layer and the base-radar point query.
    pub fn is_static(self) -> bool {
        matches!(self, RadarOwnerKind::Base | RadarOwnerKind::Installation)
    }
}

/// Construction/operation state of an installation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstallationStatus {
    /// Still being built; radar is off.
    #[default]
    UnderConstruction,
    /// Running; radar participates in detection.
    Working,
    /// Lost a dependency or was damaged; radar is off.
    Disabled,
}

/// Where an aircraft is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AircraftStatus {
    /// In its hangar; radar does not sense anything.
    #[default]
    Home,
    /// Flying on the geoscape.
    Airborne,
}

/// Outcome of evaluating one (radar, contact) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SensorState {
    NotSensored,
    Sensored,
}

/// Whether the campaign clock is running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockState {
    #[default]
    Running,
    Paused,
}
