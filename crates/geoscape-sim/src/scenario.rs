//! Scenario files: an initial geoscape described in TOML.
//!
//! A scenario lists bases, installations, aircraft and scheduled contacts,
//! and may override any radar setting. Aircraft refer to their home base
//! by its position in the `bases` list.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use geoscape_core::config::RadarConfig;
use geoscape_core::constants::DETECTION_INTERVAL_SECS;
use geoscape_core::enums::InstallationStatus;
use geoscape_core::error::GeoscapeError;
use geoscape_core::types::GeoPosition;

use crate::engine::{GeoscapeEngine, SimConfig};
use crate::systems::spawner::{SpawnEntry, SpawnSchedule};

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("cannot read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse scenario: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("scenario does not fit the geoscape: {0}")]
    Geoscape(#[from] GeoscapeError),

    #[error("aircraft {aircraft} refers to missing base {base}")]
    MissingHomeBase { aircraft: usize, base: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseSpec {
    pub name: String,
    pub position: GeoPosition,
    /// Radar building level, 0 for none.
    #[serde(default = "default_level")]
    pub radar_level: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallationSpec {
    pub position: GeoPosition,
    pub range: f64,
    pub tracking_range: f64,
    #[serde(default = "default_installation_status")]
    pub status: InstallationStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftSpec {
    /// Index into `bases`.
    #[serde(default)]
    pub home: Option<usize>,
    pub position: GeoPosition,
    #[serde(default = "default_level")]
    pub radar_level: u32,
    /// Launch towards this point at start.
    #[serde(default)]
    pub destination: Option<GeoPosition>,
    #[serde(default)]
    pub speed: f64,
}

/// How long and in what steps a headless run advances the clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunSettings {
    pub duration_secs: f64,
    pub step_secs: f64,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            duration_secs: 86_400.0,
            step_secs: DETECTION_INTERVAL_SECS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub name: String,
    pub seed: u64,
    pub radar: RadarConfig,
    pub run: RunSettings,
    pub bases: Vec<BaseSpec>,
    pub installations: Vec<InstallationSpec>,
    pub aircraft: Vec<AircraftSpec>,
    pub spawns: Vec<SpawnEntry>,
}

fn default_level() -> u32 {
    1
}

fn default_installation_status() -> InstallationStatus {
    InstallationStatus::Working
}

impl Scenario {
    pub fn from_toml_str(text: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            seed: self.seed,
            radar: self.radar.clone(),
        }
    }

    /// Build a ready-to-run engine from this scenario.
    pub fn build_engine(&self) -> Result<GeoscapeEngine, ScenarioError> {
        let mut engine = GeoscapeEngine::new(self.sim_config())?;

        let mut base_ids = Vec::with_capacity(self.bases.len());
        for base in &self.bases {
            let id = engine.found_base(base.name.clone(), base.position);
            if base.radar_level > 0 {
                engine.set_base_radar_level(id, base.radar_level)?;
            }
            base_ids.push(id);
        }

        for installation in &self.installations {
            let id = engine.build_installation(
                installation.position,
                installation.range,
                installation.tracking_range,
            );
            if installation.status != InstallationStatus::UnderConstruction {
                engine.set_installation_status(id, installation.status)?;
            }
        }

        for (index, aircraft) in self.aircraft.iter().enumerate() {
            let home = match aircraft.home {
                Some(base) => Some(*base_ids.get(base).ok_or(ScenarioError::MissingHomeBase {
                    aircraft: index,
                    base,
                })?),
                None => None,
            };
            let id = engine.add_aircraft(home, aircraft.position, aircraft.radar_level)?;
            if let Some(destination) = aircraft.destination {
                engine.launch_aircraft(id, destination, aircraft.speed)?;
            }
        }

        engine.set_spawn_schedule(SpawnSchedule::new(self.spawns.clone()));
        info!(
            scenario = %self.name,
            bases = self.bases.len(),
            installations = self.installations.len(),
            aircraft = self.aircraft.len(),
            spawns = self.spawns.len(),
            "scenario loaded"
        );
        Ok(engine)
    }
}
