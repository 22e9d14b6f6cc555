use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use geoscape_core::components::{Aircraft, Contact, Installation};
use geoscape_core::config::RadarConfig;
use geoscape_core::enums::{ClockState, RadarOwnerKind};
use geoscape_core::error::GeoscapeError;
use geoscape_core::radar::Radar;
use geoscape_core::route::Flight;
use geoscape_core::types::{GeoPosition, GeoscapeTime, SiteId};
use geoscape_sim::systems::spawner::SpawnSchedule;
use geoscape_sim::{GeoscapeEngine, SimConfig, SiteRecord};

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("save file i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("save data is not valid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("save data does not describe a valid geoscape: {0}")]
    Geoscape(#[from] GeoscapeError),
}

/// One radar owner as written to disk. No sensored set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSave {
    pub id: SiteId,
    pub kind: RadarOwnerKind,
    pub position: GeoPosition,
    pub radar_level: u32,
    pub range: f64,
    pub tracking_range: f64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub installation: Option<Installation>,
    #[serde(default)]
    pub aircraft: Option<Aircraft>,
    #[serde(default)]
    pub flight: Option<Flight>,
}

impl From<SiteRecord> for SiteSave {
    fn from(record: SiteRecord) -> Self {
        Self {
            id: record.id,
            kind: record.kind,
            position: record.position,
            radar_level: record.radar.level,
            range: record.radar.range,
            tracking_range: record.radar.tracking_range,
            name: record.name,
            installation: record.installation,
            aircraft: record.aircraft,
            flight: record.flight,
        }
    }
}

impl From<SiteSave> for SiteRecord {
    fn from(save: SiteSave) -> Self {
        let mut radar = Radar::new();
        radar.level = save.radar_level;
        radar.range = save.range.max(0.0);
        radar.tracking_range = save.tracking_range.max(radar.range);
        Self {
            id: save.id,
            kind: save.kind,
            position: save.position,
            radar,
            name: save.name,
            installation: save.installation,
            aircraft: save.aircraft,
            flight: save.flight,
        }
    }
}

/// One contact as written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSave {
    pub position: GeoPosition,
    #[serde(default)]
    pub flight: Option<Flight>,
    pub detected: bool,
    #[serde(default)]
    pub landed: bool,
}

impl From<&Contact> for ContactSave {
    fn from(contact: &Contact) -> Self {
        Self {
            position: contact.position,
            flight: contact.flight.clone(),
            detected: contact.detected,
            landed: contact.landed,
        }
    }
}

impl From<ContactSave> for Contact {
    fn from(save: ContactSave) -> Self {
        Self {
            position: save.position,
            flight: save.flight,
            detected: save.detected,
            landed: save.landed,
        }
    }
}

/// Full save data written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    pub slot_name: String,
    pub timestamp: u64,
    pub seed: u64,
    #[serde(default)]
    pub config: RadarConfig,
    pub time: GeoscapeTime,
    #[serde(default)]
    pub clock: ClockState,
    pub sites: Vec<SiteSave>,
    pub contacts: Vec<ContactSave>,
    #[serde(default)]
    pub overlay_pinned: bool,
    #[serde(default)]
    pub spawn_schedule: SpawnSchedule,
}

/// Lightweight metadata for listing saves without rebuilding an engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveMetadata {
    pub slot_name: String,
    pub timestamp: u64,
    pub day: u64,
    pub sites: usize,
    pub contacts: usize,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Capture the persisted state of `engine` under `slot`.
pub fn to_save_data(engine: &GeoscapeEngine, slot: &str) -> SaveData {
    SaveData {
        slot_name: slot.to_string(),
        timestamp: now_secs(),
        seed: engine.seed(),
        config: engine.config().clone(),
        time: engine.time(),
        clock: engine.clock(),
        sites: engine.site_records().into_iter().map(SiteSave::from).collect(),
        contacts: engine.registry().iter().map(|(_, c)| ContactSave::from(c)).collect(),
        overlay_pinned: engine.overlay().pinned,
        spawn_schedule: engine.spawn_schedule().clone(),
    }
}

/// Rebuild an engine from save data. Sensored sets are recomputed from
/// the contacts' `detected` flags and the radars' tracking ranges.
pub fn from_save_data(data: SaveData) -> Result<GeoscapeEngine, SaveError> {
    let config = SimConfig {
        seed: data.seed,
        radar: data.config,
    };
    let sites = data.sites.into_iter().map(SiteRecord::from).collect();
    let contacts = data.contacts.into_iter().map(Contact::from).collect();
    let mut engine =
        GeoscapeEngine::from_parts(config, data.time, sites, contacts, data.overlay_pinned)?;
    engine.set_spawn_schedule(data.spawn_schedule);
    engine.set_clock(data.clock);
    info!(slot = %data.slot_name, day = data.time.day(), "campaign restored");
    Ok(engine)
}

fn save_path(dir: &Path, slot: &str) -> PathBuf {
    dir.join(format!("{slot}.json"))
}

pub fn save_to_file(dir: &Path, slot: &str, data: &SaveData) -> Result<(), SaveError> {
    fs::create_dir_all(dir)?;
    let json = serde_json::to_string_pretty(data)?;
    fs::write(save_path(dir, slot), json)?;
    info!(slot, dir = %dir.display(), "campaign saved");
    Ok(())
}

pub fn load_from_file(dir: &Path, slot: &str) -> Result<SaveData, SaveError> {
    let json = fs::read_to_string(save_path(dir, slot))?;
    Ok(serde_json::from_str(&json)?)
}

/// Every readable save in `dir`, newest first. Unreadable files are skipped.
pub fn list_saves(dir: &Path) -> Vec<SaveMetadata> {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return Vec::new(),
    };

    let mut saves = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.extension().is_some_and(|ext| ext == "json") {
            continue;
        }
        let parsed = fs::read_to_string(&path)
            .map_err(SaveError::from)
            .and_then(|json| Ok(serde_json::from_str::<SaveData>(&json)?));
        match parsed {
            Ok(data) => saves.push(SaveMetadata {
                slot_name: data.slot_name,
                timestamp: data.timestamp,
                day: data.time.day(),
                sites: data.sites.len(),
                contacts: data.contacts.len(),
            }),
            Err(err) => warn!(path = %path.display(), %err, "skipping unreadable save"),
        }
    }
    saves.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    saves
}

pub fn delete_save(dir: &Path, slot: &str) -> Result<(), SaveError> {
    let path = save_path(dir, slot);
    if path.exists() {
        fs::remove_file(&path)?;
    }
    Ok(())
}
