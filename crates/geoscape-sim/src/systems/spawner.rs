//! Spawn schedule: hostile contacts entering the geoscape at set times.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use geoscape_core::components::Contact;
use geoscape_core::route::{Flight, Route};
use geoscape_core::types::{ContactId, GeoPosition};

use crate::registry::ContactRegistry;

/// One scheduled contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnEntry {
    /// Campaign time at which the contact appears (seconds).
    pub at_secs: f64,
    pub from: GeoPosition,
    pub to: GeoPosition,
    /// Degrees per simulated hour.
    pub speed: f64,
    /// Whether this entry has already been handled.
    #[serde(default)]
    pub spawned: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpawnSchedule {
    #[serde(default)]
    pub entries: Vec<SpawnEntry>,
}

impl SpawnSchedule {
    pub fn new(mut entries: Vec<SpawnEntry>) -> Self {
        entries.sort_by(|a, b| a.at_secs.total_cmp(&b.at_secs));
        Self { entries }
    }

    /// Entries not yet handled.
    pub fn pending(&self) -> usize {
        self.entries.iter().filter(|e| !e.spawned).count()
    }
}

/// Spawn every entry due at `now_secs`.
///
/// Entries that cannot be placed (full registry, antipodal route) are
/// dropped with a warning. Returns the ids spawned.
pub fn run(
    registry: &mut ContactRegistry,
    schedule: &mut SpawnSchedule,
    now_secs: f64,
) -> Vec<ContactId> {
    let mut spawned = Vec::new();
    for entry in &mut schedule.entries {
        if entry.spawned || entry.at_secs > now_secs {
            continue;
        }
        entry.spawned = true;

        let route = match Route::great_circle(entry.from, entry.to) {
            Ok(route) => route,
            Err(err) => {
                warn!(%err, at_secs = entry.at_secs, "scheduled contact dropped");
                continue;
            }
        };
        let contact = Contact::with_flight(entry.from, Flight::new(route, entry.speed));
        match registry.spawn(contact) {
            Ok(id) => {
                info!(contact = %id, from = %entry.from, to = %entry.to, "contact entered");
                spawned.push(id);
            }
            Err(err) => warn!(%err, at_secs = entry.at_secs, "scheduled contact dropped"),
        }
    }
    spawned
}
