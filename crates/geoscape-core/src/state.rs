//! Geoscape snapshot: the radar picture handed to the UI after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GeoscapeEvent;
use crate::types::{ContactId, GeoPosition, GeoscapeTime, SiteId};

/// Complete radar state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeoscapeSnapshot {
    pub time: GeoscapeTime,
    pub clock: ClockState,
    pub radars: Vec<RadarView>,
    pub contacts: Vec<ContactView>,
    pub overlay: OverlayView,
    pub events: Vec<GeoscapeEvent>,
}

impl GeoscapeSnapshot {
    /// Whether any radar currently tracks anything.
    pub fn any_contact_tracked(&self) -> bool {
        self.radars.iter().any(|r| !r.sensored.is_empty())
    }
}

/// One radar and what it senses, for drawing range circles and sensor lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarView {
    pub site: SiteId,
    pub kind: RadarOwnerKind,
    pub position: GeoPosition,
    pub range: f64,
    pub tracking_range: f64,
    /// False for aircraft in their hangar and installations that are not working.
    pub active: bool,
    pub sensored: Vec<ContactId>,
}

/// A contact as the UI may show it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactView {
    pub id: ContactId,
    pub position: GeoPosition,
    pub detected: bool,
    pub landed: bool,
}

/// Radar overlay flags.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct OverlayView {
    pub radar_overlay: bool,
    pub pinned: bool,
}
