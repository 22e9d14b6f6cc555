//! ECS components for radar owners, and the contact record.
//!
//! Components are plain data structs. Radar owners live as hecs entities;
//! contacts live in the dense contact registry instead.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::route::Flight;
use crate::types::{GeoPosition, SiteId};

/// Identity of a radar owner. Every radar-carrying entity has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarSite {
    pub id: SiteId,
    pub kind: RadarOwnerKind,
}

/// Marks an entity as a founded base.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Base {
    pub name: String,
}

/// A radar installation outside any base.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Installation {
    pub status: InstallationStatus,
    /// Detection range the installation was built with (degrees).
    pub base_range: f64,
    /// Tracking range the installation was built with (degrees).
    pub base_tracking_range: f64,
}

/// A player aircraft with an onboard radar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    pub status: AircraftStatus,
    /// Base the aircraft belongs to, if any.
    pub home: Option<SiteId>,
}

/// A hostile aircraft on the geoscape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub position: GeoPosition,
    /// Current route, if the contact is moving.
    pub flight: Option<Flight>,
    /// Picked up by some radar at least once and still known.
    pub detected: bool,
    /// Landed contacts keep their registry slot but are invisible to radars.
    pub landed: bool,
}

impl Contact {
    pub fn new(position: GeoPosition) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn with_flight(position: GeoPosition, flight: Flight) -> Self {
        Self {
            position,
            flight: Some(flight),
            ..Default::default()
        }
    }

    /// Whether radars can see this contact at all.
    pub fn is_on_geoscape(&self) -> bool {
        !self.landed
    }
}
