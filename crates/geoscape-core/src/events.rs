//! Events emitted by the simulation for the UI and alert logic.

use serde::{Deserialize, Serialize};

use crate::types::{ContactId, GeoPosition, SiteId};

/// Something observable happened on the geoscape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoscapeEvent {
    /// First detection of a contact.
    ContactDetected {
        contact: ContactId,
        position: GeoPosition,
        /// Radars holding the contact right after the pickup.
        sensored_by: Vec<SiteId>,
    },
    /// A detected contact is no longer sensed by any radar.
    ContactLost { contact: ContactId },
    /// A contact reached the end of its route.
    ContactArrived { contact: ContactId },
    /// A contact left the geoscape (destroyed, or landed when `destroyed` is false).
    ContactRemoved { contact: ContactId, destroyed: bool },
    /// The radar overlay was switched on automatically.
    RadarOverlayEnabled,
    /// The radar overlay was switched off because nothing is tracked any more.
    RadarOverlayDisabled,
    /// Static coverage was recomputed after a base or installation radar changed.
    StaticCoverageRebuilt,
    /// The clock stopped because a new contact was detected.
    ClockHalted { contact: ContactId },
    /// A player aircraft reached its destination and landed.
    AircraftLanded { site: SiteId },
}
