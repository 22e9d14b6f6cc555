//! Player commands sent from the UI to the simulation.
//!
//! Commands are queued and applied at the start of the next tick.

use serde::{Deserialize, Serialize};

use crate::types::SiteId;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoscapeCommand {
    /// Stop the campaign clock.
    Pause,
    /// Restart the campaign clock.
    Resume,
    /// Turn the radar overlay on or off by hand. A manual "on" pins it.
    SetRadarOverlay { enabled: bool },
    /// A base's radar building changed level (0 = no radar building).
    SetBaseRadarLevel { site: SiteId, level: u32 },
}
