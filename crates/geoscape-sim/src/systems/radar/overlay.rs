//! Radar overlay switching.

use hecs::World;
use serde::{Deserialize, Serialize};
use tracing::info;

use geoscape_core::events::GeoscapeEvent;
use geoscape_core::state::OverlayView;

use crate::systems::radar::notify;

/// Whether the radar overlay is shown, and whether the player pinned it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayState {
    pub radar_overlay: bool,
    pub pinned: bool,
}

impl OverlayState {
    /// Manual toggle. Turning it on pins it, turning it off unpins it.
    pub fn set_manual(&mut self, enabled: bool) {
        self.radar_overlay = enabled;
        self.pinned = enabled;
    }

    /// A new contact was detected: show the overlay if it is hidden.
    pub fn activate(&mut self, events: &mut Vec<GeoscapeEvent>) {
        if !self.radar_overlay {
            self.radar_overlay = true;
            info!("radar overlay enabled");
            events.push(GeoscapeEvent::RadarOverlayEnabled);
        }
    }

    /// Hide the overlay once no radar tracks anything, unless pinned.
    pub fn deactivate_if_idle(&mut self, world: &World, events: &mut Vec<GeoscapeEvent>) {
        if !self.radar_overlay || self.pinned {
            return;
        }
        if notify::any_radar_has_contacts(world) {
            return;
        }
        self.radar_overlay = false;
        info!("radar overlay disabled, nothing tracked");
        events.push(GeoscapeEvent::RadarOverlayDisabled);
    }

    pub fn view(&self) -> OverlayView {
        OverlayView {
            radar_overlay: self.radar_overlay,
            pinned: self.pinned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activate_only_emits_once() {
        let mut overlay = OverlayState::default();
        let mut events = Vec::new();
        overlay.activate(&mut events);
        overlay.activate(&mut events);
        assert!(overlay.radar_overlay);
        assert_eq!(events, vec![GeoscapeEvent::RadarOverlayEnabled]);
    }

    #[test]
    fn test_idle_world_disables_unpinned_overlay() {
        let world = World::new();
        let mut events = Vec::new();
        let mut overlay = OverlayState {
            radar_overlay: true,
            pinned: false,
        };
        overlay.deactivate_if_idle(&world, &mut events);
        assert!(!overlay.radar_overlay);
        assert_eq!(events, vec![GeoscapeEvent::RadarOverlayDisabled]);
    }

    #[test]
    fn test_pinned_overlay_stays_on() {
        let world = World::new();
        let mut events = Vec::new();
        let mut overlay = OverlayState::default();
        overlay.set_manual(true);
        overlay.deactivate_if_idle(&world, &mut events);
        assert!(overlay.radar_overlay);
        assert!(events.is_empty());
    }
}
