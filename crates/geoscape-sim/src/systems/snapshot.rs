//! Snapshot system: builds a `GeoscapeSnapshot` from the world.
//!
//! Read-only. Radars are listed by site id so identical worlds produce
//! identical snapshots.

use hecs::World;

use geoscape_core::components::{Aircraft, Installation, RadarSite};
use geoscape_core::enums::ClockState;
use geoscape_core::events::GeoscapeEvent;
use geoscape_core::radar::Radar;
use geoscape_core::state::{ContactView, GeoscapeSnapshot, RadarView};
use geoscape_core::types::{GeoPosition, GeoscapeTime};

use crate::registry::ContactRegistry;
use crate::systems::radar::overlay::OverlayState;
use crate::world_setup;

pub fn build_snapshot(
    world: &World,
    registry: &ContactRegistry,
    time: &GeoscapeTime,
    clock: ClockState,
    overlay: &OverlayState,
    events: Vec<GeoscapeEvent>,
) -> GeoscapeSnapshot {
    GeoscapeSnapshot {
        time: *time,
        clock,
        radars: build_radars(world),
        contacts: build_contacts(registry),
        overlay: overlay.view(),
        events,
    }
}

fn build_radars(world: &World) -> Vec<RadarView> {
    let mut radars: Vec<RadarView> = world
        .query::<(
            &RadarSite,
            &GeoPosition,
            &Radar,
            Option<&Installation>,
            Option<&Aircraft>,
        )>()
        .iter()
        .map(|(_, (site, position, radar, installation, aircraft))| {
            let mut sensored = radar.sensored().to_vec();
            sensored.sort_unstable();
            RadarView {
                site: site.id,
                kind: site.kind,
                position: *position,
                range: radar.range,
                tracking_range: radar.tracking_range,
                active: world_setup::participates(installation, aircraft)
                    && radar.is_operational(),
                sensored,
            }
        })
        .collect();
    radars.sort_by_key(|r| r.site);
    radars
}

fn build_contacts(registry: &ContactRegistry) -> Vec<ContactView> {
    registry
        .iter()
        .map(|(id, contact)| ContactView {
            id,
            position: contact.position,
            detected: contact.detected,
            landed: contact.landed,
        })
        .collect()
}
