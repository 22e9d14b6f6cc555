//! Entity spawn factories for radar owners.
//!
//! Every radar owner carries `RadarSite`, `GeoPosition` and `Radar`, plus
//! exactly one of `Base`, `Installation` or `Aircraft`.

use hecs::{Entity, World};

use geoscape_core::components::*;
use geoscape_core::config::RadarConfig;
use geoscape_core::enums::*;
use geoscape_core::radar::Radar;
use geoscape_core::types::{GeoPosition, SiteId};

/// Spawn a base. Its radar stays off until a radar building raises the level.
pub fn spawn_base(world: &mut World, id: SiteId, name: String, position: GeoPosition) -> Entity {
    world.spawn((
        RadarSite {
            id,
            kind: RadarOwnerKind::Base,
        },
        position,
        Radar::new(),
        Base { name },
    ))
}

/// Spawn an installation under construction. Its radar is off until it works.
pub fn spawn_installation(
    world: &mut World,
    id: SiteId,
    position: GeoPosition,
    base_range: f64,
    base_tracking_range: f64,
) -> Entity {
    world.spawn((
        RadarSite {
            id,
            kind: RadarOwnerKind::Installation,
        },
        position,
        Radar::new(),
        Installation {
            status: InstallationStatus::UnderConstruction,
            base_range,
            base_tracking_range,
        },
    ))
}

/// Spawn an aircraft in its hangar with radar ranges for `level`.
pub fn spawn_aircraft(
    world: &mut World,
    config: &RadarConfig,
    id: SiteId,
    home: Option<SiteId>,
    position: GeoPosition,
    level: u32,
) -> Entity {
    let mut radar = Radar::new();
    radar.set_range(
        config.aircraft_range,
        config.aircraft_tracking_range,
        level,
        config.upgrade_factor,
    );
    world.spawn((
        RadarSite {
            id,
            kind: RadarOwnerKind::Aircraft,
        },
        position,
        radar,
        Aircraft {
            status: AircraftStatus::Home,
            home,
        },
    ))
}

/// Find the entity owning `site`.
pub fn find_site(world: &World, site: SiteId) -> Option<Entity> {
    world
        .query::<&RadarSite>()
        .iter()
        .find(|(_, s)| s.id == site)
        .map(|(e, _)| e)
}

/// Whether an owner's radar takes part in detection passes.
pub fn participates(installation: Option<&Installation>, aircraft: Option<&Aircraft>) -> bool {
    installation.map_or(true, |i| i.status == InstallationStatus::Working)
        && aircraft.map_or(true, |a| a.status == AircraftStatus::Airborne)
}
