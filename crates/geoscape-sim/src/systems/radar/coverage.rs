//! Geoscape-wide radar queries and coverage sources.

use hecs::World;

use geoscape_core::components::{Aircraft, RadarSite};
use geoscape_core::enums::AircraftStatus;
use geoscape_core::geo;
use geoscape_core::radar::Radar;
use geoscape_core::types::GeoPosition;
use geoscape_coverage::RadarSource;

/// Whether `pos` lies inside the detection range of any base or installation.
///
/// Aircraft radars never count here. Non-working installations have zero
/// range and drop out on their own.
pub fn point_within_any_base_radar(world: &World, pos: GeoPosition) -> bool {
    world
        .query::<(&RadarSite, &GeoPosition, &Radar)>()
        .iter()
        .filter(|(_, (site, _, radar))| site.kind.is_static() && radar.is_operational())
        .any(|(_, (_, center, radar))| geo::great_circle_distance(*center, pos) <= radar.range)
}

/// Bases and installations with a working radar.
pub fn static_sources(world: &World) -> Vec<RadarSource> {
    let mut sources: Vec<(u32, RadarSource)> = world
        .query::<(&RadarSite, &GeoPosition, &Radar)>()
        .iter()
        .filter(|(_, (site, _, radar))| site.kind.is_static() && radar.is_operational())
        .map(|(_, (site, pos, radar))| (site.id.0, source(*pos, radar)))
        .collect();
    sources.sort_by_key(|(id, _)| *id);
    sources.into_iter().map(|(_, s)| s).collect()
}

/// Radars of aircraft currently flying.
pub fn airborne_sources(world: &World) -> Vec<RadarSource> {
    let mut sources: Vec<(u32, RadarSource)> = world
        .query::<(&RadarSite, &GeoPosition, &Radar, &Aircraft)>()
        .iter()
        .filter(|(_, (_, _, radar, aircraft))| {
            aircraft.status == AircraftStatus::Airborne && radar.is_operational()
        })
        .map(|(_, (site, pos, radar, _))| (site.id.0, source(*pos, radar)))
        .collect();
    sources.sort_by_key(|(id, _)| *id);
    sources.into_iter().map(|(_, s)| s).collect()
}

fn source(position: GeoPosition, radar: &Radar) -> RadarSource {
    RadarSource {
        position,
        range: radar.range,
        tracking_range: radar.tracking_range,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world_setup::{spawn_aircraft, spawn_base, spawn_installation};
    use geoscape_core::config::RadarConfig;
    use geoscape_core::types::SiteId;

    #[test]
    fn test_point_query_uses_detection_range_only() {
        let mut world = World::new();
        let e = spawn_base(&mut world, SiteId(0), "HQ".into(), GeoPosition::new(0.0, 0.0));
        world.get::<&mut Radar>(e).unwrap().set_range(10.0, 20.0, 1, 0.4);

        assert!(point_within_any_base_radar(&world, GeoPosition::new(5.0, 0.0)));
        // Inside tracking range but outside detection range.
        assert!(!point_within_any_base_radar(&world, GeoPosition::new(15.0, 0.0)));
    }

    #[test]
    fn test_point_query_ignores_aircraft() {
        let mut world = World::new();
        let config = RadarConfig::default();
        let e = spawn_aircraft(&mut world, &config, SiteId(0), None, GeoPosition::default(), 1);
        world.get::<&mut Aircraft>(e).unwrap().status = AircraftStatus::Airborne;

        assert!(!point_within_any_base_radar(&world, GeoPosition::new(1.0, 1.0)));
        assert_eq!(airborne_sources(&world).len(), 1);
        assert!(static_sources(&world).is_empty());
    }

    #[test]
    fn test_unbuilt_installation_is_not_a_source() {
        let mut world = World::new();
        spawn_installation(&mut world, SiteId(0), GeoPosition::default(), 10.0, 14.0);
        assert!(static_sources(&world).is_empty());
        assert!(!point_within_any_base_radar(&world, GeoPosition::default()));
    }
}
