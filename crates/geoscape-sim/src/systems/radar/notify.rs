//! Sensored-set maintenance across every radar.

use hecs::World;
use tracing::{debug, warn};

use geoscape_core::components::RadarSite;
use geoscape_core::error::SensorError;
use geoscape_core::geo;
use geoscape_core::radar::Radar;
use geoscape_core::types::{ContactId, GeoPosition, SiteId};

use crate::registry::ContactRegistry;
use crate::systems::radar::detection::ActiveRadar;

/// Add a freshly detected contact to every active radar whose tracking
/// range contains `position`. Returns the sites now holding it.
///
/// Uses the same strict comparison as the per-pair check, so a radar added
/// here keeps the contact when it is evaluated later in the pass.
pub fn add_detected_contact_to_every_radar(
    world: &World,
    radars: &[ActiveRadar],
    id: ContactId,
    position: GeoPosition,
) -> Vec<SiteId> {
    let mut sites = Vec::new();
    for active in radars {
        let Ok(mut radar) = world.get::<&mut Radar>(active.entity) else {
            continue;
        };
        if !radar.is_operational() {
            continue;
        }
        if geo::great_circle_distance(active.position, position) >= radar.tracking_range {
            continue;
        }
        match radar.add_contact(id) {
            Ok(()) | Err(SensorError::AlreadySensored(_)) => sites.push(active.site),
            Err(err) => {
                warn!(site = %active.site, contact = %id, %err, "radar cannot hold contact")
            }
        }
    }
    sites
}

/// Tell every radar that `id` left the geoscape.
///
/// Reaches all radars, active or not. When `destroyed` the registry has
/// compacted and higher ids are shifted down. Returns how many radars held it.
pub fn notify_contact_removed_all(world: &mut World, id: ContactId, destroyed: bool) -> usize {
    let mut held = 0;
    for (_entity, (site, radar)) in world.query_mut::<(&RadarSite, &mut Radar)>() {
        if radar.notify_contact_removed(id, destroyed) {
            debug!(site = %site.id, contact = %id, destroyed, "radar dropped removed contact");
            held += 1;
        }
    }
    held
}

/// For each contact id in `0..count`, whether any radar currently holds it.
pub fn held_contacts(world: &World, count: usize) -> Vec<bool> {
    let mut held = vec![false; count];
    for (_entity, radar) in world.query::<&Radar>().iter() {
        for id in radar.sensored() {
            if let Some(slot) = held.get_mut(id.index()) {
                *slot = true;
            }
        }
    }
    held
}

/// Whether any radar anywhere holds any contact.
pub fn any_radar_has_contacts(world: &World) -> bool {
    world.query::<&Radar>().iter().any(|(_, r)| r.has_contacts())
}

/// Rebuild every sensored set from scratch after loading.
///
/// Each detected contact still on the geoscape goes to every active radar
/// whose tracking range contains it.
pub fn restore_sensored_contacts(
    world: &mut World,
    registry: &ContactRegistry,
    radars: &[ActiveRadar],
) -> usize {
    for (_entity, radar) in world.query_mut::<&mut Radar>() {
        radar.clear_sensored();
    }

    let mut pairs = 0;
    for (id, contact) in registry.iter() {
        if !contact.detected || !contact.is_on_geoscape() {
            continue;
        }
        pairs += add_detected_contact_to_every_radar(world, radars, id, contact.position).len();
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::radar::detection::collect_active;
    use crate::world_setup::spawn_base;

    fn base_with_radar(world: &mut World, id: u32, lon: f64, range: f64, tracking: f64) {
        let e = spawn_base(world, SiteId(id), format!("base-{id}"), GeoPosition::new(lon, 0.0));
        world
            .get::<&mut Radar>(e)
            .unwrap()
            .set_range(range, tracking, 1, 0.4);
    }

    #[test]
    fn test_propagation_uses_tracking_range() {
        let mut world = World::new();
        base_with_radar(&mut world, 0, 0.0, 5.0, 10.0);
        base_with_radar(&mut world, 1, 40.0, 5.0, 10.0);
        let mut active = Vec::new();
        collect_active(&world, &mut active);

        let sites = add_detected_contact_to_every_radar(
            &world,
            &active,
            ContactId(0),
            GeoPosition::new(8.0, 0.0),
        );
        assert_eq!(sites, vec![SiteId(0)]);
    }

    #[test]
    fn test_propagation_excludes_tracking_edge() {
        let mut world = World::new();
        let contact = GeoPosition::new(5.0, 0.0);
        let edge = geo::great_circle_distance(GeoPosition::new(12.0, 0.0), contact);
        base_with_radar(&mut world, 0, 0.0, 10.0, 10.0);
        base_with_radar(&mut world, 1, 12.0, 1.0, edge);
        let mut active = Vec::new();
        collect_active(&world, &mut active);

        let sites = add_detected_contact_to_every_radar(&world, &active, ContactId(0), contact);
        assert_eq!(sites, vec![SiteId(0)]);
    }

    #[test]
    fn test_removal_reaches_every_radar() {
        let mut world = World::new();
        base_with_radar(&mut world, 0, 0.0, 10.0, 10.0);
        base_with_radar(&mut world, 1, 90.0, 10.0, 10.0);
        for (_e, radar) in world.query_mut::<&mut Radar>() {
            radar.add_contact(ContactId(1)).unwrap();
            radar.add_contact(ContactId(3)).unwrap();
        }

        assert_eq!(notify_contact_removed_all(&mut world, ContactId(1), true), 2);
        for (_e, radar) in world.query::<&Radar>().iter() {
            assert_eq!(radar.sensored(), &[ContactId(2)]);
        }
        assert_eq!(held_contacts(&world, 3), vec![false, false, true]);
    }

    #[test]
    fn test_any_radar_has_contacts() {
        let mut world = World::new();
        base_with_radar(&mut world, 0, 0.0, 10.0, 10.0);
        assert!(!any_radar_has_contacts(&world));
        for (_e, radar) in world.query_mut::<&mut Radar>() {
            radar.add_contact(ContactId(0)).unwrap();
        }
        assert!(any_radar_has_contacts(&world));
    }
}
