//! Movement system.
//!
//! Flies contacts and airborne aircraft along their routes. Runs before
//! every detection pass so detection sees current positions.

use hecs::{Entity, World};
use tracing::{debug, info};

use geoscape_core::components::{Aircraft, RadarSite};
use geoscape_core::enums::AircraftStatus;
use geoscape_core::events::GeoscapeEvent;
use geoscape_core::radar::Radar;
use geoscape_core::route::Flight;
use geoscape_core::types::GeoPosition;

use crate::registry::ContactRegistry;

/// Advance every contact on a route by `dt` simulated seconds.
///
/// Contacts that reach the end of their route hold position there and
/// emit `ContactArrived` once.
pub fn run_contacts(registry: &mut ContactRegistry, dt: f64, events: &mut Vec<GeoscapeEvent>) {
    for (id, contact) in registry.iter_mut() {
        if !contact.is_on_geoscape() {
            continue;
        }
        let Some(flight) = contact.flight.as_mut() else {
            continue;
        };
        if flight.has_arrived() {
            continue;
        }
        if let Some(step) = flight.advance(dt) {
            contact.position = step.position;
            if step.arrived {
                debug!(contact = %id, position = %step.position, "contact reached destination");
                events.push(GeoscapeEvent::ContactArrived { contact: id });
            }
        }
    }
}

/// Advance every airborne aircraft by `dt` simulated seconds.
///
/// Aircraft that arrive land where they are: status goes back to `Home`,
/// the `Flight` is removed and their radar stops holding contacts.
/// Returns the number of aircraft that landed.
pub fn run_aircraft(
    world: &mut World,
    dt: f64,
    landed_buffer: &mut Vec<Entity>,
    events: &mut Vec<GeoscapeEvent>,
) -> usize {
    landed_buffer.clear();
    for (entity, (site, aircraft, position, flight, radar)) in world.query_mut::<(
        &RadarSite,
        &mut Aircraft,
        &mut GeoPosition,
        &mut Flight,
        &mut Radar,
    )>() {
        if aircraft.status != AircraftStatus::Airborne {
            continue;
        }
        let Some(step) = flight.advance(dt) else {
            continue;
        };
        *position = step.position;
        if step.arrived {
            aircraft.status = AircraftStatus::Home;
            radar.clear_sensored();
            landed_buffer.push(entity);
            info!(site = %site.id, position = %step.position, "aircraft landed");
            events.push(GeoscapeEvent::AircraftLanded { site: site.id });
        }
    }

    for &entity in landed_buffer.iter() {
        let _ = world.remove_one::<Flight>(entity);
    }
    landed_buffer.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoscape_core::components::Contact;
    use geoscape_core::config::RadarConfig;
    use geoscape_core::route::Route;
    use geoscape_core::types::{ContactId, SiteId};

    use crate::world_setup::spawn_aircraft;

    fn flight_east(degrees: f64, speed: f64) -> Flight {
        let route =
            Route::great_circle(GeoPosition::new(0.0, 0.0), GeoPosition::new(degrees, 0.0))
                .unwrap();
        Flight::new(route, speed)
    }

    #[test]
    fn test_contact_moves_speed_times_time() {
        let mut registry = ContactRegistry::new();
        let id = registry
            .spawn(Contact::with_flight(GeoPosition::new(0.0, 0.0), flight_east(40.0, 10.0)))
            .unwrap();
        let mut events = Vec::new();

        // 10 deg/hour for 1.5 hours.
        run_contacts(&mut registry, 5400.0, &mut events);
        let pos = registry.get(id).unwrap().position;
        assert!((pos.lon - 15.0).abs() < 1e-6, "lon {}", pos.lon);
        assert!(pos.lat.abs() < 1e-6);
        assert!(events.is_empty());
    }

    #[test]
    fn test_contact_arrival_emitted_once() {
        let mut registry = ContactRegistry::new();
        registry
            .spawn(Contact::with_flight(GeoPosition::new(0.0, 0.0), flight_east(5.0, 10.0)))
            .unwrap();
        let mut events = Vec::new();

        run_contacts(&mut registry, 3600.0, &mut events);
        run_contacts(&mut registry, 3600.0, &mut events);
        assert_eq!(events, vec![GeoscapeEvent::ContactArrived { contact: ContactId(0) }]);
        let pos = registry.get(ContactId(0)).unwrap().position;
        assert!((pos.lon - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_landed_contact_does_not_move() {
        let mut registry = ContactRegistry::new();
        let id = registry
            .spawn(Contact::with_flight(GeoPosition::new(0.0, 0.0), flight_east(40.0, 10.0)))
            .unwrap();
        registry.get_mut(id).unwrap().landed = true;
        run_contacts(&mut registry, 3600.0, &mut Vec::new());
        assert_eq!(registry.get(id).unwrap().position, GeoPosition::new(0.0, 0.0));
    }

    #[test]
    fn test_aircraft_lands_on_arrival() {
        let mut world = World::new();
        let config = RadarConfig::default();
        let e = spawn_aircraft(&mut world, &config, SiteId(4), None, GeoPosition::default(), 1);
        world.get::<&mut Aircraft>(e).unwrap().status = AircraftStatus::Airborne;
        world.insert_one(e, flight_east(10.0, 20.0)).unwrap();
        world.get::<&mut Radar>(e).unwrap().add_contact(ContactId(0)).unwrap();

        let mut buffer = Vec::new();
        let mut events = Vec::new();
        assert_eq!(run_aircraft(&mut world, 900.0, &mut buffer, &mut events), 0);
        assert_eq!(run_aircraft(&mut world, 3600.0, &mut buffer, &mut events), 1);

        assert_eq!(events, vec![GeoscapeEvent::AircraftLanded { site: SiteId(4) }]);
        assert_eq!(world.get::<&Aircraft>(e).unwrap().status, AircraftStatus::Home);
        assert!(world.get::<&Flight>(e).is_err());
        assert!(!world.get::<&Radar>(e).unwrap().has_contacts());
        let pos = *world.get::<&GeoPosition>(e).unwrap();
        assert!((pos.lon - 10.0).abs() < 1e-9);
    }
}
