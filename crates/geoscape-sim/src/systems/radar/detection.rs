//! Radar detection pass.
//!
//! Runs once per detection interval. For every (radar, contact) pair the
//! radar either keeps tracking an already detected contact inside its
//! tracking range, rolls for first contact inside its detection range, or
//! drops the contact. A successful first-contact roll marks the contact
//! detected and hands it to every radar in tracking range at once, so the
//! order radars are evaluated in never changes the outcome.

use hecs::{Entity, World};
use rand::Rng;
use tracing::{debug, info, warn};

use geoscape_core::components::{Aircraft, Contact, Installation, RadarSite};
use geoscape_core::enums::SensorState;
use geoscape_core::events::GeoscapeEvent;
use geoscape_core::geo;
use geoscape_core::radar::Radar;
use geoscape_core::types::{ContactId, GeoPosition, SiteId};

use crate::registry::ContactRegistry;
use crate::systems::radar::notify;
use crate::world_setup;

/// A radar taking part in the current pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveRadar {
    pub entity: Entity,
    pub site: SiteId,
    pub position: GeoPosition,
}

/// Result of evaluating one (radar, contact) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOutcome {
    /// Already detected and inside this radar's tracking range.
    Tracked,
    /// First-contact roll succeeded. The caller must propagate the detection.
    NewlyDetected,
    /// Not sensed by this radar. `evicted` is set when the radar held it before.
    NotSensored { evicted: bool },
}

impl PairOutcome {
    pub fn state(self) -> SensorState {
        match self {
            PairOutcome::Tracked | PairOutcome::NewlyDetected => SensorState::Sensored,
            PairOutcome::NotSensored { .. } => SensorState::NotSensored,
        }
    }
}

/// What a whole pass changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PassReport {
    /// Contacts detected for the first time, in evaluation order.
    pub newly_detected: Vec<ContactId>,
    /// Number of (radar, contact) pairs dropped.
    pub evicted: usize,
}

/// Fill `out` with every radar that participates in detection.
///
/// Bases always take part, installations only while working, aircraft
/// only while airborne. Sorted by site id.
pub fn collect_active(world: &World, out: &mut Vec<ActiveRadar>) {
    out.clear();
    let mut query = world.query::<(
        &RadarSite,
        &GeoPosition,
        Option<&Installation>,
        Option<&Aircraft>,
    )>();
    for (entity, (site, position, installation, aircraft)) in query.iter() {
        if world_setup::participates(installation, aircraft) {
            out.push(ActiveRadar {
                entity,
                site: site.id,
                position: *position,
            });
        }
    }
    out.sort_by_key(|r| r.site);
}

/// Evaluate one (radar, contact) pair and update the radar's sensored set.
///
/// Does not touch the contact. On `NewlyDetected` the caller marks it
/// detected and runs [`notify::add_detected_contact_to_every_radar`].
pub fn check_contact_sensored<R: Rng>(
    radar: &mut Radar,
    radar_position: GeoPosition,
    contact: &Contact,
    id: ContactId,
    probability: f64,
    rng: &mut R,
) -> PairOutcome {
    if !radar.is_operational() || !contact.is_on_geoscape() {
        return PairOutcome::NotSensored {
            evicted: radar.remove_contact(id),
        };
    }

    let dist = geo::great_circle_distance(radar_position, contact.position);
    if dist < radar.applicable_range(contact.detected) {
        if contact.detected {
            if radar.is_sensored(id).is_none() {
                if let Err(err) = radar.add_contact(id) {
                    warn!(contact = %id, %err, "could not start tracking contact");
                    return PairOutcome::NotSensored { evicted: false };
                }
                debug!(contact = %id, dist, "contact entered tracking range");
            }
            return PairOutcome::Tracked;
        }

        if radar.remove_contact(id) {
            warn!(contact = %id, "undetected contact was sensored, dropped");
        }
        if rng.gen_bool(probability) {
            return PairOutcome::NewlyDetected;
        }
        return PairOutcome::NotSensored { evicted: false };
    }

    let evicted = radar.remove_contact(id);
    if evicted {
        debug!(contact = %id, dist, "contact left tracking range");
    }
    PairOutcome::NotSensored { evicted }
}

/// Run one detection pass over every active radar and every contact.
pub fn run<R: Rng>(
    world: &mut World,
    registry: &mut ContactRegistry,
    radars: &[ActiveRadar],
    probability: f64,
    rng: &mut R,
    events: &mut Vec<GeoscapeEvent>,
) -> PassReport {
    let mut report = PassReport::default();

    // Sensored sets must never reference ids past the end of the roster.
    for (_entity, radar) in world.query_mut::<&mut Radar>() {
        let dropped = radar.retain_valid(registry.len());
        if dropped > 0 {
            warn!(dropped, count = registry.len(), "dropped out-of-bounds contact ids");
        }
    }

    let held_before = notify::held_contacts(world, registry.len());

    for index in 0..registry.len() {
        let id = ContactId(index as u32);
        for active in radars {
            let Some(contact) = registry.get(id) else {
                break;
            };

            let outcome = match world.get::<&mut Radar>(active.entity) {
                Ok(mut radar) => check_contact_sensored(
                    &mut radar,
                    active.position,
                    contact,
                    id,
                    probability,
                    rng,
                ),
                Err(_) => {
                    warn!(site = %active.site, "active radar vanished during pass");
                    continue;
                }
            };

            match outcome {
                PairOutcome::NewlyDetected => {
                    let position = contact.position;
                    if let Some(contact) = registry.get_mut(id) {
                        contact.detected = true;
                    }
                    let sensored_by =
                        notify::add_detected_contact_to_every_radar(world, radars, id, position);
                    info!(
                        contact = %id,
                        %position,
                        by = %active.site,
                        radars = sensored_by.len(),
                        "new contact detected"
                    );
                    events.push(GeoscapeEvent::ContactDetected {
                        contact: id,
                        position,
                        sensored_by,
                    });
                    report.newly_detected.push(id);
                }
                PairOutcome::NotSensored { evicted: true } => report.evicted += 1,
                PairOutcome::Tracked | PairOutcome::NotSensored { evicted: false } => {}
            }
        }
    }

    let held_after = notify::held_contacts(world, registry.len());
    for (id, contact) in registry.iter() {
        if contact.detected && held_before[id.index()] && !held_after[id.index()] {
            info!(contact = %id, "contact lost by every radar");
            events.push(GeoscapeEvent::ContactLost { contact: id });
        }
    }

    report
}
