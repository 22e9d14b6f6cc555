//! Geoscape engine: the campaign-side radar simulation.
//!
//! `GeoscapeEngine` owns the hecs world of radar owners, the contact
//! registry, the campaign clock and the seeded RNG. It applies queued
//! commands, moves everything, runs a detection pass at every detection
//! interval boundary, and returns a `GeoscapeSnapshot` per tick. Headless
//! and deterministic for a given seed.

use std::collections::{HashSet, VecDeque};

use hecs::{Entity, EntityBuilder, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use geoscape_core::commands::GeoscapeCommand;
use geoscape_core::components::*;
use geoscape_core::config::RadarConfig;
use geoscape_core::enums::*;
use geoscape_core::error::{GeoscapeError, Result};
use geoscape_core::events::GeoscapeEvent;
use geoscape_core::radar::Radar;
use geoscape_core::route::{Flight, Route};
use geoscape_core::state::GeoscapeSnapshot;
use geoscape_core::types::{ContactId, GeoPosition, GeoscapeTime, SiteId};
use geoscape_coverage::{Coverage, CoverageLevel};

use crate::registry::ContactRegistry;
use crate::systems;
use crate::systems::radar::detection::ActiveRadar;
use crate::systems::radar::notify;
use crate::systems::radar::overlay::OverlayState;
use crate::systems::spawner::SpawnSchedule;
use crate::world_setup;

/// Configuration for starting a new geoscape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed. Same seed and inputs give the same campaign.
    pub seed: u64,
    pub radar: RadarConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            radar: RadarConfig::default(),
        }
    }
}

/// Everything needed to rebuild one radar owner.
///
/// Sensored sets are never part of a record; they are rebuilt from the
/// contacts' `detected` flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteRecord {
    pub id: SiteId,
    pub kind: RadarOwnerKind,
    pub position: GeoPosition,
    pub radar: Radar,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub installation: Option<Installation>,
    #[serde(default)]
    pub aircraft: Option<Aircraft>,
    #[serde(default)]
    pub flight: Option<Flight>,
}

/// The geoscape simulation. Owns the ECS world and all radar state.
pub struct GeoscapeEngine {
    world: World,
    registry: ContactRegistry,
    config: RadarConfig,
    seed: u64,
    time: GeoscapeTime,
    clock: ClockState,
    rng: ChaCha8Rng,
    next_site_id: u32,
    /// Simulated seconds since the last detection pass.
    since_last_pass: f64,
    command_queue: VecDeque<GeoscapeCommand>,
    active_buffer: Vec<ActiveRadar>,
    landed_buffer: Vec<Entity>,
    events: Vec<GeoscapeEvent>,
    overlay: OverlayState,
    spawn_schedule: SpawnSchedule,
    coverage: Coverage,
}

impl GeoscapeEngine {
    /// Create an empty geoscape.
    pub fn new(config: SimConfig) -> Result<Self> {
        config.radar.validate()?;
        let coverage = Coverage::new(config.radar.coverage_width, config.radar.coverage_height);
        Ok(Self {
            world: World::new(),
            registry: ContactRegistry::new(),
            seed: config.seed,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config: config.radar,
            time: GeoscapeTime::default(),
            clock: ClockState::default(),
            next_site_id: 0,
            since_last_pass: 0.0,
            command_queue: VecDeque::new(),
            active_buffer: Vec::new(),
            landed_buffer: Vec::new(),
            events: Vec::new(),
            overlay: OverlayState::default(),
            spawn_schedule: SpawnSchedule::default(),
            coverage,
        })
    }

    /// Rebuild an engine from stored sites and contacts.
    ///
    /// Sensored sets are reconstructed from the contacts' `detected` flags
    /// and the overlay is shown if anything ends up tracked.
    pub fn from_parts(
        config: SimConfig,
        time: GeoscapeTime,
        sites: Vec<SiteRecord>,
        contacts: Vec<Contact>,
        overlay_pinned: bool,
    ) -> Result<Self> {
        let mut engine = Self::new(config)?;
        engine.time = time;
        // Passes fall on multiples of the interval, so the phase follows from the clock.
        engine.since_last_pass = time
            .elapsed_secs
            .rem_euclid(engine.config.detection_interval_secs);
        engine.registry = ContactRegistry::from_contacts(contacts)?;

        let mut seen = HashSet::new();
        for record in sites {
            if !seen.insert(record.id) {
                return Err(GeoscapeError::Config(format!(
                    "duplicate site id {}",
                    record.id
                )));
            }
            engine.next_site_id = engine.next_site_id.max(record.id.0 + 1);
            engine.spawn_record(record);
        }

        engine.overlay.set_manual(overlay_pinned);
        engine.rebuild_static_coverage();
        engine.restore_sensored_contacts();
        engine.events.clear();
        Ok(engine)
    }

    /// Set the clock directly, outside the command queue. Used when restoring.
    pub fn set_clock(&mut self, clock: ClockState) {
        self.clock = clock;
    }

    /// Queue a command for the next tick boundary.
    pub fn queue_command(&mut self, command: GeoscapeCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = GeoscapeCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the campaign by `elapsed_secs` simulated seconds.
    ///
    /// Everything moves up to each detection interval boundary, then a
    /// detection pass runs. With `halt_on_detection` a new contact pauses
    /// the clock and the rest of `elapsed_secs` is discarded.
    pub fn tick(&mut self, elapsed_secs: f64) -> GeoscapeSnapshot {
        self.process_commands();

        if self.clock == ClockState::Running && elapsed_secs.is_finite() && elapsed_secs > 0.0 {
            self.advance_clock(elapsed_secs);
        }
        if self.overlay.radar_overlay {
            self.rebuild_dynamic_coverage();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.registry,
            &self.time,
            self.clock,
            &self.overlay,
            events,
        )
    }

    /// Current picture without advancing or draining events.
    pub fn snapshot(&self) -> GeoscapeSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.registry,
            &self.time,
            self.clock,
            &self.overlay,
            Vec::new(),
        )
    }

    // ---- Radar owners ----

    /// Found a base. Its radar is off until `set_base_radar_level`.
    pub fn found_base(&mut self, name: impl Into<String>, position: GeoPosition) -> SiteId {
        let id = self.allocate_site_id();
        world_setup::spawn_base(&mut self.world, id, name.into(), position);
        info!(site = %id, %position, "base founded");
        id
    }

    /// A base's radar building changed level. Level 0 switches the radar off.
    pub fn set_base_radar_level(&mut self, site: SiteId, level: u32) -> Result<()> {
        let entity = self.site_entity(site, RadarOwnerKind::Base)?;
        let held_before = notify::held_contacts(&self.world, self.registry.len());
        let changed = {
            let mut radar = self
                .world
                .get::<&mut Radar>(entity)
                .map_err(|_| GeoscapeError::UnknownSite(site))?;
            let changed = radar.set_range(
                self.config.base_range,
                self.config.base_tracking_range,
                level,
                self.config.upgrade_factor,
            );
            if !radar.is_operational() {
                radar.clear_sensored();
            }
            debug!(site = %site, level, range = radar.range, "base radar level set");
            changed
        };
        if changed {
            self.rebuild_static_coverage();
        }
        self.after_radar_loss(&held_before);
        Ok(())
    }

    /// Build an installation. Its radar comes up once it is `Working`.
    pub fn build_installation(
        &mut self,
        position: GeoPosition,
        range: f64,
        tracking_range: f64,
    ) -> SiteId {
        let id = self.allocate_site_id();
        world_setup::spawn_installation(&mut self.world, id, position, range, tracking_range);
        info!(site = %id, %position, range, tracking_range, "installation placed");
        id
    }

    /// Change an installation's status. Anything but `Working` zeroes its radar.
    pub fn set_installation_status(
        &mut self,
        site: SiteId,
        status: InstallationStatus,
    ) -> Result<()> {
        let entity = self.site_entity(site, RadarOwnerKind::Installation)?;
        let held_before = notify::held_contacts(&self.world, self.registry.len());
        let level = self.config.installation_level;
        let factor = self.config.upgrade_factor;
        let changed = {
            let (installation, radar) = self
                .world
                .query_one_mut::<(&mut Installation, &mut Radar)>(entity)
                .map_err(|_| GeoscapeError::UnknownSite(site))?;
            installation.status = status;
            if status == InstallationStatus::Working {
                radar.set_range(
                    installation.base_range,
                    installation.base_tracking_range,
                    level,
                    factor,
                )
            } else {
                radar.clear_sensored();
                radar.set_range(0.0, 0.0, 0, factor)
            }
        };
        info!(site = %site, ?status, "installation status changed");
        if changed {
            self.rebuild_static_coverage();
        }
        self.after_radar_loss(&held_before);
        Ok(())
    }

    /// Add an aircraft in its hangar with an onboard radar at `level`.
    pub fn add_aircraft(
        &mut self,
        home: Option<SiteId>,
        position: GeoPosition,
        level: u32,
    ) -> Result<SiteId> {
        if let Some(home) = home {
            self.site_entity(home, RadarOwnerKind::Base)?;
        }
        let id = self.allocate_site_id();
        world_setup::spawn_aircraft(&mut self.world, &self.config, id, home, position, level);
        debug!(site = %id, ?home, "aircraft added");
        Ok(id)
    }

    /// Send an aircraft towards `destination` at `speed` degrees per hour.
    /// An airborne aircraft is rerouted from where it is.
    pub fn launch_aircraft(
        &mut self,
        site: SiteId,
        destination: GeoPosition,
        speed: f64,
    ) -> Result<()> {
        let entity = self.site_entity(site, RadarOwnerKind::Aircraft)?;
        let start = *self
            .world
            .get::<&GeoPosition>(entity)
            .map_err(|_| GeoscapeError::UnknownSite(site))?;
        let flight = Flight::new(Route::great_circle(start, destination)?, speed);
        self.world
            .insert_one(entity, flight)
            .map_err(|_| GeoscapeError::UnknownSite(site))?;
        if let Ok(mut aircraft) = self.world.get::<&mut Aircraft>(entity) {
            aircraft.status = AircraftStatus::Airborne;
        }
        info!(site = %site, from = %start, to = %destination, speed, "aircraft launched");
        Ok(())
    }

    /// Land an aircraft where it is. Its radar stops holding contacts.
    pub fn land_aircraft(&mut self, site: SiteId) -> Result<()> {
        let entity = self.site_entity(site, RadarOwnerKind::Aircraft)?;
        let held_before = notify::held_contacts(&self.world, self.registry.len());
        {
            let (aircraft, radar) = self
                .world
                .query_one_mut::<(&mut Aircraft, &mut Radar)>(entity)
                .map_err(|_| GeoscapeError::UnknownSite(site))?;
            aircraft.status = AircraftStatus::Home;
            radar.clear_sensored();
        }
        let _ = self.world.remove_one::<Flight>(entity);
        info!(site = %site, "aircraft landed");
        self.events.push(GeoscapeEvent::AircraftLanded { site });
        self.after_radar_loss(&held_before);
        Ok(())
    }

    /// Remove a radar owner from the geoscape.
    pub fn remove_site(&mut self, site: SiteId) -> Result<()> {
        let entity = world_setup::find_site(&self.world, site)
            .ok_or(GeoscapeError::UnknownSite(site))?;
        let held_before = notify::held_contacts(&self.world, self.registry.len());
        let kind = self
            .world
            .get::<&RadarSite>(entity)
            .map(|s| s.kind)
            .map_err(|_| GeoscapeError::UnknownSite(site))?;
        self.world
            .despawn(entity)
            .map_err(|_| GeoscapeError::UnknownSite(site))?;
        info!(site = %site, ?kind, "site removed");
        if kind.is_static() {
            self.rebuild_static_coverage();
        }
        self.after_radar_loss(&held_before);
        Ok(())
    }

    // ---- Contacts ----

    /// Put a contact on the geoscape.
    pub fn spawn_contact(&mut self, contact: Contact) -> Result<ContactId> {
        let id = self.registry.spawn(contact)?;
        info!(contact = %id, "contact spawned");
        Ok(id)
    }

    /// Put a contact on the geoscape flying from `from` to `to`.
    pub fn spawn_contact_on_route(
        &mut self,
        from: GeoPosition,
        to: GeoPosition,
        speed: f64,
    ) -> Result<ContactId> {
        let flight = Flight::new(Route::great_circle(from, to)?, speed);
        self.spawn_contact(Contact::with_flight(from, flight))
    }

    /// Destroy a contact. The registry compacts and every radar is told in
    /// the same step, so ids above `id` shift down everywhere at once.
    pub fn destroy_contact(&mut self, id: ContactId) -> Result<Contact> {
        let contact = self.registry.remove(id)?;
        let held = notify::notify_contact_removed_all(&mut self.world, id, true);
        info!(contact = %id, radars = held, "contact destroyed");
        self.events.push(GeoscapeEvent::ContactRemoved {
            contact: id,
            destroyed: true,
        });
        self.overlay.deactivate_if_idle(&self.world, &mut self.events);
        Ok(contact)
    }

    /// A contact landed: it keeps its slot but radars stop seeing it.
    pub fn hide_contact(&mut self, id: ContactId) -> Result<()> {
        let contact = self.contact_mut(id)?;
        contact.landed = true;
        contact.flight = None;
        let held = notify::notify_contact_removed_all(&mut self.world, id, false);
        info!(contact = %id, radars = held, "contact landed");
        self.events.push(GeoscapeEvent::ContactRemoved {
            contact: id,
            destroyed: false,
        });
        self.overlay.deactivate_if_idle(&self.world, &mut self.events);
        Ok(())
    }

    /// Take off again from where the contact landed.
    pub fn relaunch_contact(
        &mut self,
        id: ContactId,
        destination: GeoPosition,
        speed: f64,
    ) -> Result<()> {
        let contact = self.contact_mut(id)?;
        let route = Route::great_circle(contact.position, destination)?;
        contact.flight = Some(Flight::new(route, speed));
        contact.landed = false;
        info!(contact = %id, to = %destination, "contact relaunched");
        Ok(())
    }

    /// Forget that a contact was ever detected. Every radar drops it and it
    /// must be picked up by a first-contact roll again.
    pub fn forget_contact(&mut self, id: ContactId) -> Result<()> {
        self.contact_mut(id)?.detected = false;
        let held = notify::notify_contact_removed_all(&mut self.world, id, false);
        if held > 0 {
            self.events.push(GeoscapeEvent::ContactLost { contact: id });
        }
        debug!(contact = %id, radars = held, "contact forgotten");
        self.overlay.deactivate_if_idle(&self.world, &mut self.events);
        Ok(())
    }

    pub fn set_spawn_schedule(&mut self, schedule: SpawnSchedule) {
        self.spawn_schedule = schedule;
    }

    pub fn spawn_schedule(&self) -> &SpawnSchedule {
        &self.spawn_schedule
    }

    // ---- Queries ----

    /// Whether `pos` is inside the detection range of any base or installation.
    pub fn point_within_any_base_radar(&self, pos: GeoPosition) -> bool {
        systems::radar::coverage::point_within_any_base_radar(&self.world, pos)
    }

    /// Coverage at `pos`, including airborne aircraft as of the last tick
    /// with the overlay shown.
    pub fn coverage_at(&self, pos: GeoPosition) -> CoverageLevel {
        self.coverage.level_at(&pos)
    }

    pub fn coverage(&self) -> &Coverage {
        &self.coverage
    }

    /// Contacts held by one radar, sorted.
    pub fn sensored_by(&self, site: SiteId) -> Result<Vec<ContactId>> {
        let entity =
            world_setup::find_site(&self.world, site).ok_or(GeoscapeError::UnknownSite(site))?;
        let radar = self
            .world
            .get::<&Radar>(entity)
            .map_err(|_| GeoscapeError::UnknownSite(site))?;
        let mut ids = radar.sensored().to_vec();
        ids.sort_unstable();
        Ok(ids)
    }

    /// Copy of a site's radar, sensored set included.
    pub fn radar(&self, site: SiteId) -> Result<Radar> {
        let entity =
            world_setup::find_site(&self.world, site).ok_or(GeoscapeError::UnknownSite(site))?;
        self.world
            .get::<&Radar>(entity)
            .map(|r| (*r).clone())
            .map_err(|_| GeoscapeError::UnknownSite(site))
    }

    /// Whether any radar tracks anything.
    pub fn any_contact_tracked(&self) -> bool {
        notify::any_radar_has_contacts(&self.world)
    }

    pub fn contact(&self, id: ContactId) -> Option<&Contact> {
        self.registry.get(id)
    }

    pub fn registry(&self) -> &ContactRegistry {
        &self.registry
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn time(&self) -> GeoscapeTime {
        self.time
    }

    pub fn clock(&self) -> ClockState {
        self.clock
    }

    pub fn config(&self) -> &RadarConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn overlay(&self) -> OverlayState {
        self.overlay
    }

    /// Every radar owner as a record, sorted by site id.
    pub fn site_records(&self) -> Vec<SiteRecord> {
        let mut query = self.world.query::<(
            &RadarSite,
            &GeoPosition,
            &Radar,
            Option<&Base>,
            Option<&Installation>,
            Option<&Aircraft>,
            Option<&Flight>,
        )>();
        let mut records: Vec<SiteRecord> = query
            .iter()
            .map(
                |(_, (site, position, radar, base, installation, aircraft, flight))| {
                    let mut radar = radar.clone();
                    radar.clear_sensored();
                    SiteRecord {
                        id: site.id,
                        kind: site.kind,
                        position: *position,
                        radar,
                        name: base.map(|b| b.name.clone()),
                        installation: installation.cloned(),
                        aircraft: aircraft.cloned(),
                        flight: flight.cloned(),
                    }
                },
            )
            .collect();
        records.sort_by_key(|r| r.id);
        records
    }

    /// Rebuild every sensored set from the contacts' `detected` flags.
    /// Returns the number of (radar, contact) pairs restored.
    pub fn restore_sensored_contacts(&mut self) -> usize {
        systems::radar::detection::collect_active(&self.world, &mut self.active_buffer);
        let pairs = notify::restore_sensored_contacts(
            &mut self.world,
            &self.registry,
            &self.active_buffer,
        );
        if pairs > 0 {
            self.overlay.activate(&mut self.events);
        }
        info!(pairs, "sensored sets restored");
        pairs
    }

    // ---- Internals ----

    fn allocate_site_id(&mut self) -> SiteId {
        let id = SiteId(self.next_site_id);
        self.next_site_id += 1;
        id
    }

    /// Entity owning `site`, which must be of `kind`.
    fn site_entity(&self, site: SiteId, kind: RadarOwnerKind) -> Result<Entity> {
        let entity =
            world_setup::find_site(&self.world, site).ok_or(GeoscapeError::UnknownSite(site))?;
        let actual = self
            .world
            .get::<&RadarSite>(entity)
            .map(|s| s.kind)
            .map_err(|_| GeoscapeError::UnknownSite(site))?;
        if actual != kind {
            return Err(GeoscapeError::WrongSiteKind(site));
        }
        Ok(entity)
    }

    fn contact_mut(&mut self, id: ContactId) -> Result<&mut Contact> {
        let count = self.registry.len();
        self.registry
            .get_mut(id)
            .ok_or(GeoscapeError::ContactOutOfBounds { id, count })
    }

    fn spawn_record(&mut self, record: SiteRecord) {
        let mut radar = record.radar;
        radar.clear_sensored();

        let mut builder = EntityBuilder::new();
        builder
            .add(RadarSite {
                id: record.id,
                kind: record.kind,
            })
            .add(record.position)
            .add(radar);
        match record.kind {
            RadarOwnerKind::Base => {
                builder.add(Base {
                    name: record.name.unwrap_or_default(),
                });
            }
            RadarOwnerKind::Installation => {
                builder.add(record.installation.unwrap_or_default());
            }
            RadarOwnerKind::Aircraft => {
                builder.add(record.aircraft.unwrap_or_default());
                if let Some(flight) = record.flight {
                    builder.add(flight);
                }
            }
        }
        self.world.spawn(builder.build());
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: GeoscapeCommand) {
        match command {
            GeoscapeCommand::Pause => self.clock = ClockState::Paused,
            GeoscapeCommand::Resume => self.clock = ClockState::Running,
            GeoscapeCommand::SetRadarOverlay { enabled } => {
                self.overlay.set_manual(enabled);
                if enabled {
                    self.rebuild_dynamic_coverage();
                }
            }
            GeoscapeCommand::SetBaseRadarLevel { site, level } => {
                if let Err(err) = self.set_base_radar_level(site, level) {
                    warn!(%err, "SetBaseRadarLevel rejected");
                }
            }
        }
    }

    fn advance_clock(&mut self, elapsed_secs: f64) {
        let interval = self.config.detection_interval_secs;
        let mut remaining = elapsed_secs;
        while remaining > 0.0 {
            let to_boundary = (interval - self.since_last_pass).max(0.0);
            if remaining < to_boundary {
                self.move_entities(remaining);
                self.since_last_pass += remaining;
                break;
            }

            self.move_entities(to_boundary);
            remaining -= to_boundary;
            self.since_last_pass = 0.0;

            if let Some(first) = self.run_detection_pass() {
                if self.config.halt_on_detection {
                    self.clock = ClockState::Paused;
                    info!(contact = %first, discarded_secs = remaining, "clock halted");
                    self.events.push(GeoscapeEvent::ClockHalted { contact: first });
                    break;
                }
            }
        }
    }

    fn move_entities(&mut self, dt: f64) {
        if dt <= 0.0 {
            return;
        }
        self.time.advance(dt);
        systems::movement::run_contacts(&mut self.registry, dt, &mut self.events);

        let held_before = notify::held_contacts(&self.world, self.registry.len());
        let landed = systems::movement::run_aircraft(
            &mut self.world,
            dt,
            &mut self.landed_buffer,
            &mut self.events,
        );
        if landed > 0 {
            self.after_radar_loss(&held_before);
        }
    }

    /// Returns the first contact detected for the first time, if any.
    fn run_detection_pass(&mut self) -> Option<ContactId> {
        self.time.detection_passes += 1;
        systems::spawner::run(
            &mut self.registry,
            &mut self.spawn_schedule,
            self.time.elapsed_secs,
        );

        systems::radar::detection::collect_active(&self.world, &mut self.active_buffer);
        let report = systems::radar::detection::run(
            &mut self.world,
            &mut self.registry,
            &self.active_buffer,
            self.config.detection_probability(),
            &mut self.rng,
            &mut self.events,
        );
        debug!(
            pass = self.time.detection_passes,
            radars = self.active_buffer.len(),
            contacts = self.registry.len(),
            detected = report.newly_detected.len(),
            evicted = report.evicted,
            "detection pass"
        );

        if !report.newly_detected.is_empty() {
            self.overlay.activate(&mut self.events);
        }
        if report.evicted > 0 {
            self.overlay.deactivate_if_idle(&self.world, &mut self.events);
        }
        report.newly_detected.first().copied()
    }

    /// Emit `ContactLost` for detected contacts no radar holds any more,
    /// then let the overlay switch off if nothing is tracked.
    fn after_radar_loss(&mut self, held_before: &[bool]) {
        let held_after = notify::held_contacts(&self.world, self.registry.len());
        for (id, contact) in self.registry.iter() {
            let before = held_before.get(id.index()).copied().unwrap_or(false);
            if contact.detected && before && !held_after[id.index()] {
                info!(contact = %id, "contact lost by every radar");
                self.events.push(GeoscapeEvent::ContactLost { contact: id });
            }
        }
        self.overlay.deactivate_if_idle(&self.world, &mut self.events);
    }

    fn rebuild_static_coverage(&mut self) {
        let sources = systems::radar::coverage::static_sources(&self.world);
        self.coverage.rebuild_static(&sources);
        self.events.push(GeoscapeEvent::StaticCoverageRebuilt);
    }

    fn rebuild_dynamic_coverage(&mut self) {
        let aircraft = systems::radar::coverage::airborne_sources(&self.world);
        self.coverage.rebuild_dynamic(&aircraft);
    }
}
