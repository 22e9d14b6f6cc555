//! Geoscape radar simulation.
//!
//! Owns the hecs world of radar owners and the contact registry, advances
//! the campaign clock in detection intervals, and produces
//! `GeoscapeSnapshot`s for the frontend.

pub mod engine;
pub mod registry;
pub mod scenario;
pub mod systems;
pub mod world_setup;

pub use engine::{GeoscapeEngine, SimConfig, SiteRecord};
pub use geoscape_core as core;
pub use registry::ContactRegistry;
