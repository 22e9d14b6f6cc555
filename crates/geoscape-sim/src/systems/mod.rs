//! Systems that operate on the geoscape world.
//!
//! Systems are free functions over `&mut World` and the contact registry.
//! They hold no state of their own.

pub mod movement;
pub mod radar;
pub mod snapshot;
pub mod spawner;
