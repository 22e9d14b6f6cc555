//! Core types and definitions for the geoscape radar simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! spherical geometry, radars, contacts and routes, components,
//! commands, snapshots, events, configuration and constants.
//! It has no dependency on the ECS or any runtime.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod geo;
pub mod radar;
pub mod route;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
