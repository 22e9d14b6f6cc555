//! Error types for the geoscape simulation.

use thiserror::Error;

use crate::types::{ContactId, SiteId};

/// Soft failures when editing a radar's sensored set.
///
/// The detection engine logs these and carries on; they never abort a pass.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    #[error("sensored set is full ({capacity} contacts)")]
    Full { capacity: usize },

    #[error("{0} is already sensored by this radar")]
    AlreadySensored(ContactId),
}

/// Errors returned by engine operations that take caller-provided ids or data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoscapeError {
    #[error("unknown radar site: {0}")]
    UnknownSite(SiteId),

    #[error("{id} is outside the contact registry (count {count})")]
    ContactOutOfBounds { id: ContactId, count: usize },

    #[error("contact registry is full ({capacity} contacts)")]
    RegistryFull { capacity: usize },

    #[error("{0} has the wrong kind for this operation")]
    WrongSiteKind(SiteId),

    #[error("invalid route: {0}")]
    InvalidRoute(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GeoscapeError>;
