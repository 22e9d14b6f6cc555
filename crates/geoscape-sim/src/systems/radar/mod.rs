//! Radar systems: detection passes, sensored-set upkeep, overlay and coverage.

pub mod coverage;
pub mod detection;
pub mod notify;
pub mod overlay;
