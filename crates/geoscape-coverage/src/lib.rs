//! Radar coverage rasters for the geoscape overlay.
//!
//! Coverage is kept on an equirectangular longitude/latitude grid in two
//! layers: a static layer from bases and installations, rebuilt only when one
//! of their ranges changes, and a dynamic layer that adds moving aircraft
//! radars on top of a copy of the static one.

pub mod layers;
pub mod mask;

pub use layers::{Coverage, RadarSource};
pub use mask::{CoverageLevel, CoverageMask};
