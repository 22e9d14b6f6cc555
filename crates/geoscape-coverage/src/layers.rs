//! Static and dynamic coverage layers.

use serde::{Deserialize, Serialize};
use tracing::debug;

use geoscape_core::types::GeoPosition;

use crate::mask::{CoverageLevel, CoverageMask};

/// One radar as seen by the coverage painter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarSource {
    pub position: GeoPosition,
    pub range: f64,
    pub tracking_range: f64,
}

/// Two-layer coverage picture.
///
/// `static_layer` holds bases and installations. `dynamic_layer` is the static
/// layer plus every airborne aircraft radar and is what the overlay draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coverage {
    static_layer: CoverageMask,
    dynamic_layer: CoverageMask,
}

impl Coverage {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            static_layer: CoverageMask::new(width, height),
            dynamic_layer: CoverageMask::new(width, height),
        }
    }

    /// Repaint the static layer from scratch, then refresh the dynamic one
    /// with no aircraft on top.
    pub fn rebuild_static(&mut self, sources: &[RadarSource]) {
        self.static_layer.clear();
        for s in sources {
            self.static_layer.add_radar(s.position, s.range, s.tracking_range);
        }
        self.dynamic_layer.copy_from(&self.static_layer);
        debug!(
            sources = sources.len(),
            covered = self.static_layer.count_at_least(CoverageLevel::Tracking),
            "static coverage rebuilt"
        );
    }

    /// Copy the static layer into the dynamic one and paint `aircraft` on top.
    pub fn rebuild_dynamic(&mut self, aircraft: &[RadarSource]) {
        self.dynamic_layer.copy_from(&self.static_layer);
        for s in aircraft {
            self.dynamic_layer.add_radar(s.position, s.range, s.tracking_range);
        }
    }

    /// Coverage at a position, including aircraft.
    pub fn level_at(&self, pos: &GeoPosition) -> CoverageLevel {
        self.dynamic_layer.level_at(pos)
    }

    /// Coverage at a position from bases and installations only.
    pub fn static_level_at(&self, pos: &GeoPosition) -> CoverageLevel {
        self.static_layer.level_at(pos)
    }

    pub fn static_layer(&self) -> &CoverageMask {
        &self.static_layer
    }

    pub fn dynamic_layer(&self) -> &CoverageMask {
        &self.dynamic_layer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(lon: f64, lat: f64, range: f64, tracking: f64) -> RadarSource {
        RadarSource {
            position: GeoPosition::new(lon, lat),
            range,
            tracking_range: tracking,
        }
    }

    #[test]
    fn test_dynamic_layer_includes_static() {
        let mut cov = Coverage::new(360, 180);
        cov.rebuild_static(&[source(0.0, 0.0, 10.0, 15.0)]);
        assert_eq!(cov.level_at(&GeoPosition::new(1.0, 1.0)), CoverageLevel::Detection);
        assert_eq!(cov.dynamic_layer(), cov.static_layer());
    }

    #[test]
    fn test_aircraft_only_in_dynamic_layer() {
        let mut cov = Coverage::new(360, 180);
        cov.rebuild_static(&[source(0.0, 0.0, 10.0, 15.0)]);
        cov.rebuild_dynamic(&[source(100.0, 0.0, 5.0, 7.0)]);

        let far = GeoPosition::new(100.5, 0.5);
        assert_eq!(cov.level_at(&far), CoverageLevel::Detection);
        assert_eq!(cov.static_level_at(&far), CoverageLevel::None);
    }

    #[test]
    fn test_rebuild_dynamic_drops_landed_aircraft() {
        let mut cov = Coverage::new(360, 180);
        cov.rebuild_static(&[]);
        cov.rebuild_dynamic(&[source(50.0, 10.0, 5.0, 7.0)]);
        assert_eq!(cov.level_at(&GeoPosition::new(50.5, 10.5)), CoverageLevel::Detection);

        cov.rebuild_dynamic(&[]);
        assert_eq!(cov.level_at(&GeoPosition::new(50.5, 10.5)), CoverageLevel::None);
    }

    #[test]
    fn test_rebuild_static_forgets_removed_sites() {
        let mut cov = Coverage::new(180, 90);
        cov.rebuild_static(&[source(0.0, 0.0, 20.0, 30.0)]);
        assert!(cov.static_layer().count_at_least(CoverageLevel::Tracking) > 0);
        cov.rebuild_static(&[]);
        assert_eq!(cov.static_layer().count_at_least(CoverageLevel::Tracking), 0);
    }
}
