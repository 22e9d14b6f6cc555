//! Fundamental geographic and simulation types.

use std::fmt;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::geo;

/// A point on the geoscape in degrees.
/// Longitude is kept in [-180, 180], latitude in [-90, 90].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawGeoPosition")]
pub struct GeoPosition {
    pub lon: f64,
    pub lat: f64,
}

/// Position as read from a file, before normalization.
#[derive(Deserialize)]
struct RawGeoPosition {
    lon: f64,
    lat: f64,
}

impl From<RawGeoPosition> for GeoPosition {
    fn from(raw: RawGeoPosition) -> Self {
        GeoPosition::new(raw.lon, raw.lat)
    }
}

impl GeoPosition {
    /// Build a position, normalizing it into range.
    pub fn new(lon: f64, lat: f64) -> Self {
        let mut pos = Self { lon, lat };
        pos.normalize();
        pos
    }

    /// Fold the position back into range.
    ///
    /// Latitudes past a pole are reflected over it (which moves the point to
    /// the opposite meridian), then longitude is wrapped into [-180, 180].
    pub fn normalize(&mut self) {
        if !self.lon.is_finite() || !self.lat.is_finite() {
            self.lon = 0.0;
            self.lat = 0.0;
            return;
        }
        let mut lat = (self.lat + 90.0).rem_euclid(360.0) - 90.0;
        let mut lon = self.lon;
        if lat > 90.0 {
            lat = 180.0 - lat;
            lon += 180.0;
        }
        self.lat = lat;
        self.lon = wrap_longitude(lon);
    }

    /// Unit vector on the sphere for this position.
    pub fn to_vector(&self) -> DVec3 {
        geo::polar_to_vector(*self)
    }

    /// Great-circle distance to another position, in degrees.
    pub fn distance_to(&self, other: &GeoPosition) -> f64 {
        geo::great_circle_distance(*self, *other)
    }

    /// Approximate equality within `eps` degrees, treating -180 and 180 as the same meridian.
    pub fn approx_eq(&self, other: &GeoPosition, eps: f64) -> bool {
        (self.lat - other.lat).abs() <= eps && wrap_longitude(self.lon - other.lon).abs() <= eps
    }
}

impl fmt::Display for GeoPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.lon, self.lat)
    }
}

/// Wrap a longitude (or longitude difference) into [-180, 180].
pub fn wrap_longitude(lon: f64) -> f64 {
    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid maps +180 to -180; keep +180 when the input was exactly on it
    if wrapped == -180.0 && lon > 0.0 {
        180.0
    } else {
        wrapped
    }
}

/// Dense index of a contact in the contact registry.
///
/// Only stable while the contact exists: destroying a lower-indexed contact
/// shifts every higher index down by one.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ContactId(pub u32);

impl ContactId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ufo#{}", self.0)
    }
}

/// Stable identifier of a radar owner (base, installation or aircraft).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SiteId(pub u32);

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "site#{}", self.0)
    }
}

/// Campaign clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoscapeTime {
    /// Number of detection passes run so far.
    pub detection_passes: u64,
    /// Elapsed simulated time in seconds.
    pub elapsed_secs: f64,
}

impl GeoscapeTime {
    /// Advance the clock by `secs` simulated seconds.
    pub fn advance(&mut self, secs: f64) {
        self.elapsed_secs += secs;
    }

    /// Whole simulated days elapsed.
    pub fn day(&self) -> u64 {
        (self.elapsed_secs / 86_400.0) as u64
    }
}
