//! Spherical geometry for the geoscape.
//!
//! Positions are (longitude, latitude) in degrees on a unit sphere.
//! The Cartesian frame has +Z through the north pole and +X through
//! (lon 0, lat 0). All distances are angles in degrees, never planar lengths.

use glam::DVec3;

use crate::types::GeoPosition;

/// Convert a polar position to a unit vector.
pub fn polar_to_vector(pos: GeoPosition) -> DVec3 {
    let lon = pos.lon.to_radians();
    let lat = pos.lat.to_radians();
    DVec3::new(lon.cos() * lat.cos(), lon.sin() * lat.cos(), lat.sin())
}

/// Convert a vector back to a polar position.
///
/// The vector does not need to be normalized. At the poles the longitude is
/// undefined and comes back as 0. A zero vector maps to (0, 0).
pub fn vector_to_polar(v: DVec3) -> GeoPosition {
    let v = v.normalize_or_zero();
    if v == DVec3::ZERO {
        return GeoPosition::default();
    }
    let lon = v.y.atan2(v.x).to_degrees();
    let lat = 90.0 - v.z.clamp(-1.0, 1.0).acos().to_degrees();
    GeoPosition::new(lon, lat)
}

/// Great-circle distance between two positions, in degrees.
///
/// Computed as the angle between the two unit vectors. The atan2 form keeps
/// full precision for nearly identical and nearly antipodal points, and is
/// exactly 0 for identical inputs.
pub fn great_circle_distance(a: GeoPosition, b: GeoPosition) -> f64 {
    angle_between(polar_to_vector(a), polar_to_vector(b))
}

/// Angle between two unit vectors, in degrees.
pub fn angle_between(a: DVec3, b: DVec3) -> f64 {
    let sin = a.cross(b).length();
    let cos = a.dot(b);
    sin.atan2(cos).to_degrees()
}

/// Point at fraction `t` in [0, 1] along the great circle from `a` to `b`.
///
/// Returns `a` for coincident or antipodal endpoints, where the arc is not unique.
pub fn interpolate(a: GeoPosition, b: GeoPosition, t: f64) -> GeoPosition {
    let va = polar_to_vector(a);
    let vb = polar_to_vector(b);
    let omega = va.dot(vb).clamp(-1.0, 1.0).acos();
    let sin_omega = omega.sin();
    if sin_omega.abs() < 1e-9 {
        return a;
    }
    let wa = ((1.0 - t) * omega).sin() / sin_omega;
    let wb = (t * omega).sin() / sin_omega;
    vector_to_polar(va * wa + vb * wb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pos(lon: f64, lat: f64) -> GeoPosition {
        GeoPosition::new(lon, lat)
    }

    #[test]
    fn test_polar_to_vector_axes() {
        let v = polar_to_vector(pos(0.0, 0.0));
        assert!((v - DVec3::X).length() < 1e-12);
        let v = polar_to_vector(pos(90.0, 0.0));
        assert!((v - DVec3::Y).length() < 1e-12);
        let v = polar_to_vector(pos(0.0, 90.0));
        assert!((v - DVec3::Z).length() < 1e-12, "north pole should map to +Z");
    }

    #[test]
    fn test_vector_to_polar_at_pole_is_safe() {
        let p = vector_to_polar(DVec3::Z);
        assert_eq!(p.lon, 0.0);
        assert!((p.lat - 90.0).abs() < 1e-9);
        let p = vector_to_polar(-DVec3::Z * 3.0);
        assert!((p.lat + 90.0).abs() < 1e-9);
        assert_eq!(vector_to_polar(DVec3::ZERO), GeoPosition::default());
    }

    #[test]
    fn test_distance_along_equator() {
        let d = great_circle_distance(pos(0.0, 0.0), pos(30.0, 0.0));
        assert!((d - 30.0).abs() < 1e-9, "got {d}");
    }

    #[test]
    fn test_distance_across_antimeridian() {
        // 170E to 170W is 20 degrees, not 340.
        let d = great_circle_distance(pos(170.0, 0.0), pos(-170.0, 0.0));
        assert!((d - 20.0).abs() < 1e-9, "got {d}");
    }

    #[test]
    fn test_distance_pole_to_equator() {
        let d = great_circle_distance(pos(45.0, 90.0), pos(-120.0, 0.0));
        assert!((d - 90.0).abs() < 1e-9, "got {d}");
    }

    #[test]
    fn test_distance_antipodal() {
        let d = great_circle_distance(pos(10.0, 20.0), pos(-170.0, -20.0));
        assert!((d - 180.0).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn test_distance_is_angular_not_planar() {
        // Ten degrees of longitude at 60N is only about five degrees of arc.
        let d = great_circle_distance(pos(0.0, 60.0), pos(10.0, 60.0));
        assert!(d < 5.1 && d > 4.9, "got {d}");
    }

    #[test]
    fn test_interpolate_midpoint() {
        let mid = interpolate(pos(0.0, 0.0), pos(90.0, 0.0), 0.5);
        assert!(mid.approx_eq(&pos(45.0, 0.0), 1e-9), "got {mid}");
    }

    proptest! {
        #[test]
        fn prop_distance_symmetric(
            lon_a in -180.0f64..=180.0, lat_a in -90.0f64..=90.0,
            lon_b in -180.0f64..=180.0, lat_b in -90.0f64..=90.0,
        ) {
            let a = pos(lon_a, lat_a);
            let b = pos(lon_b, lat_b);
            prop_assert_eq!(great_circle_distance(a, b), great_circle_distance(b, a));
        }

        #[test]
        fn prop_distance_to_self_is_zero(lon in -180.0f64..=180.0, lat in -90.0f64..=90.0) {
            let a = pos(lon, lat);
            prop_assert_eq!(great_circle_distance(a, a), 0.0);
        }

        #[test]
        fn prop_distance_bounded(
            lon_a in -180.0f64..=180.0, lat_a in -90.0f64..=90.0,
            lon_b in -180.0f64..=180.0, lat_b in -90.0f64..=90.0,
        ) {
            let d = great_circle_distance(pos(lon_a, lat_a), pos(lon_b, lat_b));
            prop_assert!((0.0..=180.0).contains(&d));
        }

        #[test]
        fn prop_polar_round_trip(lon in -179.9f64..179.9, lat in -89.0f64..89.0) {
            let p = pos(lon, lat);
            let back = vector_to_polar(polar_to_vector(p));
            prop_assert!(back.approx_eq(&p, 1e-9), "{} -> {}", p, back);
        }

        #[test]
        fn prop_unit_vector(lon in -180.0f64..=180.0, lat in -90.0f64..=90.0) {
            let v = polar_to_vector(pos(lon, lat));
            prop_assert!((v.length() - 1.0).abs() < 1e-12);
        }
    }
}
