//! Great-circle routes and flights along them.
//!
//! A route is a polyline of waypoints on the sphere. Long arcs are split into
//! short legs (at most `LINE_MAXSEG` per half circle) so that the polyline can
//! be drawn and sampled cheaply.

use serde::{Deserialize, Serialize};

use crate::constants::{GEO_EPSILON, LINE_MAXSEG, SECONDS_PER_HOUR};
use crate::error::GeoscapeError;
use crate::geo;
use crate::types::GeoPosition;

/// Ordered waypoints plus the angular length of each leg.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Waypoints, first is the start, last is the destination.
    pub points: Vec<GeoPosition>,
    /// Great-circle length of each leg in degrees (`points.len() - 1` entries).
    pub legs: Vec<f64>,
}

impl Route {
    /// A route that stays at one point.
    pub fn stationary(at: GeoPosition) -> Self {
        Self {
            points: vec![at, at],
            legs: vec![0.0],
        }
    }

    /// Shortest great-circle route from `start` to `end`.
    ///
    /// Fails for antipodal endpoints, where the shortest arc is not unique.
    pub fn great_circle(start: GeoPosition, end: GeoPosition) -> Result<Self, GeoscapeError> {
        let total = geo::great_circle_distance(start, end);
        if total < GEO_EPSILON {
            return Ok(Self::stationary(end));
        }
        if total > 180.0 - GEO_EPSILON {
            return Err(GeoscapeError::InvalidRoute(format!(
                "{start} and {end} are antipodal"
            )));
        }

        let segments =
            ((total / 180.0 * LINE_MAXSEG as f64 - GEO_EPSILON).ceil() as usize).max(1);
        let mut points = Vec::with_capacity(segments + 1);
        for i in 0..=segments {
            let t = i as f64 / segments as f64;
            points.push(geo::interpolate(start, end, t));
        }
        // Pin the endpoints exactly.
        points[0] = start;
        points[segments] = end;

        Ok(Self {
            points,
            legs: vec![total / segments as f64; segments],
        })
    }

    /// Chain great-circle routes through every waypoint in order.
    pub fn through(waypoints: &[GeoPosition]) -> Result<Self, GeoscapeError> {
        let Some((&first, rest)) = waypoints.split_first() else {
            return Err(GeoscapeError::InvalidRoute("no waypoints".into()));
        };
        if rest.is_empty() {
            return Ok(Self::stationary(first));
        }

        let mut route = Self {
            points: vec![first],
            legs: Vec::new(),
        };
        let mut from = first;
        for &to in rest {
            let leg = Self::great_circle(from, to)?;
            route.points.extend_from_slice(&leg.points[1..]);
            route.legs.extend_from_slice(&leg.legs);
            from = to;
        }
        Ok(route)
    }

    /// Total angular length in degrees.
    pub fn total_distance(&self) -> f64 {
        self.legs.iter().sum()
    }

    /// Final waypoint.
    pub fn destination(&self) -> Option<GeoPosition> {
        self.points.last().copied()
    }

    /// Position after travelling `distance` degrees along the route.
    /// Clamps to the destination once the route is exhausted.
    pub fn position_at(&self, distance: f64) -> Option<GeoPosition> {
        let mut remaining = distance.max(0.0);
        for (i, &leg) in self.legs.iter().enumerate() {
            if remaining < leg {
                let t = if leg > 0.0 { remaining / leg } else { 0.0 };
                return Some(geo::interpolate(self.points[i], self.points[i + 1], t));
            }
            remaining -= leg;
        }
        self.destination()
    }
}

/// Progress of something flying along a route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub route: Route,
    /// Cruise speed in great-circle degrees per simulated hour.
    pub speed: f64,
    /// Simulated seconds spent on this route so far.
    pub elapsed_secs: f64,
}

/// Result of advancing a flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightStep {
    pub position: GeoPosition,
    pub arrived: bool,
}

impl Flight {
    pub fn new(route: Route, speed: f64) -> Self {
        Self {
            route,
            speed: speed.max(0.0),
            elapsed_secs: 0.0,
        }
    }

    /// Distance flown so far in degrees.
    pub fn distance_flown(&self) -> f64 {
        self.speed * self.elapsed_secs / SECONDS_PER_HOUR
    }

    pub fn has_arrived(&self) -> bool {
        self.distance_flown() + GEO_EPSILON >= self.route.total_distance()
    }

    /// Fly for `dt` more simulated seconds.
    pub fn advance(&mut self, dt: f64) -> Option<FlightStep> {
        self.elapsed_secs += dt.max(0.0);
        let position = self.route.position_at(self.distance_flown())?;
        Some(FlightStep {
            position,
            arrived: self.has_arrived(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_great_circle_route_splits_long_arcs() {
        let route = Route::great_circle(GeoPosition::new(0.0, 0.0), GeoPosition::new(90.0, 0.0))
            .unwrap();
        // 90 degrees is half of a half circle: LINE_MAXSEG / 2 legs.
        assert_eq!(route.legs.len(), LINE_MAXSEG / 2);
        assert_eq!(route.points.len(), route.legs.len() + 1);
        assert!((route.total_distance() - 90.0).abs() < 1e-9);
        assert_eq!(route.destination(), Some(GeoPosition::new(90.0, 0.0)));
    }

    #[test]
    fn test_degenerate_route_is_stationary() {
        let p = GeoPosition::new(12.0, -40.0);
        let route = Route::great_circle(p, p).unwrap();
        assert_eq!(route.total_distance(), 0.0);
        assert_eq!(route.position_at(10.0), Some(p));
    }

    #[test]
    fn test_antipodal_route_is_rejected() {
        let result =
            Route::great_circle(GeoPosition::new(0.0, 0.0), GeoPosition::new(180.0, 0.0));
        assert!(matches!(result, Err(GeoscapeError::InvalidRoute(_))));
    }

    #[test]
    fn test_route_across_antimeridian_stays_short() {
        let route =
            Route::great_circle(GeoPosition::new(170.0, 0.0), GeoPosition::new(-170.0, 0.0))
                .unwrap();
        assert!((route.total_distance() - 20.0).abs() < 1e-9);
        let mid = route.position_at(10.0).unwrap();
        assert!(mid.approx_eq(&GeoPosition::new(180.0, 0.0), 1e-6), "got {mid}");
    }

    #[test]
    fn test_route_through_waypoints() {
        let route = Route::through(&[
            GeoPosition::new(0.0, 0.0),
            GeoPosition::new(10.0, 0.0),
            GeoPosition::new(10.0, 10.0),
        ])
        .unwrap();
        assert!((route.total_distance() - 20.0).abs() < 1e-9);
        let corner = route.position_at(10.0).unwrap();
        assert!(corner.approx_eq(&GeoPosition::new(10.0, 0.0), 1e-6));
        assert!(Route::through(&[]).is_err());
    }

    #[test]
    fn test_flight_advances_and_arrives() {
        let route = Route::great_circle(GeoPosition::new(0.0, 0.0), GeoPosition::new(10.0, 0.0))
            .unwrap();
        // 5 degrees per hour: half way after one hour, there after two.
        let mut flight = Flight::new(route, 5.0);
        let step = flight.advance(SECONDS_PER_HOUR).unwrap();
        assert!(step.position.approx_eq(&GeoPosition::new(5.0, 0.0), 1e-6));
        assert!(!step.arrived);

        let step = flight.advance(SECONDS_PER_HOUR).unwrap();
        assert!(step.arrived);
        assert!(step.position.approx_eq(&GeoPosition::new(10.0, 0.0), 1e-6));
    }
}
