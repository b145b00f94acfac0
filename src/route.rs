//! Route computation over an ordered waypoint sequence

use crate::error::{Error, Result};
use crate::geo::{great_circle_distance, initial_bearing, reciprocal};
use crate::types::{RouteLeg, RouteResult, Waypoint};

/// Leg altitude placeholder: first leg at 3000 ft, +500 ft per leg
///
/// Stands in until a terrain-aware policy exists. Waypoint elevations are
/// carried on the leg endpoints for display and export but do not feed
/// this value.
fn leg_altitude_ft(leg_index: usize) -> f64 {
    3000.0 + leg_index as f64 * 500.0
}

/// Compute a route from an ordered waypoint sequence and a cruise speed
///
/// For each consecutive waypoint pair this produces the great-circle
/// distance, initial bearing, radial (reciprocal bearing) and estimated
/// time at the given cruise speed, plus aggregate distance and time.
///
/// Pure and side-effect-free: identical inputs always produce identical
/// results, and a failed computation leaves no partial result behind.
///
/// # Errors
///
/// Fails fast with [`Error::NotEnoughWaypoints`] for fewer than two
/// waypoints and [`Error::InvalidCruiseSpeed`] for a non-positive speed.
pub fn compute_route(waypoints: &[Waypoint], cruise_speed_kt: f64) -> Result<RouteResult> {
    if waypoints.len() < 2 {
        return Err(Error::NotEnoughWaypoints(waypoints.len()));
    }
    if !(cruise_speed_kt > 0.0) {
        return Err(Error::InvalidCruiseSpeed(cruise_speed_kt));
    }

    let mut legs = Vec::with_capacity(waypoints.len() - 1);
    for (i, pair) in waypoints.windows(2).enumerate() {
        let (from, to) = (&pair[0], &pair[1]);

        let distance_nm = great_circle_distance(from.lat, from.lon, to.lat, to.lon);
        let bearing_deg = initial_bearing(from.lat, from.lon, to.lat, to.lon);
        let flight_time_min = distance_nm / cruise_speed_kt * 60.0;

        legs.push(RouteLeg {
            from: from.clone(),
            to: to.clone(),
            distance_nm,
            bearing_deg,
            radial_deg: reciprocal(bearing_deg),
            flight_time_min,
            altitude_ft: leg_altitude_ft(i),
        });
    }

    let total_distance_nm = legs.iter().map(|leg| leg.distance_nm).sum();
    let total_time_min = legs.iter().map(|leg| leg.flight_time_min).sum();

    Ok(RouteResult {
        legs,
        total_distance_nm,
        total_time_min,
    })
}
