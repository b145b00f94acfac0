use crate::types::Waypoint;

/// A computed route leg between two consecutive waypoints
///
/// Derived purely from its endpoints and the cruise speed; recomputed
/// whenever a waypoint or the speed changes. Field names are stable
/// because export layers bind to them by name.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteLeg {
    pub from: Waypoint,
    pub to: Waypoint,
    /// Great-circle distance in nautical miles
    pub distance_nm: f64,
    /// Initial true bearing in degrees, `[0, 360)`
    pub bearing_deg: f64,
    /// Reciprocal of the bearing in degrees, `[0, 360)`
    pub radial_deg: f64,
    /// Estimated time en route in minutes
    pub flight_time_min: f64,
    /// Planned leg altitude in feet
    pub altitude_ft: f64,
}

/// A computed route: ordered legs plus aggregate figures
///
/// Invariants: `total_distance_nm` is the sum of the leg distances and
/// `total_time_min` the sum of the leg times.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    pub legs: Vec<RouteLeg>,
    pub total_distance_nm: f64,
    pub total_time_min: f64,
}

impl RouteResult {
    /// Number of legs in the route
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Whether the route has no legs
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }
}
