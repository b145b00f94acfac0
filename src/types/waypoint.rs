/// A named geographic point used to define a route leg
///
/// Coordinates are in degrees, elevation in feet. Waypoints are created
/// when a location is resolved (geocoding or map click) and are not
/// mutated once part of a computed route; a new route computation is a
/// new derived result.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub name: String,
    /// Latitude in degrees, -90..90
    pub lat: f64,
    /// Longitude in degrees, -180..180
    pub lon: f64,
    /// Terrain elevation in feet, 0 when unknown
    pub elevation_ft: f64,
}

impl Waypoint {
    /// Create a waypoint with unknown elevation
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
            elevation_ft: 0.0,
        }
    }

    /// Create a waypoint with a known terrain elevation
    pub fn with_elevation(name: impl Into<String>, lat: f64, lon: f64, elevation_ft: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
            elevation_ft,
        }
    }
}
