/// Errors produced by route planning and weight-and-balance calculations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("a route needs at least two waypoints, got {0}")]
    NotEnoughWaypoints(usize),

    #[error("cruise speed must be positive, got {0} kt")]
    InvalidCruiseSpeed(f64),

    #[error("fuel flow must be positive, got {0} L/h")]
    InvalidFuelFlow(f64),

    #[error("invalid numeric input: {0:?}")]
    InvalidNumber(String),

    #[error("unknown aircraft profile: {0:?}")]
    UnknownProfile(String),

    #[error("invalid aircraft profile {name:?}: {reason}")]
    InvalidProfile { name: String, reason: String },

    #[error("failed to parse aircraft catalog: {0}")]
    Catalog(#[from] serde_yaml::Error),

    #[error("could not resolve waypoint {0:?}")]
    WaypointNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
