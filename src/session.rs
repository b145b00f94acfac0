//! Flight-plan session: waypoint sequences plus flight parameters
//!
//! Replaces the ambient per-page globals of a typical planning UI with an
//! explicit value object. The computation core stays stateless; the
//! session only gathers inputs and hands them to pure functions.

use crate::error::{Error, Result};
use crate::route::compute_route;
use crate::types::{FuelPolicy, RouteResult, Waypoint};

/// Default cruise speed in knots
pub const DEFAULT_CRUISE_SPEED_KT: f64 = 90.0;

/// Default fuel consumption in liters per hour
pub const DEFAULT_FUEL_FLOW_LPH: f64 = 30.0;

/// Resolves a free-text place name to coordinates
///
/// Collaborator seam for the geocoding service. A failed lookup is fatal
/// for that waypoint: implementations return
/// [`Error::WaypointNotFound`] and the caller decides whether to retry or
/// prompt the user.
pub trait Geocoder {
    fn resolve(&self, name: &str) -> Result<(f64, f64)>;
}

/// Looks up terrain elevation for a coordinate
///
/// Collaborator seam for the elevation service. `None` means the service
/// had no answer; the waypoint then carries an elevation of 0 ft.
pub trait ElevationSource {
    fn elevation_ft(&self, lat: f64, lon: f64) -> Option<f64>;
}

/// A computed plan for one route: legs plus fuel figures
#[derive(Debug, Clone, PartialEq)]
pub struct FlightPlan {
    pub route: RouteResult,
    pub fuel: FuelPolicy,
}

/// One planning session: main and alternate waypoint sequences plus
/// flight parameters
///
/// Each `plan_*` call is an independent computation; a failing alternate
/// route never invalidates an already-computed main plan.
#[derive(Debug, Clone)]
pub struct FlightPlanSession {
    main: Vec<Waypoint>,
    alternate: Vec<Waypoint>,
    cruise_speed_kt: f64,
    fuel_flow_lph: f64,
}

impl Default for FlightPlanSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FlightPlanSession {
    /// Create an empty session with default speed and fuel flow
    pub fn new() -> Self {
        Self {
            main: Vec::new(),
            alternate: Vec::new(),
            cruise_speed_kt: DEFAULT_CRUISE_SPEED_KT,
            fuel_flow_lph: DEFAULT_FUEL_FLOW_LPH,
        }
    }

    /// Set the cruise speed in knots
    ///
    /// Returns `&mut self` to allow method chaining. Validated when a plan
    /// is computed.
    pub fn with_cruise_speed(&mut self, knots: f64) -> &mut Self {
        self.cruise_speed_kt = knots;
        self
    }

    /// Set the fuel consumption in liters per hour
    ///
    /// Returns `&mut self` to allow method chaining. Validated when a plan
    /// is computed.
    pub fn with_fuel_flow(&mut self, liters_per_hour: f64) -> &mut Self {
        self.fuel_flow_lph = liters_per_hour;
        self
    }

    /// Append a waypoint to the main route
    pub fn push_waypoint(&mut self, waypoint: Waypoint) -> &mut Self {
        self.main.push(waypoint);
        self
    }

    /// Append a waypoint to the alternate route
    pub fn push_alternate(&mut self, waypoint: Waypoint) -> &mut Self {
        self.alternate.push(waypoint);
        self
    }

    /// Resolve a place name through the collaborator seams
    ///
    /// Geocoding failure aborts with [`Error::WaypointNotFound`]; a
    /// missing elevation answer falls back to 0 ft.
    pub fn resolve_waypoint(
        &self,
        name: &str,
        geocoder: &impl Geocoder,
        elevation: &impl ElevationSource,
    ) -> Result<Waypoint> {
        let (lat, lon) = geocoder.resolve(name)?;
        let elevation_ft = elevation.elevation_ft(lat, lon).unwrap_or(0.0);
        Ok(Waypoint::with_elevation(name, lat, lon, elevation_ft))
    }

    /// Waypoints of the main route
    pub fn main_waypoints(&self) -> &[Waypoint] {
        &self.main
    }

    /// Waypoints of the alternate route
    pub fn alternate_waypoints(&self) -> &[Waypoint] {
        &self.alternate
    }

    /// Remove all waypoints from both routes, keeping the parameters
    pub fn clear(&mut self) {
        self.main.clear();
        self.alternate.clear();
    }

    /// Compute route and fuel policy for the main waypoint sequence
    pub fn plan_main(&self) -> Result<FlightPlan> {
        self.plan(&self.main)
    }

    /// Compute route and fuel policy for the alternate waypoint sequence
    pub fn plan_alternate(&self) -> Result<FlightPlan> {
        self.plan(&self.alternate)
    }

    fn plan(&self, waypoints: &[Waypoint]) -> Result<FlightPlan> {
        if !(self.fuel_flow_lph > 0.0) {
            return Err(Error::InvalidFuelFlow(self.fuel_flow_lph));
        }
        let route = compute_route(waypoints, self.cruise_speed_kt)?;
        let fuel = FuelPolicy::compute(route.total_time_min, self.fuel_flow_lph);
        Ok(FlightPlan { route, fuel })
    }
}
