use serde::Deserialize;

use crate::error::{Error, Result};

/// Unit system a profile's weights are expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    /// Kilograms, meters
    Metric,
    /// Pounds, inches
    Imperial,
}

/// Coordinate basis of the envelope polygon's x axis
///
/// Some aircraft publish their envelope over total moment, others over CG
/// position. The basis is a declared property of the profile, never
/// inferred from the aircraft name, so the containment test and the
/// polygon always share a coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvelopeBasis {
    /// x = total moment, y = total weight
    Moment,
    /// x = center of gravity (arm position), y = total weight
    CgPosition,
}

/// Static weight-and-balance reference data for one aircraft type
///
/// Loaded from the catalog (or user-supplied YAML in custom mode) and
/// validated once at load time; computations never mutate it.
#[derive(Debug, Clone, Deserialize)]
pub struct AircraftProfile {
    pub name: String,
    pub units: UnitSystem,
    pub envelope_basis: EnvelopeBasis,
    /// Empty aircraft weight, preloaded into the first weight category
    pub empty_weight: f64,
    /// Fuel volume-to-weight conversion, native weight unit per liter
    pub fuel_density: f64,
    /// Weight category labels, in input order
    pub categories: Vec<String>,
    /// Arm (datum distance) per category, parallel to `categories`
    pub arms: Vec<f64>,
    /// Index of the category whose input is fuel volume in liters
    pub fuel_category: Option<usize>,
    /// Constant moment added to the last category, for types whose CG
    /// datum is offset by fixed gear geometry
    #[serde(default)]
    pub landing_gear_moment: f64,
    /// Safe-operating envelope polygon, implicitly closed
    pub envelope: Vec<(f64, f64)>,
}

impl AircraftProfile {
    /// Validate structural consistency after deserialization
    ///
    /// Catches malformed profiles once at load time instead of failing
    /// deep inside a computation.
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return self.invalid("no weight categories");
        }
        if self.arms.len() != self.categories.len() {
            return self.invalid("arms and categories lengths differ");
        }
        if self.envelope.len() < 3 {
            return self.invalid("envelope needs at least 3 points");
        }
        if !(self.empty_weight >= 0.0) {
            return self.invalid("empty weight must be non-negative");
        }
        if !(self.fuel_density > 0.0) {
            return self.invalid("fuel density must be positive");
        }
        if let Some(idx) = self.fuel_category
            && idx >= self.categories.len()
        {
            return self.invalid("fuel category index out of range");
        }
        if self.arms.iter().any(|a| !a.is_finite())
            || self
                .envelope
                .iter()
                .any(|(x, y)| !x.is_finite() || !y.is_finite())
            || !self.landing_gear_moment.is_finite()
        {
            return self.invalid("non-finite arm or envelope value");
        }
        Ok(())
    }

    /// Replace the envelope polygon (custom mode), re-validating
    pub fn with_envelope(mut self, envelope: Vec<(f64, f64)>) -> Result<Self> {
        self.envelope = envelope;
        self.validate()?;
        Ok(self)
    }

    /// Replace the arm values (custom mode), re-validating
    pub fn with_arms(mut self, arms: Vec<f64>) -> Result<Self> {
        self.arms = arms;
        self.validate()?;
        Ok(self)
    }

    fn invalid(&self, reason: &str) -> Result<()> {
        Err(Error::InvalidProfile {
            name: self.name.clone(),
            reason: reason.to_string(),
        })
    }
}
