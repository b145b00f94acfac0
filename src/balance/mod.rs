//! Weight-and-balance engine
//!
//! Aggregates per-category weight × arm moments, derives the center of
//! gravity and checks it against the aircraft's safe-operating envelope.

mod envelope;

pub use envelope::point_in_polygon;

use crate::types::{AircraftProfile, EnvelopeBasis};

/// Aggregate weight-and-balance figures for one computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightBalanceSummary {
    pub total_weight: f64,
    pub total_moment: f64,
    /// Total moment / total weight, or 0 when the total weight is 0
    pub center_of_gravity: f64,
}

/// Mutable per-session weight-and-balance state for one aircraft
///
/// Holds its own copy of the profile's arms and envelope so custom-mode
/// edits to the state never mutate the shared static profile. Recomputed
/// in full on every [`compute`](Self::compute) call; there is no
/// incremental update.
#[derive(Debug, Clone)]
pub struct WeightBalanceState {
    /// Current weight per category; index 0 starts at the empty weight
    pub weights: Vec<f64>,
    /// Weight × arm per category, parallel to `weights`
    pub moments: Vec<f64>,
    arms: Vec<f64>,
    envelope: Vec<(f64, f64)>,
    envelope_basis: EnvelopeBasis,
    fuel_category: Option<usize>,
    fuel_density: f64,
    landing_gear_moment: f64,
    summary: WeightBalanceSummary,
}

impl WeightBalanceState {
    /// Initialize state from a profile
    ///
    /// One weight slot per category, with the empty weight preloaded into
    /// the first slot. Arms and envelope are copied out of the profile.
    /// Expects a profile that passed [`AircraftProfile::validate`], as
    /// everything from the catalog has.
    pub fn from_profile(profile: &AircraftProfile) -> Self {
        let mut weights = vec![0.0; profile.categories.len()];
        weights[0] = profile.empty_weight;

        let mut state = Self {
            weights,
            moments: vec![0.0; profile.categories.len()],
            arms: profile.arms.clone(),
            envelope: profile.envelope.clone(),
            envelope_basis: profile.envelope_basis,
            fuel_category: profile.fuel_category,
            fuel_density: profile.fuel_density,
            landing_gear_moment: profile.landing_gear_moment,
            summary: WeightBalanceSummary {
                total_weight: 0.0,
                total_moment: 0.0,
                center_of_gravity: 0.0,
            },
        };
        state.recompute();
        state
    }

    /// Apply input weights and recompute totals and CG
    ///
    /// One entry per category, in category order. `None` keeps the slot's
    /// current value (the empty weight for slot 0, otherwise its previous
    /// input), so blank form fields leave defaults in place. The fuel
    /// category's input is volume in liters and is converted to weight
    /// with the profile's fuel density; the conversion applies uniformly
    /// regardless of unit system. Extra entries beyond the category count
    /// are ignored.
    pub fn compute(&mut self, inputs: &[Option<f64>]) -> WeightBalanceSummary {
        for (i, input) in inputs.iter().enumerate().take(self.weights.len()) {
            if let Some(value) = input {
                self.weights[i] = if self.fuel_category == Some(i) {
                    value * self.fuel_density
                } else {
                    *value
                };
            }
        }
        self.recompute()
    }

    /// Check the current loading against the envelope polygon
    ///
    /// The x coordinate follows the profile's declared envelope basis
    /// (total moment or CG position); y is always the total weight.
    pub fn is_within_envelope(&self) -> bool {
        let x = match self.envelope_basis {
            EnvelopeBasis::Moment => self.summary.total_moment,
            EnvelopeBasis::CgPosition => self.summary.center_of_gravity,
        };
        point_in_polygon((x, self.summary.total_weight), &self.envelope)
    }

    /// Latest computed totals
    pub fn summary(&self) -> WeightBalanceSummary {
        self.summary
    }

    fn recompute(&mut self) -> WeightBalanceSummary {
        let last = self.weights.len() - 1;
        for (i, (&weight, &arm)) in self.weights.iter().zip(&self.arms).enumerate() {
            self.moments[i] = weight * arm;
            if i == last {
                self.moments[i] += self.landing_gear_moment;
            }
        }

        let total_weight: f64 = self.weights.iter().sum();
        let total_moment: f64 = self.moments.iter().sum();
        let center_of_gravity = if total_weight > 0.0 {
            total_moment / total_weight
        } else {
            0.0
        };

        self.summary = WeightBalanceSummary {
            total_weight,
            total_moment,
            center_of_gravity,
        };
        self.summary
    }
}
