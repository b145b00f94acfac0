//! Built-in aircraft catalog

use crate::error::{Error, Result};
use crate::types::AircraftProfile;

/// Built-in profile definitions, embedded at compile time
const BUILTIN_CATALOG: &str = include_str!("../assets/aircraft.yaml");

/// A validated collection of aircraft profiles
///
/// Profiles are deserialized from YAML and validated once at load time;
/// lookups afterwards always return structurally sound data.
#[derive(Debug, Clone)]
pub struct Catalog {
    profiles: Vec<AircraftProfile>,
}

impl Catalog {
    /// Load the built-in catalog (TB9, TB10, PA28, P68B)
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_CATALOG)
    }

    /// Load a catalog from user-supplied YAML (custom-profile mode)
    ///
    /// Expects a sequence of profile mappings. Every profile is validated;
    /// the first invalid one fails the whole load.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let profiles: Vec<AircraftProfile> = serde_yaml::from_str(yaml)?;
        for profile in &profiles {
            profile.validate()?;
        }
        Ok(Self { profiles })
    }

    /// Look up a profile by name
    pub fn get(&self, name: &str) -> Option<&AircraftProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Look up a profile by name, failing with [`Error::UnknownProfile`]
    pub fn require(&self, name: &str) -> Result<&AircraftProfile> {
        self.get(name)
            .ok_or_else(|| Error::UnknownProfile(name.to_string()))
    }

    /// Profile names in catalog order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.name.as_str())
    }

    /// All profiles in catalog order
    pub fn profiles(&self) -> &[AircraftProfile] {
        &self.profiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EnvelopeBasis, UnitSystem};
    use claims::{assert_err, assert_none, assert_ok, assert_some};

    #[test]
    fn builtin_catalog_loads_and_validates() {
        let catalog = assert_ok!(Catalog::builtin());
        let names: Vec<_> = catalog.names().collect();
        assert_eq!(names, vec!["TB9", "TB10", "PA28", "P68B"]);
    }

    #[test]
    fn tb9_is_metric_moment_based() {
        let catalog = Catalog::builtin().unwrap();
        let tb9 = assert_some!(catalog.get("TB9"));
        assert_eq!(tb9.units, UnitSystem::Metric);
        assert_eq!(tb9.envelope_basis, EnvelopeBasis::Moment);
        assert_eq!(tb9.categories.len(), tb9.arms.len());
    }

    #[test]
    fn pa28_is_imperial_cg_based() {
        let catalog = Catalog::builtin().unwrap();
        let pa28 = assert_some!(catalog.get("PA28"));
        assert_eq!(pa28.units, UnitSystem::Imperial);
        assert_eq!(pa28.envelope_basis, EnvelopeBasis::CgPosition);
    }

    #[test]
    fn p68b_carries_landing_gear_moment() {
        let catalog = Catalog::builtin().unwrap();
        let p68b = assert_some!(catalog.get("P68B"));
        assert_eq!(p68b.landing_gear_moment, 30.0);
    }

    #[test]
    fn unknown_name_is_none() {
        let catalog = Catalog::builtin().unwrap();
        assert_none!(catalog.get("C172"));
        assert_err!(catalog.require("C172"));
    }

    #[test]
    fn invalid_custom_yaml_fails_fast() {
        // arms length does not match categories
        let yaml = r"
- name: BROKEN
  units: metric
  envelope_basis: moment
  empty_weight: 500.0
  fuel_density: 0.72
  categories: [Empty aircraft, Fuel]
  arms: [1.0]
  fuel_category: 1
  envelope:
    - [500.0, 400.0]
    - [1200.0, 1000.0]
    - [400.0, 500.0]
";
        assert_err!(Catalog::from_yaml(yaml));
    }

    #[test]
    fn malformed_yaml_fails_with_catalog_error() {
        match Catalog::from_yaml(": not yaml [") {
            Err(Error::Catalog(_)) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
