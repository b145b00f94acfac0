#![doc = include_str!("../README.md")]

pub use crate::balance::{WeightBalanceState, WeightBalanceSummary};
pub use crate::catalog::Catalog;
pub use crate::error::{Error, Result};
pub use crate::route::compute_route;
pub use crate::session::{FlightPlan, FlightPlanSession};
pub use crate::types::*;

pub mod balance;
mod catalog;
mod error;
pub mod geo;
mod route;
mod session;
mod types;
pub mod utils;
