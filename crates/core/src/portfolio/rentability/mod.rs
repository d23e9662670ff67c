//! Period-over-period rentability between two portfolio snapshots.

mod rentability_calculator;
mod rentability_model;

pub use rentability_calculator::*;
pub use rentability_model::*;
