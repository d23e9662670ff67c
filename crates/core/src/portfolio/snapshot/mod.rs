//! Portfolio snapshot - holdings aggregated at one date.

mod snapshot_model;

pub use snapshot_model::*;
