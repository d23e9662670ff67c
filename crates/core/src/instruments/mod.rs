//! Instrument catalog - classification tags for tradable assets.

mod instruments_catalog;
mod instruments_model;
mod instruments_traits;

pub use instruments_catalog::*;
pub use instruments_model::*;
pub use instruments_traits::*;
