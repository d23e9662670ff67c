//! Instrument price history.

mod price_store;
mod prices_model;
mod prices_traits;

pub use price_store::*;
pub use prices_model::*;
pub use prices_traits::*;
