//! Portfolio valuation and rentability.

pub mod holdings;
pub mod rentability;
pub mod snapshot;
pub mod valuation;

pub use holdings::*;
pub use rentability::*;
pub use snapshot::*;
pub use valuation::*;
