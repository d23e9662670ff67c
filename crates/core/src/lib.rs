//! Cashflow Core - portfolio valuation and rentability.
//!
//! Holdings are supplied by a ledger collaborator (`HoldingsProviderTrait`),
//! aggregated into immutable `PortfolioSnapshot`s and compared against an
//! earlier snapshot to produce a `RentabilityResult`. Persistence is left to
//! the implementors of the collaborator traits.

pub mod constants;
pub mod errors;
pub mod instruments;
pub mod ledger;
pub mod portfolio;
pub mod prices;
pub mod settings;
pub mod utils;

// Re-export common types from instrument and portfolio modules
pub use instruments::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
