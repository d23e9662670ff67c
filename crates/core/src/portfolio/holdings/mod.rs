//! Holding records and the ledger collaborator that supplies them.

mod holdings_model;
mod holdings_traits;

pub use holdings_model::*;
pub use holdings_traits::*;
