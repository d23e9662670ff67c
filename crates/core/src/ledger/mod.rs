//! Price-backed ledger: recorded positions valued at the latest known price.

mod ledger_model;
mod priced_ledger;

pub use ledger_model::*;
pub use priced_ledger::*;
