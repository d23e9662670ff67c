//! Ledger collaborator trait.

use chrono::NaiveDate;

use super::HoldingRecord;
use crate::errors::Result;

/// Supplies the holdings effective at a date.
///
/// Implementations query whatever store backs the ledger. No ordering or
/// de-duplication of the returned records is assumed by callers.
pub trait HoldingsProviderTrait: Send + Sync {
    fn get_holdings(&self, date: NaiveDate) -> Result<Vec<HoldingRecord>>;
}
