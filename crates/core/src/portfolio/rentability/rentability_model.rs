use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::PERCENT_SCALE;

/// Profit/loss of a snapshot against its baseline.
///
/// `baseline_found` distinguishes "no history at the reference date" from a
/// genuine zero return; both report zero returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentabilityResult {
    /// Date of the current snapshot
    pub date: NaiveDate,
    pub reference_date: NaiveDate,
    pub current_value: Decimal,
    /// Baseline total value (zero when no baseline was found)
    pub reference_value: Decimal,
    pub absolute_return: Decimal,
    /// `absolute_return / reference_value`, zero for a zero-valued baseline
    pub relative_return: Decimal,
    pub baseline_found: bool,
}

impl RentabilityResult {
    /// Result for a reference date without any recorded holdings.
    pub fn no_baseline(date: NaiveDate, reference_date: NaiveDate, current_value: Decimal) -> Self {
        Self {
            date,
            reference_date,
            current_value,
            reference_value: Decimal::ZERO,
            absolute_return: Decimal::ZERO,
            relative_return: Decimal::ZERO,
            baseline_found: false,
        }
    }

    /// Relative return as a percentage, saturating at the `Decimal` bounds.
    pub fn relative_return_percent(&self) -> Decimal {
        self.relative_return.saturating_mul(PERCENT_SCALE)
    }
}
