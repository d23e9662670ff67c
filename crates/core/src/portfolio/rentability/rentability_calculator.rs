use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::Decimal;

use super::RentabilityResult;
use crate::constants::DECIMAL_PRECISION;
use crate::errors::{Error, Result};
use crate::portfolio::holdings::HoldingRecord;
use crate::portfolio::snapshot::PortfolioSnapshot;

/// Calculates the rentability of `current` against the portfolio held at `start_date`.
///
/// The baseline holdings come from `reference_lookup`, which is called exactly
/// once with `start_date`. Total values are compared unconditionally: positions
/// opened after `start_date` count towards the return, they are not filtered
/// out against the baseline's instruments.
///
/// # Arguments
///
/// * `current` - Snapshot being evaluated.
/// * `start_date` - Date of the baseline snapshot.
/// * `reference_lookup` - Ledger capability returning the holdings at a date.
///
/// # Errors
///
/// Propagates any error from `reference_lookup` unchanged.
pub fn calculate_rentability<F>(
    current: &PortfolioSnapshot,
    start_date: NaiveDate,
    reference_lookup: F,
) -> Result<RentabilityResult>
where
    F: FnOnce(NaiveDate) -> Result<Vec<HoldingRecord>>,
{
    let reference_records = reference_lookup(start_date)?;

    if reference_records.is_empty() {
        warn!(
            "No holdings found at {} to use as baseline for snapshot {}",
            start_date,
            current.date()
        );
        return Ok(RentabilityResult::no_baseline(
            current.date(),
            start_date,
            current.total_value(),
        ));
    }

    let reference = PortfolioSnapshot::new(reference_records, start_date)?;
    let (absolute_return, relative_return) =
        compute_returns(current.total_value(), reference.total_value())?;

    debug!(
        "Rentability {} vs {}: absolute {}, relative {}",
        current.date(),
        start_date,
        absolute_return,
        relative_return
    );

    Ok(RentabilityResult {
        date: current.date(),
        reference_date: start_date,
        current_value: current.total_value(),
        reference_value: reference.total_value(),
        absolute_return,
        relative_return,
        baseline_found: true,
    })
}

/// Returns `(absolute, relative)` for a value moving from `reference_value` to
/// `current_value`. The relative return is zero when the reference is zero.
pub fn compute_returns(current_value: Decimal, reference_value: Decimal) -> Result<(Decimal, Decimal)> {
    let absolute_return = current_value
        .checked_sub(reference_value)
        .ok_or_else(|| {
            Error::Unexpected(format!(
                "Overflow computing {} - {}",
                current_value, reference_value
            ))
        })?;

    if reference_value.is_zero() {
        return Ok((absolute_return, Decimal::ZERO));
    }

    let relative_return = absolute_return
        .checked_div(reference_value)
        .ok_or_else(|| {
            Error::Unexpected(format!(
                "Overflow computing {} / {}",
                absolute_return, reference_value
            ))
        })?
        .round_dp(DECIMAL_PRECISION);

    Ok((absolute_return, relative_return))
}
