//! Portfolio snapshot domain model.

use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{Error, Result};
use crate::portfolio::holdings::HoldingRecord;
use crate::portfolio::rentability::RentabilityResult;

/// Holdings aggregated as of a single date, keyed by instrument id.
///
/// At most one record is kept per instrument: when the input contains the
/// same instrument more than once, the last record wins. Aggregates are
/// computed once at construction and the snapshot is never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    date: NaiveDate,
    total_value: Decimal,
    total_incomings: Decimal,
    total_expenses: Decimal,
    #[serde(serialize_with = "serialize_holdings")]
    holdings: BTreeMap<String, HoldingRecord>,
}

impl PortfolioSnapshot {
    pub fn new(
        records: impl IntoIterator<Item = HoldingRecord>,
        date: NaiveDate,
    ) -> Result<Self> {
        let mut holdings: BTreeMap<String, HoldingRecord> = BTreeMap::new();
        for record in records {
            if let Some(replaced) = holdings.insert(record.instrument_id().to_string(), record) {
                warn!(
                    "Duplicate holding for instrument {} in snapshot {}; keeping the last record (replaced {} units at {})",
                    replaced.instrument_id(),
                    date,
                    replaced.quantity(),
                    replaced.unit_price()
                );
            }
        }

        let total_value = holdings
            .values()
            .try_fold(Decimal::ZERO, |total, record| total.checked_add(record.value()))
            .ok_or_else(|| {
                Error::Unexpected(format!(
                    "Total value of snapshot {} overflows across {} holdings",
                    date,
                    holdings.len()
                ))
            })?;
        debug!(
            "Built snapshot for {} with {} holdings, total value {}",
            date,
            holdings.len(),
            total_value
        );

        Ok(Self {
            date,
            total_value,
            // Realized income and expenses are not tracked yet.
            total_incomings: Decimal::ZERO,
            total_expenses: Decimal::ZERO,
            holdings,
        })
    }

    /// Merges the holdings of several snapshots into one snapshot dated `date`.
    ///
    /// Records are taken in the order the snapshots are given, so when two
    /// snapshots hold the same instrument the record from the later snapshot
    /// wins. The source snapshots are left untouched.
    pub fn combine<'a>(
        snapshots: impl IntoIterator<Item = &'a PortfolioSnapshot>,
        date: NaiveDate,
    ) -> Result<Self> {
        let records: Vec<HoldingRecord> = snapshots
            .into_iter()
            .flat_map(|snapshot| snapshot.holdings.values().cloned())
            .collect();
        Self::new(records, date)
    }

    /// An empty snapshot, valued at zero.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            total_value: Decimal::ZERO,
            total_incomings: Decimal::ZERO,
            total_expenses: Decimal::ZERO,
            holdings: BTreeMap::new(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Retained holdings keyed by instrument id.
    pub fn holdings(&self) -> &BTreeMap<String, HoldingRecord> {
        &self.holdings
    }

    pub fn holding(&self, instrument_id: &str) -> Option<&HoldingRecord> {
        self.holdings.get(instrument_id)
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Sum of `unit_price * quantity` over the retained holdings.
    pub fn total_value(&self) -> Decimal {
        self.total_value
    }

    /// Realized income over the snapshot. Always zero for now.
    pub fn total_incomings(&self) -> Decimal {
        self.total_incomings
    }

    /// Realized expenses over the snapshot. Always zero for now.
    pub fn total_expenses(&self) -> Decimal {
        self.total_expenses
    }

    /// Human readable listing of the snapshot, with the given rentability
    /// rendered as a percentage (zero when none is given).
    pub fn summary(&self, rentability: Option<&RentabilityResult>) -> String {
        self.summary_with_precision(rentability, DISPLAY_DECIMAL_PRECISION)
    }

    pub fn summary_with_precision(
        &self,
        rentability: Option<&RentabilityResult>,
        precision: u32,
    ) -> String {
        let rentability_pct = rentability
            .map(RentabilityResult::relative_return_percent)
            .unwrap_or(Decimal::ZERO);

        let mut lines = vec![format!(
            "Portfolio as of {}: Total Value = {} and Rentability = {}%",
            self.date,
            format_fixed(self.total_value, precision),
            format_fixed(rentability_pct, precision)
        )];
        lines.extend(self.holdings.values().map(|record| {
            format!(
                "{}: {} units at ${} each",
                record.instrument().name,
                record.quantity().normalize(),
                format_fixed(record.unit_price(), precision)
            )
        }));
        lines.join("\n\t")
    }
}

/// Renders `value` with exactly `precision` fractional digits.
fn format_fixed(value: Decimal, precision: u32) -> String {
    let mut fixed = value;
    fixed.rescale(precision);
    fixed.to_string()
}

fn serialize_holdings<S: Serializer>(
    holdings: &BTreeMap<String, HoldingRecord>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(holdings.values())
}
