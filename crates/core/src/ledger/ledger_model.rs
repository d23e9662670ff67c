use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::instruments::Instrument;

/// Quantity of an instrument held from `date` onwards, until the next entry
/// for the same instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionEntry {
    pub instrument: Arc<Instrument>,
    pub date: NaiveDate,
    pub quantity: Decimal,
}

impl PositionEntry {
    pub fn new(instrument: Arc<Instrument>, date: NaiveDate, quantity: Decimal) -> Self {
        Self {
            instrument,
            date,
            quantity,
        }
    }
}
