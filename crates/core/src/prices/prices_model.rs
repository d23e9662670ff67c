//! Price domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::errors::{Error, Result, ValidationError};

/// Closing unit price of an instrument on a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentPrice {
    pub instrument_id: String,
    pub date: NaiveDate,
    pub price: Decimal,
}

impl InstrumentPrice {
    pub fn new(instrument_id: impl Into<String>, date: NaiveDate, price: Decimal) -> Result<Self> {
        let price = Self {
            instrument_id: instrument_id.into(),
            date,
            price,
        };
        price.validate()?;
        Ok(price)
    }

    pub fn validate(&self) -> Result<()> {
        if self.instrument_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "instrumentId".to_string(),
            )));
        }
        if self.price.is_sign_negative() && !self.price.is_zero() {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Price for {} on {} cannot be negative: {}",
                self.instrument_id, self.date, self.price
            ))));
        }
        Ok(())
    }
}

/// Per-instrument price series, at most one price per (instrument, date).
#[derive(Debug, Clone, Default)]
pub struct PriceHistory {
    series: HashMap<String, BTreeMap<NaiveDate, Decimal>>,
}

impl PriceHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a price, replacing any existing price for the same instrument and date.
    /// Returns the replaced price, if any.
    pub fn upsert(&mut self, price: &InstrumentPrice) -> Option<Decimal> {
        self.series
            .entry(price.instrument_id.clone())
            .or_default()
            .insert(price.date, price.price)
    }

    /// Latest price observed on or before `date`.
    pub fn price_on_or_before(&self, instrument_id: &str, date: NaiveDate) -> Option<InstrumentPrice> {
        self.series
            .get(instrument_id)?
            .range(..=date)
            .next_back()
            .map(|(price_date, price)| InstrumentPrice {
                instrument_id: instrument_id.to_string(),
                date: *price_date,
                price: *price,
            })
    }

    /// Full history of an instrument, ascending by date.
    pub fn series(&self, instrument_id: &str) -> Vec<InstrumentPrice> {
        self.series
            .get(instrument_id)
            .map(|prices| {
                prices
                    .iter()
                    .map(|(date, price)| InstrumentPrice {
                        instrument_id: instrument_id.to_string(),
                        date: *date,
                        price: *price,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.series.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
