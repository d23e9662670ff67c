//! Holding record domain models.

use chrono::NaiveDate;
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::sync::Arc;

use crate::errors::{Error, Result, ValidationError};
use crate::instruments::Instrument;
use crate::utils::time_utils::parse_date;

/// A quantity of one instrument held as of one date, valued at the unit
/// price observed on that date.
///
/// Records are immutable once built. The instrument is shared with the
/// catalog, never owned. A negative quantity represents a reduction.
#[derive(Debug, Clone, PartialEq)]
pub struct HoldingRecord {
    date: NaiveDate,
    instrument: Arc<Instrument>,
    unit_price: Decimal,
    quantity: Decimal,
    value: Decimal,
}

impl HoldingRecord {
    /// Builds a record, rejecting negative unit prices, instruments without an
    /// id and positions whose value does not fit in a `Decimal`.
    pub fn new(
        date: NaiveDate,
        unit_price: Decimal,
        quantity: Decimal,
        instrument: Arc<Instrument>,
    ) -> Result<Self> {
        if instrument.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "instrument".to_string(),
            )));
        }
        if unit_price.is_sign_negative() && !unit_price.is_zero() {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unit price for {} on {} cannot be negative: {}",
                instrument.id, date, unit_price
            ))));
        }
        let value = unit_price.checked_mul(quantity).ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "Value of {} on {} overflows: {} x {}",
                instrument.id, date, unit_price, quantity
            )))
        })?;
        Ok(Self {
            date,
            instrument,
            unit_price,
            quantity,
            value,
        })
    }

    /// Builds a record from floating point inputs, rejecting NaN and infinities.
    pub fn from_f64(
        date: NaiveDate,
        unit_price: f64,
        quantity: f64,
        instrument: Arc<Instrument>,
    ) -> Result<Self> {
        let unit_price = decimal_from_f64("unitPrice", unit_price)?;
        let quantity = decimal_from_f64("quantity", quantity)?;
        Self::new(date, unit_price, quantity, instrument)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn instrument(&self) -> &Arc<Instrument> {
        &self.instrument
    }

    pub fn instrument_id(&self) -> &str {
        &self.instrument.id
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Market value of the position: `unit_price * quantity`.
    pub fn value(&self) -> Decimal {
        self.value
    }
}

impl Serialize for HoldingRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("HoldingRecord", 5)?;
        state.serialize_field("date", &self.date)?;
        state.serialize_field("instrument", self.instrument.as_ref())?;
        state.serialize_field("quantity", &self.quantity)?;
        state.serialize_field("unitPrice", &self.unit_price)?;
        state.serialize_field("value", &self.value)?;
        state.end()
    }
}

/// Raw holding input as handed over by a collaborator (JSON rows, CSV, forms).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHoldingRecord {
    /// Calendar date in `YYYY-MM-DD` form.
    pub date: String,
    #[serde(default)]
    pub instrument: Option<Arc<Instrument>>,
    pub unit_price: f64,
    pub quantity: f64,
}

impl TryFrom<NewHoldingRecord> for HoldingRecord {
    type Error = Error;

    fn try_from(raw: NewHoldingRecord) -> Result<Self> {
        let instrument = raw.instrument.ok_or_else(|| {
            Error::Validation(ValidationError::MissingField("instrument".to_string()))
        })?;
        let date = parse_date(&raw.date)?;
        HoldingRecord::from_f64(date, raw.unit_price, raw.quantity, instrument)
    }
}

fn decimal_from_f64(field: &str, value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(Error::Validation(ValidationError::NonFiniteNumber {
            field: field.to_string(),
            value,
        }));
    }
    Decimal::from_f64(value).ok_or_else(|| {
        Error::Validation(ValidationError::InvalidInput(format!(
            "{} is out of range: {}",
            field, value
        )))
    })
}
