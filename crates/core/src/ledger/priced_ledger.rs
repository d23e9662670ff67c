use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use super::PositionEntry;
use crate::errors::{Error, Result, ValidationError};
use crate::instruments::Instrument;
use crate::portfolio::holdings::{HoldingRecord, HoldingsProviderTrait};
use crate::prices::PriceRepositoryTrait;

struct InstrumentPositions {
    instrument: Arc<Instrument>,
    quantities: BTreeMap<NaiveDate, Decimal>,
}

/// Ledger collaborator that values recorded positions with stored prices.
///
/// For a requested date each instrument contributes its latest recorded
/// quantity on or before that date, priced at its latest price on or before
/// that date. Closed positions (zero quantity) and unpriced instruments are
/// left out.
pub struct PricedLedger {
    positions: RwLock<BTreeMap<String, InstrumentPositions>>,
    price_repository: Arc<dyn PriceRepositoryTrait>,
}

impl PricedLedger {
    pub fn new(price_repository: Arc<dyn PriceRepositoryTrait>) -> Self {
        Self {
            positions: RwLock::new(BTreeMap::new()),
            price_repository,
        }
    }

    /// Records position entries. An entry for an instrument and date that is
    /// already recorded replaces it.
    pub fn record_positions(&self, entries: &[PositionEntry]) -> Result<()> {
        for entry in entries {
            if entry.instrument.id.trim().is_empty() {
                return Err(Error::Validation(ValidationError::MissingField(
                    "instrument".to_string(),
                )));
            }
        }

        let mut positions = self
            .positions
            .write()
            .map_err(|e| Error::Repository(format!("Ledger lock poisoned: {}", e)))?;
        for entry in entries {
            let slot = positions
                .entry(entry.instrument.id.clone())
                .or_insert_with(|| InstrumentPositions {
                    instrument: Arc::clone(&entry.instrument),
                    quantities: BTreeMap::new(),
                });
            slot.instrument = Arc::clone(&entry.instrument);
            slot.quantities.insert(entry.date, entry.quantity);
        }
        Ok(())
    }
}

impl HoldingsProviderTrait for PricedLedger {
    fn get_holdings(&self, date: NaiveDate) -> Result<Vec<HoldingRecord>> {
        let positions = self
            .positions
            .read()
            .map_err(|e| Error::Repository(format!("Ledger lock poisoned: {}", e)))?;

        let mut records = Vec::new();
        for (instrument_id, position) in positions.iter() {
            let Some((_, quantity)) = position.quantities.range(..=date).next_back() else {
                continue;
            };
            if quantity.is_zero() {
                continue;
            }

            match self
                .price_repository
                .get_price_on_or_before(instrument_id, date)?
            {
                Some(price) => records.push(HoldingRecord::new(
                    date,
                    price.price,
                    *quantity,
                    Arc::clone(&position.instrument),
                )?),
                None => {
                    debug!(
                        "No price for instrument {} on or before {}. Position left out of holdings.",
                        instrument_id, date
                    );
                }
            }
        }
        Ok(records)
    }
}
