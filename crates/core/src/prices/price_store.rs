//! In-memory price repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use std::sync::RwLock;

use super::{InstrumentPrice, PriceHistory, PriceRepositoryTrait};
use crate::errors::{Error, Result};

#[derive(Default)]
pub struct InMemoryPriceStore {
    history: RwLock<PriceHistory>,
}

impl InMemoryPriceStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_error(e: impl std::fmt::Display) -> Error {
        Error::Repository(format!("Price store lock poisoned: {}", e))
    }
}

#[async_trait]
impl PriceRepositoryTrait for InMemoryPriceStore {
    async fn save_prices(&self, prices: &[InstrumentPrice]) -> Result<()> {
        // Validate the whole batch before touching the store.
        for price in prices {
            price.validate()?;
        }

        let mut history = self.history.write().map_err(Self::lock_error)?;
        let mut replaced = 0usize;
        for price in prices {
            if history.upsert(price).is_some() {
                replaced += 1;
            }
        }
        debug!(
            "Saved {} prices ({} replaced existing entries)",
            prices.len(),
            replaced
        );
        Ok(())
    }

    fn get_price_history(&self, instrument_id: &str) -> Result<Vec<InstrumentPrice>> {
        let history = self.history.read().map_err(Self::lock_error)?;
        Ok(history.series(instrument_id))
    }

    fn get_price_on_or_before(
        &self,
        instrument_id: &str,
        date: NaiveDate,
    ) -> Result<Option<InstrumentPrice>> {
        let history = self.history.read().map_err(Self::lock_error)?;
        Ok(history.price_on_or_before(instrument_id, date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_save_and_read_history() {
        let store = InMemoryPriceStore::new();
        store
            .save_prices(&[
                InstrumentPrice::new("STOCK", date(2024, 1, 3), dec!(12)).unwrap(),
                InstrumentPrice::new("STOCK", date(2024, 1, 1), dec!(10)).unwrap(),
            ])
            .await
            .unwrap();

        let history = store.get_price_history("STOCK").unwrap();
        let prices: Vec<Decimal> = history.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![dec!(10), dec!(12)]);

        let on_second = store
            .get_price_on_or_before("STOCK", date(2024, 1, 2))
            .unwrap()
            .unwrap();
        assert_eq!(on_second.price, dec!(10));
    }

    #[tokio::test]
    async fn test_invalid_batch_is_not_partially_saved() {
        let store = InMemoryPriceStore::new();
        let batch = vec![
            InstrumentPrice::new("STOCK", date(2024, 1, 1), dec!(10)).unwrap(),
            InstrumentPrice {
                instrument_id: "BOND".to_string(),
                date: date(2024, 1, 1),
                price: dec!(-5),
            },
        ];

        assert!(store.save_prices(&batch).await.is_err());
        assert!(store.get_price_history("STOCK").unwrap().is_empty());
    }
}
