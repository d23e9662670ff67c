//! Repository traits for instrument prices.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::InstrumentPrice;
use crate::errors::Result;

/// Repository trait for managing instrument price history.
#[async_trait]
pub trait PriceRepositoryTrait: Send + Sync {
    /// Save prices, replacing any existing price for the same instrument and date.
    async fn save_prices(&self, prices: &[InstrumentPrice]) -> Result<()>;

    /// Full price history of an instrument, ascending by date.
    fn get_price_history(&self, instrument_id: &str) -> Result<Vec<InstrumentPrice>>;

    /// Latest price on or before the given date.
    fn get_price_on_or_before(
        &self,
        instrument_id: &str,
        date: NaiveDate,
    ) -> Result<Option<InstrumentPrice>>;
}
