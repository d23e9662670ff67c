//! Instrument catalog traits.

use async_trait::async_trait;
use std::sync::Arc;

use super::{Instrument, NewInstrument};
use crate::errors::Result;

/// Resolves instrument identifiers to shared `Instrument` references.
#[async_trait]
pub trait InstrumentCatalogTrait: Send + Sync {
    /// Register a new instrument. Fails if the id is already taken.
    async fn create(&self, new_instrument: NewInstrument) -> Result<Arc<Instrument>>;

    /// Look up an instrument by id.
    fn get_by_id(&self, instrument_id: &str) -> Result<Arc<Instrument>>;

    /// All instruments ordered by name.
    fn list(&self) -> Result<Vec<Arc<Instrument>>>;
}
