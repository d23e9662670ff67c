//! In-memory instrument catalog.

use async_trait::async_trait;
use log::debug;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{Instrument, InstrumentCatalogTrait, NewInstrument};
use crate::errors::{Error, Result};

#[derive(Default)]
pub struct InMemoryInstrumentCatalog {
    instruments: RwLock<HashMap<String, Arc<Instrument>>>,
}

impl InMemoryInstrumentCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InstrumentCatalogTrait for InMemoryInstrumentCatalog {
    async fn create(&self, new_instrument: NewInstrument) -> Result<Arc<Instrument>> {
        let instrument = Arc::new(new_instrument.into_instrument()?);
        let mut instruments = self
            .instruments
            .write()
            .map_err(|e| Error::Repository(format!("Instrument catalog lock poisoned: {}", e)))?;

        if instruments.contains_key(&instrument.id) {
            return Err(Error::Repository(format!(
                "Instrument {} already exists",
                instrument.id
            )));
        }

        debug!("Registered instrument {}", instrument);
        instruments.insert(instrument.id.clone(), Arc::clone(&instrument));
        Ok(instrument)
    }

    fn get_by_id(&self, instrument_id: &str) -> Result<Arc<Instrument>> {
        let instruments = self
            .instruments
            .read()
            .map_err(|e| Error::Repository(format!("Instrument catalog lock poisoned: {}", e)))?;
        instruments
            .get(instrument_id)
            .cloned()
            .ok_or_else(|| Error::Repository(format!("Instrument {} not found", instrument_id)))
    }

    fn list(&self) -> Result<Vec<Arc<Instrument>>> {
        let instruments = self
            .instruments
            .read()
            .map_err(|e| Error::Repository(format!("Instrument catalog lock poisoned: {}", e)))?;
        let mut all: Vec<Arc<Instrument>> = instruments.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(all)
    }
}
