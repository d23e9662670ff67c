//! Instrument domain models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Error, Result, ValidationError};

/// Asset class of an instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstrumentKind {
    Stock,
    Bond,
    RealEstate,
    MutualFund,
    Etf,
    #[default]
    Other,
}

impl InstrumentKind {
    /// Human readable label used in reports.
    pub const fn display_name(&self) -> &'static str {
        match self {
            InstrumentKind::Stock => "Stock",
            InstrumentKind::Bond => "Bond",
            InstrumentKind::RealEstate => "Real Estate",
            InstrumentKind::MutualFund => "Mutual Fund",
            InstrumentKind::Etf => "ETF",
            InstrumentKind::Other => "Other",
        }
    }
}

impl std::fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A tradable asset referenced by holding records.
///
/// Identity is the `id`; two instruments with the same id are the same
/// position key inside a snapshot regardless of name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    pub id: String,
    pub name: String,
    pub kind: InstrumentKind,
}

impl Instrument {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: InstrumentKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }
}

impl std::fmt::Display for Instrument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

/// Input model for registering an instrument in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInstrument {
    /// Optional pre-assigned ID. A UUID is generated when absent.
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub kind: InstrumentKind,
}

impl NewInstrument {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        if self.id.as_ref().is_some_and(|id| id.trim().is_empty()) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Instrument id cannot be blank".to_string(),
            )));
        }
        Ok(())
    }

    /// Validates and materializes the instrument.
    pub fn into_instrument(self) -> Result<Instrument> {
        self.validate()?;
        let id = self.id.unwrap_or_else(|| Uuid::new_v4().to_string());
        Ok(Instrument {
            id,
            name: self.name.trim().to_string(),
            kind: self.kind,
        })
    }
}
