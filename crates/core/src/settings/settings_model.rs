//! Portfolio settings model.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BASE_CURRENCY, DISPLAY_DECIMAL_PRECISION, MAX_DECIMAL_SCALE};
use crate::errors::{Error, Result};

/// Settings consumed by the valuation service.
///
/// `base_currency` is only a label for reports; every value handed to the
/// engine is assumed to already be expressed in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioSettings {
    pub base_currency: String,
    pub display_precision: u32,
}

impl Default for PortfolioSettings {
    fn default() -> Self {
        Self {
            base_currency: DEFAULT_BASE_CURRENCY.to_string(),
            display_precision: DISPLAY_DECIMAL_PRECISION,
        }
    }
}

impl PortfolioSettings {
    /// Parses settings from JSON, filling missing keys with defaults.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let settings: PortfolioSettings = serde_json::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_currency.trim().is_empty() {
            return Err(Error::InvalidConfigValue(
                "baseCurrency cannot be empty".to_string(),
            ));
        }
        if self.display_precision > MAX_DECIMAL_SCALE {
            return Err(Error::InvalidConfigValue(format!(
                "displayPrecision must be at most {}, got {}",
                MAX_DECIMAL_SCALE, self.display_precision
            )));
        }
        Ok(())
    }
}
