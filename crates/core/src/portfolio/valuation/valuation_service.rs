use crate::errors::{Error as CoreError, Result as CoreResult};
use crate::portfolio::holdings::HoldingsProviderTrait;
use crate::portfolio::rentability::{calculate_rentability, RentabilityResult};
use crate::portfolio::snapshot::PortfolioSnapshot;
use crate::portfolio::valuation::valuation_model::ValuationHistoryPoint;
use crate::settings::PortfolioSettings;
use crate::utils::time_utils;
use chrono::NaiveDate;
use log::debug;
use std::sync::{Arc, RwLock};
use std::time::Instant;

pub trait ValuationServiceTrait: Send + Sync {
    /// Builds the portfolio snapshot for a date from the ledger's holdings.
    ///
    /// Args:
    ///     date: The valuation date.
    ///
    /// Returns:
    ///     A `PortfolioSnapshot`, empty when the ledger has no holdings at `date`.
    fn valuate(&self, date: NaiveDate) -> CoreResult<PortfolioSnapshot>;

    /// Rentability of the portfolio at `date` against the portfolio at `start_date`.
    ///
    /// Args:
    ///     date: Date of the current snapshot.
    ///     start_date: Date of the baseline snapshot.
    ///
    /// Returns:
    ///     A `RentabilityResult`; `baseline_found` is false when the ledger
    ///     has no holdings at `start_date`.
    fn rentability(&self, date: NaiveDate, start_date: NaiveDate)
        -> CoreResult<RentabilityResult>;

    /// Total value for each day in `[start_date, end_date]` that has holdings,
    /// ordered by date.
    fn get_valuation_history(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> CoreResult<Vec<ValuationHistoryPoint>>;

    /// Report of the snapshot at `date`, with its rentability against
    /// `start_date` when one is given.
    fn get_summary(&self, date: NaiveDate, start_date: Option<NaiveDate>) -> CoreResult<String>;
}

#[derive(Clone)]
pub struct ValuationService {
    settings: Arc<RwLock<PortfolioSettings>>,
    holdings_provider: Arc<dyn HoldingsProviderTrait>,
}

impl ValuationService {
    pub fn new(
        settings: Arc<RwLock<PortfolioSettings>>,
        holdings_provider: Arc<dyn HoldingsProviderTrait>,
    ) -> Self {
        Self {
            settings,
            holdings_provider,
        }
    }

    fn current_settings(&self) -> CoreResult<PortfolioSettings> {
        self.settings
            .read()
            .map(|guard| guard.clone())
            .map_err(|e| CoreError::Unexpected(format!("Settings lock poisoned: {}", e)))
    }
}

impl ValuationServiceTrait for ValuationService {
    fn valuate(&self, date: NaiveDate) -> CoreResult<PortfolioSnapshot> {
        let records = self.holdings_provider.get_holdings(date)?;
        PortfolioSnapshot::new(records, date)
    }

    fn rentability(
        &self,
        date: NaiveDate,
        start_date: NaiveDate,
    ) -> CoreResult<RentabilityResult> {
        let current = self.valuate(date)?;
        calculate_rentability(&current, start_date, |d| {
            self.holdings_provider.get_holdings(d)
        })
    }

    fn get_valuation_history(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> CoreResult<Vec<ValuationHistoryPoint>> {
        let start_time = Instant::now();
        let currency = self.current_settings()?.base_currency;

        let mut history = Vec::new();
        for date in time_utils::get_days_between(start_date, end_date) {
            let snapshot = self.valuate(date)?;
            if snapshot.is_empty() {
                continue;
            }
            history.push(ValuationHistoryPoint {
                date,
                total_value: snapshot.total_value(),
                currency: currency.clone(),
            });
        }

        debug!(
            "Valuation history {}..{}: {} points in {:?}",
            start_date,
            end_date,
            history.len(),
            start_time.elapsed()
        );
        Ok(history)
    }

    fn get_summary(&self, date: NaiveDate, start_date: Option<NaiveDate>) -> CoreResult<String> {
        let precision = self.current_settings()?.display_precision;
        let snapshot = self.valuate(date)?;
        let rentability = match start_date {
            Some(start) => Some(calculate_rentability(&snapshot, start, |d| {
                self.holdings_provider.get_holdings(d)
            })?),
            None => None,
        };
        Ok(snapshot.summary_with_precision(rentability.as_ref(), precision))
    }
}
