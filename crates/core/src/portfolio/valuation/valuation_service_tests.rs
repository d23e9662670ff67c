//! Unit tests for the valuation service.

use super::*;
use crate::errors::{Error, Result};
use crate::instruments::{Instrument, InstrumentKind};
use crate::portfolio::holdings::{HoldingRecord, HoldingsProviderTrait};
use crate::settings::PortfolioSettings;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

// ============================================================================
// Mock Implementations
// ============================================================================

struct MockHoldingsProvider {
    holdings: HashMap<NaiveDate, Vec<HoldingRecord>>,
    requested: Mutex<Vec<NaiveDate>>,
    fail_on: Option<NaiveDate>,
}

impl MockHoldingsProvider {
    fn new(holdings: Vec<HoldingRecord>) -> Self {
        let mut by_date: HashMap<NaiveDate, Vec<HoldingRecord>> = HashMap::new();
        for record in holdings {
            by_date.entry(record.date()).or_default().push(record);
        }
        Self {
            holdings: by_date,
            requested: Mutex::new(Vec::new()),
            fail_on: None,
        }
    }

    fn failing_on(mut self, date: NaiveDate) -> Self {
        self.fail_on = Some(date);
        self
    }

    fn requested_dates(&self) -> Vec<NaiveDate> {
        self.requested.lock().unwrap().clone()
    }
}

impl HoldingsProviderTrait for MockHoldingsProvider {
    fn get_holdings(&self, date: NaiveDate) -> Result<Vec<HoldingRecord>> {
        self.requested.lock().unwrap().push(date);
        if self.fail_on == Some(date) {
            return Err(Error::Repository(format!("No ledger access for {}", date)));
        }
        Ok(self.holdings.get(&date).cloned().unwrap_or_default())
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn stock() -> Arc<Instrument> {
    Arc::new(Instrument::new("STOCK", "Stock Index", InstrumentKind::Stock))
}

fn bond() -> Arc<Instrument> {
    Arc::new(Instrument::new("BOND", "Treasury", InstrumentKind::Bond))
}

fn record(on: NaiveDate, instrument: Arc<Instrument>, price: Decimal, qty: Decimal) -> HoldingRecord {
    HoldingRecord::new(on, price, qty, instrument).unwrap()
}

fn service_with(provider: Arc<MockHoldingsProvider>) -> ValuationService {
    ValuationService::new(Arc::new(RwLock::new(PortfolioSettings::default())), provider)
}

// ============================================================================
// valuate
// ============================================================================

#[test]
fn test_valuate_builds_snapshot_for_date() {
    let provider = Arc::new(MockHoldingsProvider::new(vec![
        record(date(2023, 6, 1), stock(), dec!(10), dec!(5)),
        record(date(2023, 6, 1), bond(), dec!(20), dec!(2)),
    ]));
    let service = service_with(provider.clone());

    let snapshot = service.valuate(date(2023, 6, 1)).unwrap();

    assert_eq!(snapshot.date(), date(2023, 6, 1));
    assert_eq!(snapshot.total_value(), dec!(90));
    assert_eq!(provider.requested_dates(), vec![date(2023, 6, 1)]);
}

#[test]
fn test_valuate_without_holdings_is_empty() {
    let service = service_with(Arc::new(MockHoldingsProvider::new(Vec::new())));
    let snapshot = service.valuate(date(2023, 6, 1)).unwrap();
    assert!(snapshot.is_empty());
    assert_eq!(snapshot.total_value(), Decimal::ZERO);
}

#[test]
fn test_valuate_propagates_ledger_error() {
    let provider = Arc::new(MockHoldingsProvider::new(Vec::new()).failing_on(date(2023, 6, 1)));
    let service = service_with(provider);
    assert!(matches!(
        service.valuate(date(2023, 6, 1)),
        Err(Error::Repository(_))
    ));
}

#[test]
fn test_valuate_reports_total_overflow() {
    let provider = Arc::new(MockHoldingsProvider::new(vec![
        record(date(2023, 6, 1), stock(), dec!(60000000000000000000000000000), dec!(1)),
        record(date(2023, 6, 1), bond(), dec!(60000000000000000000000000000), dec!(1)),
    ]));
    let service = service_with(provider);

    assert!(matches!(
        service.valuate(date(2023, 6, 1)),
        Err(Error::Unexpected(_))
    ));
    assert!(service.get_summary(date(2023, 6, 1), None).is_err());
}

// ============================================================================
// rentability
// ============================================================================

#[test]
fn test_rentability_against_earlier_date() {
    let provider = Arc::new(MockHoldingsProvider::new(vec![
        record(date(2023, 1, 1), stock(), dec!(50), dec!(7)),
        record(date(2023, 6, 1), stock(), dec!(100), dec!(7)),
    ]));
    let service = service_with(provider.clone());

    let result = service.rentability(date(2023, 6, 1), date(2023, 1, 1)).unwrap();

    assert!(result.baseline_found);
    assert_eq!(result.absolute_return, dec!(350));
    assert_eq!(result.relative_return, dec!(1));
    assert_eq!(
        provider.requested_dates(),
        vec![date(2023, 6, 1), date(2023, 1, 1)]
    );
}

#[test]
fn test_rentability_without_history() {
    let provider = Arc::new(MockHoldingsProvider::new(vec![record(
        date(2023, 6, 1),
        stock(),
        dec!(100),
        dec!(5),
    )]));
    let service = service_with(provider);

    let result = service.rentability(date(2023, 6, 1), date(2023, 1, 1)).unwrap();

    assert!(!result.baseline_found);
    assert_eq!(result.current_value, dec!(500));
    assert_eq!(result.absolute_return, Decimal::ZERO);
    assert_eq!(result.relative_return, Decimal::ZERO);
}

#[test]
fn test_rentability_is_repeatable() {
    let provider = Arc::new(MockHoldingsProvider::new(vec![
        record(date(2023, 1, 1), stock(), dec!(10), dec!(5)),
        record(date(2023, 6, 1), stock(), dec!(10), dec!(5)),
        record(date(2023, 6, 1), bond(), dec!(20), dec!(2)),
    ]));
    let service = service_with(provider);

    let first = service.rentability(date(2023, 6, 1), date(2023, 1, 1)).unwrap();
    let second = service.rentability(date(2023, 6, 1), date(2023, 1, 1)).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.absolute_return, dec!(40));
}

#[test]
fn test_rentability_propagates_baseline_error() {
    let provider = Arc::new(
        MockHoldingsProvider::new(vec![record(date(2023, 6, 1), stock(), dec!(1), dec!(1))])
            .failing_on(date(2023, 1, 1)),
    );
    let service = service_with(provider);
    assert!(service.rentability(date(2023, 6, 1), date(2023, 1, 1)).is_err());
}

// ============================================================================
// history and summary
// ============================================================================

#[test]
fn test_valuation_history_skips_days_without_holdings() {
    let provider = Arc::new(MockHoldingsProvider::new(vec![
        record(date(2023, 1, 1), stock(), dec!(10), dec!(1)),
        record(date(2023, 1, 3), stock(), dec!(12), dec!(1)),
    ]));
    let service = service_with(provider.clone());

    let history = service
        .get_valuation_history(date(2023, 1, 1), date(2023, 1, 3))
        .unwrap();

    let points: Vec<(NaiveDate, Decimal)> =
        history.iter().map(|p| (p.date, p.total_value)).collect();
    assert_eq!(
        points,
        vec![(date(2023, 1, 1), dec!(10)), (date(2023, 1, 3), dec!(12))]
    );
    assert!(history.iter().all(|p| p.currency == "USD"));
    assert_eq!(provider.requested_dates().len(), 3);
}

#[test]
fn test_valuation_history_reversed_range_is_empty() {
    let service = service_with(Arc::new(MockHoldingsProvider::new(Vec::new())));
    let history = service
        .get_valuation_history(date(2023, 1, 3), date(2023, 1, 1))
        .unwrap();
    assert!(history.is_empty());
}

#[test]
fn test_summary_uses_configured_precision() {
    let provider = Arc::new(MockHoldingsProvider::new(vec![
        record(date(2023, 1, 1), stock(), dec!(50), dec!(7)),
        record(date(2023, 6, 1), stock(), dec!(100), dec!(7)),
    ]));
    let settings = Arc::new(RwLock::new(PortfolioSettings {
        base_currency: "BRL".to_string(),
        display_precision: 1,
    }));
    let service = ValuationService::new(settings, provider);

    let summary = service
        .get_summary(date(2023, 6, 1), Some(date(2023, 1, 1)))
        .unwrap();
    assert_eq!(
        summary,
        "Portfolio as of 2023-06-01: Total Value = 700.0 and Rentability = 100.0%\n\tStock Index: 7 units at $100.0 each"
    );

    let without_baseline = service.get_summary(date(2023, 6, 1), None).unwrap();
    assert!(without_baseline.contains("Rentability = 0.0%"));
}
