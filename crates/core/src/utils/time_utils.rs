use chrono::NaiveDate;

/// Every calendar day from `start` to `end`, both inclusive. Empty when `start > end`.
pub fn get_days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    start.iter_days().take_while(|day| *day <= end).collect()
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> crate::errors::Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")?)
}
