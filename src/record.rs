//! The sales record row type.

use crate::period::Period;
use chrono::NaiveDate;
use serde::Serialize;

/// A single row of the base table.
///
/// The `period` is derived from `date` exactly once, in the constructor,
/// and never changes afterwards.
///
/// # Examples
///
/// ```
/// use salesboard::SalesRecord;
/// use chrono::NaiveDate;
///
/// let record = SalesRecord::new(
///     NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
///     "Widget".to_string(),
///     "East".to_string(),
///     100.0,
///     20.0,
/// );
///
/// assert_eq!(record.period.to_string(), "2024-01");
/// assert_eq!(record.margin_pct(), 20.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub period: Period,
    pub product: String,
    pub region: String,
    pub sales: f64,
    pub profit: f64,
}

impl SalesRecord {
    pub fn new(date: NaiveDate, product: String, region: String, sales: f64, profit: f64) -> Self {
        SalesRecord {
            date,
            period: Period::from_date(date),
            product,
            region,
            sales,
            profit,
        }
    }

    /// Profit margin of this row as a percentage.
    ///
    /// A zero-sales row divides by zero under normal f64 rules: nonzero
    /// profit gives an infinity, zero profit gives NaN. Downstream code
    /// carries these as data, never as errors.
    pub fn margin_pct(&self) -> f64 {
        self.profit / self.sales * 100.0
    }
}
