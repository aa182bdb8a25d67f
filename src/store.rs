//! The data store: loads and owns the immutable base table.
//!
//! The store is constructed exactly once, at process start, from a CSV
//! source with the fixed header columns `Date`, `Product`, `Region`,
//! `Sales`, `Profit`. After that it only hands out read-only views; there
//! is no mutation API. Every load failure is a `DataLoadError` and fatal:
//! the dashboard never serves without its table.

use crate::period::Period;
use crate::record::SalesRecord;
use chrono::NaiveDate;
use log::info;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Header columns the input file must carry. Order is free, names are not.
pub const REQUIRED_COLUMNS: [&str; 5] = ["Date", "Product", "Region", "Sales", "Profit"];

/// Errors raised while loading the base table.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// The source file is absent or unreadable.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input is empty: no header row")]
    EmptyInput,

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: expected {expected} columns, got {got}")]
    ShortRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("row {row}: unparseable date '{value}'")]
    InvalidDate { row: usize, value: String },

    #[error("row {row}: non-numeric value '{value}' in column '{column}'")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// Immutable base table of sales records.
///
/// Rows keep the order the source had; all derived views are computed
/// against that fixed order.
///
/// # Examples
///
/// ```
/// use salesboard::SalesStore;
/// use std::io::Cursor;
///
/// let csv = "Date,Product,Region,Sales,Profit\n\
///            2024-01-05,Widget,East,100,20\n\
///            2024-02-01,Gadget,West,200,60\n";
/// let store = SalesStore::load_from_reader(Cursor::new(csv)).unwrap();
///
/// assert_eq!(store.len(), 2);
/// let labels: Vec<String> = store
///     .distinct_periods()
///     .iter()
///     .map(|p| p.to_string())
///     .collect();
/// assert_eq!(labels, vec!["2024-01", "2024-02"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SalesStore {
    records: Vec<SalesRecord>,
}

/// Column positions resolved from the header row.
struct ColumnIndices {
    date: usize,
    product: usize,
    region: usize,
    sales: usize,
    profit: usize,
    width: usize,
}

impl ColumnIndices {
    fn resolve(header: &[&str]) -> Result<Self, DataLoadError> {
        let find = |name: &'static str| -> Result<usize, DataLoadError> {
            header
                .iter()
                .position(|col| col.trim() == name)
                .ok_or(DataLoadError::MissingColumn(name))
        };

        Ok(ColumnIndices {
            date: find("Date")?,
            product: find("Product")?,
            region: find("Region")?,
            sales: find("Sales")?,
            profit: find("Profit")?,
            width: header.len(),
        })
    }
}

fn split_csv_line(line: &str) -> Vec<&str> {
    line.trim_end_matches(&['\r', '\n'][..]).split(',').collect()
}

/// Dates arrive as `YYYY-MM-DD`, with `M/D/YYYY` as a fallback for
/// spreadsheet exports.
fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%m/%d/%Y"))
        .ok()
}

fn parse_number(
    value: &str,
    column: &'static str,
    row: usize,
) -> Result<f64, DataLoadError> {
    value
        .trim()
        .parse()
        .map_err(|_| DataLoadError::InvalidNumber {
            row,
            column,
            value: value.trim().to_string(),
        })
}

impl SalesStore {
    /// Build a store from already-constructed records (tests, demos).
    pub fn from_records(records: Vec<SalesRecord>) -> Self {
        SalesStore { records }
    }

    /// Load the base table from a CSV file.
    pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Self, DataLoadError> {
        let file = File::open(path.as_ref())?;
        let store = Self::load_from_reader(BufReader::new(file))?;

        info!(
            "loaded {} sales records across {} periods from {}",
            store.len(),
            store.distinct_periods().len(),
            path.as_ref().display()
        );

        Ok(store)
    }

    /// Load the base table from any buffered CSV source.
    pub fn load_from_reader<R: BufRead>(reader: R) -> Result<Self, DataLoadError> {
        let mut lines = reader.lines();

        let header = match lines.next() {
            Some(line) => line?,
            None => return Err(DataLoadError::EmptyInput),
        };
        let columns = ColumnIndices::resolve(&split_csv_line(&header))?;

        let mut records = Vec::new();

        // Data rows are numbered from 1, header excluded
        let mut row = 0;
        for line in lines {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            row += 1;

            let cols = split_csv_line(&line);
            if cols.len() < columns.width {
                return Err(DataLoadError::ShortRow {
                    row,
                    expected: columns.width,
                    got: cols.len(),
                });
            }

            let date_str = cols[columns.date].trim();
            let date = parse_date(date_str).ok_or_else(|| DataLoadError::InvalidDate {
                row,
                value: date_str.to_string(),
            })?;

            let sales = parse_number(cols[columns.sales], "Sales", row)?;
            let profit = parse_number(cols[columns.profit], "Profit", row)?;

            records.push(SalesRecord::new(
                date,
                cols[columns.product].trim().to_string(),
                cols[columns.region].trim().to_string(),
                sales,
                profit,
            ));
        }

        Ok(SalesStore { records })
    }

    /// All rows, in source order.
    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of the sales column over the whole table.
    pub fn total_sales(&self) -> f64 {
        self.records.iter().map(|r| r.sales).sum()
    }

    /// All distinct periods present, chronologically, deduplicated.
    ///
    /// This is what populates the selection control.
    pub fn distinct_periods(&self) -> Vec<Period> {
        let periods: BTreeSet<Period> = self.records.iter().map(|r| r.period).collect();
        periods.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const GOOD_CSV: &str = "Date,Product,Region,Sales,Profit\n\
                            2024-01-05,Widget,East,100,20\n\
                            2024-01-20,Widget,East,50,5\n\
                            2024-02-01,Gadget,West,200,60\n";

    #[test]
    fn test_load_from_reader() {
        let store = SalesStore::load_from_reader(Cursor::new(GOOD_CSV)).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.records()[0].product, "Widget");
        assert_eq!(store.records()[0].sales, 100.0);
        assert_eq!(store.records()[2].region, "West");
        assert_eq!(store.total_sales(), 350.0);
    }

    #[test]
    fn test_rows_keep_source_order() {
        let store = SalesStore::load_from_reader(Cursor::new(GOOD_CSV)).unwrap();
        let products: Vec<&str> = store.records().iter().map(|r| r.product.as_str()).collect();
        assert_eq!(products, vec!["Widget", "Widget", "Gadget"]);
    }

    #[test]
    fn test_distinct_periods_chronological_and_deduplicated() {
        // Periods deliberately out of order in the source
        let csv = "Date,Product,Region,Sales,Profit\n\
                   2024-03-01,Widget,East,10,1\n\
                   2024-01-05,Widget,East,10,1\n\
                   2024-03-15,Gadget,West,10,1\n\
                   2023-12-31,Gadget,West,10,1\n";
        let store = SalesStore::load_from_reader(Cursor::new(csv)).unwrap();

        let labels: Vec<String> = store
            .distinct_periods()
            .iter()
            .map(|p| p.to_string())
            .collect();
        assert_eq!(labels, vec!["2023-12", "2024-01", "2024-03"]);
    }

    #[test]
    fn test_column_order_is_free() {
        let csv = "Region,Profit,Date,Sales,Product\n\
                   East,20,2024-01-05,100,Widget\n";
        let store = SalesStore::load_from_reader(Cursor::new(csv)).unwrap();

        let record = &store.records()[0];
        assert_eq!(record.region, "East");
        assert_eq!(record.product, "Widget");
        assert_eq!(record.sales, 100.0);
        assert_eq!(record.profit, 20.0);
    }

    #[test]
    fn test_slash_date_format_accepted() {
        let csv = "Date,Product,Region,Sales,Profit\n\
                   1/5/2024,Widget,East,100,20\n";
        let store = SalesStore::load_from_reader(Cursor::new(csv)).unwrap();
        assert_eq!(store.records()[0].period.to_string(), "2024-01");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let csv = "Date,Product,Region,Sales,Profit\n\
                   2024-01-05,Widget,East,100,20\n\
                   \n\
                   2024-02-01,Gadget,West,200,60\n";
        let store = SalesStore::load_from_reader(Cursor::new(csv)).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_empty_input_is_error() {
        let err = SalesStore::load_from_reader(Cursor::new("")).unwrap_err();
        assert!(matches!(err, DataLoadError::EmptyInput));
    }

    #[test]
    fn test_missing_column_is_error() {
        let csv = "Date,Product,Region,Sales\n2024-01-05,Widget,East,100\n";
        let err = SalesStore::load_from_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn("Profit")));
    }

    #[test]
    fn test_every_required_column_enforced() {
        for missing in REQUIRED_COLUMNS {
            let header: Vec<&str> = REQUIRED_COLUMNS
                .iter()
                .copied()
                .filter(|&c| c != missing)
                .collect();
            let csv = format!("{}\n", header.join(","));

            let err = SalesStore::load_from_reader(Cursor::new(csv)).unwrap_err();
            match err {
                DataLoadError::MissingColumn(name) => assert_eq!(name, missing),
                other => panic!("unexpected error: {:?}", other),
            }
        }
    }

    #[test]
    fn test_unparseable_date_is_error() {
        let csv = "Date,Product,Region,Sales,Profit\n\
                   not-a-date,Widget,East,100,20\n";
        let err = SalesStore::load_from_reader(Cursor::new(csv)).unwrap_err();
        match err {
            DataLoadError::InvalidDate { row, value } => {
                assert_eq!(row, 1);
                assert_eq!(value, "not-a-date");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_sales_is_error() {
        let csv = "Date,Product,Region,Sales,Profit\n\
                   2024-01-05,Widget,East,lots,20\n";
        let err = SalesStore::load_from_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::InvalidNumber {
                column: "Sales",
                ..
            }
        ));
    }

    #[test]
    fn test_short_row_is_error() {
        let csv = "Date,Product,Region,Sales,Profit\n\
                   2024-01-05,Widget,East\n";
        let err = SalesStore::load_from_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::ShortRow {
                row: 1,
                expected: 5,
                got: 3
            }
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SalesStore::load_csv("definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, DataLoadError::Io(_)));
    }
}
