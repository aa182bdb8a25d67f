//! The aggregation pipeline.
//!
//! Everything here is a pure function of (base table, selection): filter
//! the rows whose period is selected, then derive the four dashboard
//! result sets from the filtered subset. No state is retained between
//! calls and identical inputs always produce identical outputs (the row
//! order is fixed, so floating-point association order is too).

use crate::charts::{
    Chart, DashboardFrame, ProductSalesRow, RegionMarginRow, RegionSalesRow, TimeSeriesRow,
    PROFIT_MARGIN_TITLE, SALES_REGION_TITLE, TOP_PRODUCTS_TITLE, TOTAL_SALES_TITLE,
};
use crate::period::Period;
use crate::record::SalesRecord;
use crate::store::SalesStore;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// How many products the ranking chart keeps.
pub const TOP_PRODUCT_LIMIT: usize = 5;

/// The set of periods currently chosen for display.
///
/// Selections are sets of `Period` values. Labels that are malformed or
/// name a period absent from the table are silently ignored: they simply
/// match no rows. An empty selection is legal and yields empty charts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    periods: BTreeSet<Period>,
}

impl Selection {
    /// Every period present in the store, the dashboard's startup default.
    pub fn all(store: &SalesStore) -> Self {
        Selection {
            periods: store.distinct_periods().into_iter().collect(),
        }
    }

    pub fn from_periods<I>(periods: I) -> Self
    where
        I: IntoIterator<Item = Period>,
    {
        Selection {
            periods: periods.into_iter().collect(),
        }
    }

    /// Parse `YYYY-MM` labels from the selection control, dropping any
    /// that do not parse.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Selection {
            periods: labels
                .into_iter()
                .filter_map(|label| label.as_ref().parse().ok())
                .collect(),
        }
    }

    pub fn contains(&self, period: Period) -> bool {
        self.periods.contains(&period)
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn periods(&self) -> impl Iterator<Item = Period> + '_ {
        self.periods.iter().copied()
    }
}

/// Retain exactly the rows whose period is selected, in base-table order.
pub fn filter_records<'a>(store: &'a SalesStore, selection: &Selection) -> Vec<&'a SalesRecord> {
    store
        .records()
        .iter()
        .filter(|record| selection.contains(record.period))
        .collect()
}

/// Groups rows by a string key in first-appearance order.
///
/// Returns one `(key, accumulated sum, row count)` entry per distinct key,
/// ordered by where each key first occurs in `rows`.
fn group_in_order<'a, K, A>(
    rows: &[&'a SalesRecord],
    key: K,
    mut accumulate: A,
) -> Vec<(String, f64, usize)>
where
    K: Fn(&SalesRecord) -> &str,
    A: FnMut(&SalesRecord) -> f64,
{
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, f64, usize)> = Vec::new();

    for row in rows {
        let name = key(row);
        let idx = match slots.get(name) {
            Some(&idx) => idx,
            None => {
                slots.insert(name.to_string(), groups.len());
                groups.push((name.to_string(), 0.0, 0));
                groups.len() - 1
            }
        };
        groups[idx].1 += accumulate(row);
        groups[idx].2 += 1;
    }

    groups
}

/// Branch A: group by period, sum sales, emit chronologically.
pub fn total_sales_over_time(rows: &[&SalesRecord]) -> Chart<TimeSeriesRow> {
    let mut totals: BTreeMap<Period, f64> = BTreeMap::new();
    for row in rows {
        *totals.entry(row.period).or_insert(0.0) += row.sales;
    }

    Chart {
        title: TOTAL_SALES_TITLE,
        rows: totals
            .into_iter()
            .map(|(period, total_sales)| TimeSeriesRow {
                period,
                total_sales,
            })
            .collect(),
    }
}

/// Branch B: mean per-row profit margin by region.
///
/// The margin is computed for every filtered row, including zero-sales
/// rows; their infinite or NaN contributions flow through the mean under
/// normal f64 arithmetic rather than failing the call.
pub fn profit_margin_by_region(rows: &[&SalesRecord]) -> Chart<RegionMarginRow> {
    let groups = group_in_order(rows, |r| r.region.as_str(), |r| r.margin_pct());

    Chart {
        title: PROFIT_MARGIN_TITLE,
        rows: groups
            .into_iter()
            .map(|(region, margin_sum, count)| RegionMarginRow {
                region,
                margin_pct: margin_sum / count as f64,
            })
            .collect(),
    }
}

/// Branch C: the five products with the largest summed sales.
///
/// Groups form in first-appearance order and the descending sort is
/// stable, so a tie for the last slot goes to the product seen earliest
/// among the filtered rows.
pub fn top_products(rows: &[&SalesRecord]) -> Chart<ProductSalesRow> {
    let mut products: Vec<ProductSalesRow> = group_in_order(rows, |r| r.product.as_str(), |r| r.sales)
        .into_iter()
        .map(|(product, total_sales, _)| ProductSalesRow {
            product,
            total_sales,
        })
        .collect();

    products.sort_by(|a, b| {
        b.total_sales
            .partial_cmp(&a.total_sales)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    products.truncate(TOP_PRODUCT_LIMIT);

    Chart {
        title: TOP_PRODUCTS_TITLE,
        rows: products,
    }
}

/// Branch D: summed sales by region, in first-appearance order.
///
/// The row values sum to the filtered table's total sales, which is what
/// lets a renderer present them as proportions.
pub fn sales_by_region(rows: &[&SalesRecord]) -> Chart<RegionSalesRow> {
    let groups = group_in_order(rows, |r| r.region.as_str(), |r| r.sales);

    Chart {
        title: SALES_REGION_TITLE,
        rows: groups
            .into_iter()
            .map(|(region, total_sales, _)| RegionSalesRow {
                region,
                total_sales,
            })
            .collect(),
    }
}

impl DashboardFrame {
    /// Recompute all four charts for a selection.
    ///
    /// This is the reactive callback's entry point: filter once, then
    /// branch into the four aggregations. There is no partial-failure
    /// mode; input validation happened at load time.
    pub fn compute(store: &SalesStore, selection: &Selection) -> DashboardFrame {
        let filtered = filter_records(store, selection);

        DashboardFrame {
            total_sales: total_sales_over_time(&filtered),
            profit_margin: profit_margin_by_region(&filtered),
            top_products: top_products(&filtered),
            sales_by_region: sales_by_region(&filtered),
        }
    }
}
