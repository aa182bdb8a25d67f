//! Aggregate result sets handed to the rendering layer.
//!
//! Each chart is an ephemeral, titled table of `(category, value)` rows,
//! recomputed in full on every selection change and discarded after
//! rendering. Nothing here is cached.

use crate::period::Period;
use serde::Serialize;

pub const TOTAL_SALES_TITLE: &str = "Total Sales Over Time";
pub const PROFIT_MARGIN_TITLE: &str = "Profit Margin by Region";
pub const TOP_PRODUCTS_TITLE: &str = "Top 5 Best-Selling Products";
pub const SALES_REGION_TITLE: &str = "Sales Distribution by Region";

/// One point of a chart, in the `(category, value)` shape charting
/// components consume.
pub trait ChartPoint {
    fn label(&self) -> String;
    fn value(&self) -> f64;
}

/// Total sales of one period, chronologically ordered within its chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesRow {
    pub period: Period,
    pub total_sales: f64,
}

impl ChartPoint for TimeSeriesRow {
    fn label(&self) -> String {
        self.period.to_string()
    }

    fn value(&self) -> f64 {
        self.total_sales
    }
}

/// Mean per-row profit margin of one region, as a percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionMarginRow {
    pub region: String,
    pub margin_pct: f64,
}

impl ChartPoint for RegionMarginRow {
    fn label(&self) -> String {
        self.region.clone()
    }

    fn value(&self) -> f64 {
        self.margin_pct
    }
}

/// Total sales of one product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSalesRow {
    pub product: String,
    pub total_sales: f64,
}

impl ChartPoint for ProductSalesRow {
    fn label(&self) -> String {
        self.product.clone()
    }

    fn value(&self) -> f64 {
        self.total_sales
    }
}

/// Total sales of one region. Across a chart these sum to the filtered
/// table's total, so a renderer can treat them as pie proportions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionSalesRow {
    pub region: String,
    pub total_sales: f64,
}

impl ChartPoint for RegionSalesRow {
    fn label(&self) -> String {
        self.region.clone()
    }

    fn value(&self) -> f64 {
        self.total_sales
    }
}

/// A titled result set, ready for hand-off to a charting component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart<R> {
    pub title: &'static str,
    pub rows: Vec<R>,
}

impl<R: ChartPoint> Chart<R> {
    /// Flatten to `(category, value)` pairs.
    pub fn points(&self) -> Vec<(String, f64)> {
        self.rows.iter().map(|r| (r.label(), r.value())).collect()
    }
}

impl<R> Chart<R> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The four charts one dashboard update produces.
///
/// The reactive callback contract is all-or-nothing: every selection change
/// recomputes all four together, there is no partial refresh.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardFrame {
    pub total_sales: Chart<TimeSeriesRow>,
    pub profit_margin: Chart<RegionMarginRow>,
    pub top_products: Chart<ProductSalesRow>,
    pub sales_by_region: Chart<RegionSalesRow>,
}
