/// Salesboard - Sales Analytics Dashboard Engine
///
/// Loads a CSV of sales records into an immutable in-memory base table and
/// recomputes four dashboard charts (total sales trend, profit margin by
/// region, top-5 products, regional sales distribution) for any selection
/// of year-month periods. The rendering layer receives titled
/// (category, value) result sets and is otherwise out of scope.

pub mod charts;
pub mod period;
pub mod pipeline;
pub mod record;
pub mod store;

pub use charts::{
    Chart, ChartPoint, DashboardFrame, ProductSalesRow, RegionMarginRow, RegionSalesRow,
    TimeSeriesRow, PROFIT_MARGIN_TITLE, SALES_REGION_TITLE, TOP_PRODUCTS_TITLE, TOTAL_SALES_TITLE,
};
pub use period::Period;
pub use pipeline::{
    filter_records, profit_margin_by_region, sales_by_region, top_products, total_sales_over_time,
    Selection, TOP_PRODUCT_LIMIT,
};
pub use record::SalesRecord;
pub use store::{DataLoadError, SalesStore};

// Dashboard server modules - only when server feature is enabled
#[cfg(feature = "server")]
pub mod messages;
#[cfg(feature = "server")]
pub mod server;
#[cfg(feature = "server")]
pub mod websocket;
