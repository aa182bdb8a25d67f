/// Selections Example
///
/// This example demonstrates:
/// - Recomputing the dashboard as the period selection changes
/// - Empty selections producing empty charts
/// - Unknown and malformed period labels being ignored

use chrono::NaiveDate;
use salesboard::{ChartPoint, DashboardFrame, SalesRecord, SalesStore, Selection};

fn build_store() -> SalesStore {
    let items = vec![
        ((2024, 1, 5), "Widget", "East", 100.0, 20.0),
        ((2024, 1, 20), "Widget", "East", 50.0, 5.0),
        ((2024, 2, 1), "Gadget", "West", 200.0, 60.0),
        ((2024, 2, 14), "Widget", "West", 80.0, 16.0),
        ((2024, 3, 9), "Doohickey", "East", 120.0, 30.0),
    ];

    SalesStore::from_records(
        items
            .into_iter()
            .map(|((y, m, d), product, region, sales, profit)| {
                SalesRecord::new(
                    NaiveDate::from_ymd_opt(y, m, d).unwrap(),
                    product.to_string(),
                    region.to_string(),
                    sales,
                    profit,
                )
            })
            .collect(),
    )
}

fn summarize(frame: &DashboardFrame) {
    let total: f64 = frame.total_sales.rows.iter().map(|r| r.total_sales).sum();
    println!(
        "   periods={} products={} regions={} total_sales={:.2}",
        frame.total_sales.len(),
        frame.top_products.len(),
        frame.sales_by_region.len(),
        total
    );
    for (label, value) in frame.top_products.points() {
        println!("     top product: {:<12} {:>8.2}", label, value);
    }
}

fn main() {
    println!("=== Salesboard Selections Example ===\n");

    let store = build_store();
    println!("1. Base table: {} records", store.len());

    println!("\n2. Full selection (startup default):");
    let frame = DashboardFrame::compute(&store, &Selection::all(&store));
    summarize(&frame);

    println!("\n3. January only:");
    let frame = DashboardFrame::compute(&store, &Selection::from_labels(["2024-01"]));
    summarize(&frame);

    println!("\n4. February and March:");
    let frame = DashboardFrame::compute(&store, &Selection::from_labels(["2024-02", "2024-03"]));
    summarize(&frame);

    println!("\n5. Empty selection (nothing chosen):");
    let frame = DashboardFrame::compute(&store, &Selection::default());
    summarize(&frame);

    println!("\n6. Unknown and malformed labels are ignored:");
    let frame = DashboardFrame::compute(
        &store,
        &Selection::from_labels(["2024-01", "2031-07", "not-a-period"]),
    );
    summarize(&frame);

    println!("\n=== Example Complete ===");
}
