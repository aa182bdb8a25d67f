/// Basic Dashboard Example
///
/// This example demonstrates:
/// - Building a SalesStore from records
/// - Listing the distinct periods for a selection control
/// - Computing the four dashboard charts for the default (full) selection

use chrono::NaiveDate;
use salesboard::{ChartPoint, DashboardFrame, SalesRecord, SalesStore, Selection};

fn print_chart<R: ChartPoint>(chart: &salesboard::Chart<R>) {
    println!("\n   {}", chart.title);
    for (label, value) in chart.points() {
        println!("     {:<12} {:>10.2}", label, value);
    }
}

fn main() {
    println!("=== Salesboard Basic Dashboard Example ===\n");

    // 1. Create the base table
    println!("1. Creating sales table...");
    let items = vec![
        ((2024, 1, 5), "Laptop", "East", 999.99, 150.0),
        ((2024, 1, 12), "Mouse", "West", 29.99, 12.0),
        ((2024, 1, 20), "Laptop", "West", 999.99, 120.0),
        ((2024, 2, 2), "Desk", "North", 299.99, 45.0),
        ((2024, 2, 9), "Chair", "East", 199.99, 60.0),
        ((2024, 2, 21), "Monitor", "East", 399.99, 80.0),
        ((2024, 3, 3), "Mouse", "North", 29.99, 10.0),
        ((2024, 3, 17), "Monitor", "South", 399.99, 95.0),
    ];

    let records = items
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
        .collect();
    let store = SalesStore::from_records(records);
    println!("   {} records loaded", store.len());

    // 2. Periods for the selection control
    println!("\n2. Distinct periods (selection control options):");
    for period in store.distinct_periods() {
        println!("   {}", period);
    }

    // 3. Compute the dashboard with everything selected (the default)
    println!("\n3. Computing dashboard for the full selection...");
    let frame = DashboardFrame::compute(&store, &Selection::all(&store));

    print_chart(&frame.total_sales);
    print_chart(&frame.profit_margin);
    print_chart(&frame.top_products);
    print_chart(&frame.sales_by_region);

    println!("\n=== Example Complete ===");
}
