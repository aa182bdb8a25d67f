use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use salesboard::*;

const PRODUCTS: [&str; 8] = [
    "Widget",
    "Gadget",
    "Doohickey",
    "Gizmo",
    "Sprocket",
    "Flange",
    "Grommet",
    "Spindle",
];
const REGIONS: [&str; 4] = ["East", "West", "North", "South"];

/// Deterministic synthetic table spread over twelve months of 2024.
fn build_store(rows: usize) -> SalesStore {
    let records = (0..rows)
        .map(|i| {
            let month = (i % 12) as u32 + 1;
            let day = (i % 28) as u32 + 1;
            SalesRecord::new(
                NaiveDate::from_ymd_opt(2024, month, day).unwrap(),
                PRODUCTS[i % PRODUCTS.len()].to_string(),
                REGIONS[i % REGIONS.len()].to_string(),
                (i % 500) as f64 + 1.0,
                (i % 100) as f64 - 20.0,
            )
        })
        .collect();
    SalesStore::from_records(records)
}

/// The first half of the year, a typical partial selection.
fn half_year_selection() -> Selection {
    Selection::from_labels(["2024-01", "2024-02", "2024-03", "2024-04", "2024-05", "2024-06"])
}

fn bench_store_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_build");

    for size in [100, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| build_store(black_box(size)));
        });
    }
    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_records");

    for size in [100, 1000, 10000].iter() {
        let store = build_store(*size);
        let selection = half_year_selection();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| filter_records(black_box(&store), black_box(&selection)));
        });
    }
    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard_compute");

    for size in [100, 1000, 10000].iter() {
        let store = build_store(*size);
        let selection = Selection::all(&store);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| DashboardFrame::compute(black_box(&store), black_box(&selection)));
        });
    }
    group.finish();
}

fn bench_top_products(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_products");

    for size in [100, 1000, 10000].iter() {
        let store = build_store(*size);
        let selection = Selection::all(&store);
        let filtered = filter_records(&store, &selection);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| top_products(black_box(&filtered)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_store_build,
    bench_filter,
    bench_full_pipeline,
    bench_top_products
);
criterion_main!(benches);
