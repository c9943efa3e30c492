use columnar_footprint::loader::{LoadSchema, TargetType, columnar_table::ColumnarTable};
use criterion::{Criterion, criterion_group, criterion_main};
use jemallocator::Jemalloc;
use std::path::Path;

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

fn numeric_schema() -> LoadSchema {
    LoadSchema::new()
        .with_field("floor_area_sqm", TargetType::Float16)
        .with_field("resale_price", TargetType::UInt32)
}

fn full_schema() -> LoadSchema {
    numeric_schema()
        .with_field("flat_model", TargetType::Categorical)
        .with_field("flat_type", TargetType::Categorical)
        .with_field("storey_range", TargetType::Categorical)
        .with_field("block", TargetType::Categorical)
        .with_field("town", TargetType::Categorical)
}

fn load_configurations(c: &mut Criterion) {
    let mut group = c.benchmark_group("ColumnarTable");
    group.sample_size(10);

    // Generate with `cargo run --bin data_generator` first
    let path = Path::new("data/flat-prices.csv");

    group.bench_function("load_wide", |b| {
        b.iter(|| {
            let mut table = ColumnarTable::new();
            table.load_csv(path, None).unwrap();
        })
    });

    group.bench_function("load_numeric", |b| {
        let schema = numeric_schema();
        b.iter(|| {
            let mut table = ColumnarTable::new();
            table.load_csv(path, Some(&schema)).unwrap();
        })
    });

    group.bench_function("load_categorical", |b| {
        let schema = full_schema();
        b.iter(|| {
            let mut table = ColumnarTable::new();
            table.load_csv(path, Some(&schema)).unwrap();
        })
    });

    group.bench_function("load_pruned", |b| {
        let schema = full_schema().prune();
        b.iter(|| {
            let mut table = ColumnarTable::new();
            table.load_csv(path, Some(&schema)).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, load_configurations);
criterion_main!(benches);
