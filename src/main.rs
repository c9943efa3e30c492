use std::path::Path;

use columnar_footprint::footprint::{analyze, size_reduction_pct};
use columnar_footprint::loader::{
    LoadError, LoadSchema, TargetType, columnar_table::ColumnarTable,
};
use jemallocator::Jemalloc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

// Data source:
// https://www.kaggle.com/sveneschlbeck/resale-flat-prices-in-singapore
// Regenerate with `cargo run --bin data_generator`
const DATA_PATH: &str = "data/flat-prices.csv";

fn numeric_schema() -> LoadSchema {
    LoadSchema::new()
        .with_field("floor_area_sqm", TargetType::Float16)
        .with_field("resale_price", TargetType::UInt32)
}

fn numeric_and_categorical_schema() -> LoadSchema {
    numeric_schema()
        .with_field("flat_model", TargetType::Categorical)
        .with_field("flat_type", TargetType::Categorical)
        .with_field("storey_range", TargetType::Categorical)
        .with_field("block", TargetType::Categorical)
        .with_field("town", TargetType::Categorical)
}

fn load(schema: Option<&LoadSchema>) -> Result<ColumnarTable, LoadError> {
    let mut table = ColumnarTable::new();
    table.load_csv(Path::new(DATA_PATH), schema)?;
    Ok(table)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // First we load with no optimizations
    let table = load(None)?;
    let mb_baseline = analyze(&table, "No optimizations");

    println!();

    // Then with proper numerical types
    let table = load(Some(&numeric_schema()))?;
    let mb_numeric = analyze(&table, "Proper numerical types");
    println!(
        "Size reduced by: {:.2}%",
        size_reduction_pct(mb_baseline, mb_numeric)
    );

    println!();

    // Then with proper numerical and categorical types
    let table = load(Some(&numeric_and_categorical_schema()))?;
    let mb_categorical = analyze(&table, "Proper numerical and categorical types");
    println!(
        "Size reduced by: {:.2}%",
        size_reduction_pct(mb_baseline, mb_categorical)
    );

    println!();

    // Finally, skip the columns we never use
    let table = load(Some(&numeric_and_categorical_schema().prune()))?;
    let mb_pruned = analyze(
        &table,
        "Proper numerical and categorical types, without unused columns",
    );
    println!(
        "Size reduced by: {:.2}%",
        size_reduction_pct(mb_baseline, mb_pruned)
    );

    Ok(())
}
