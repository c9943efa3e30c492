use std::path::Path;

use columnar_footprint::loader::{LoadSchema, TargetType, columnar_table::ColumnarTable};

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

fn main() {
    let _profiler = dhat::Profiler::new_heap();

    let schema = LoadSchema::new()
        .with_field("floor_area_sqm", TargetType::Float16)
        .with_field("resale_price", TargetType::UInt32)
        .with_field("flat_model", TargetType::Categorical)
        .with_field("flat_type", TargetType::Categorical)
        .with_field("storey_range", TargetType::Categorical)
        .with_field("block", TargetType::Categorical)
        .with_field("town", TargetType::Categorical)
        .prune();

    let mut table = ColumnarTable::new();
    table
        .load_csv(Path::new("data/flat-prices.csv"), Some(&schema))
        .unwrap();

    println!("Rows loaded: {}", table.row_count());
    println!("Memory benchmark finished. See dhat-heap.json for details");
}
