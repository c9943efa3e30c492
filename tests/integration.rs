use std::io::Write;
use std::path::Path;

use columnar_footprint::footprint::{analyze, size_reduction_pct, to_mb};
use columnar_footprint::loader::{
    LoadError, LoadSchema, TargetType, columnar_table::ColumnarTable,
};
use tempfile::NamedTempFile;

const FIXTURE: &str = "\
floor_area_sqm,resale_price,flat_model,flat_type,storey_range,block,town,extra_col
44.0,230000,IMPROVED,3 ROOM,10 TO 12,309A,ANG MO KIO,alpha
67.5,315000,IMPROVED,4 ROOM,10 TO 12,309A,ANG MO KIO,beta
82.0,410000,NEW GENERATION,4 ROOM,04 TO 06,216B,BEDOK,gamma
";

fn write_fixture() -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(tmp, "{}", FIXTURE).unwrap();
    tmp
}

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

fn load(tmp: &NamedTempFile, schema: Option<&LoadSchema>) -> ColumnarTable {
    let mut table = ColumnarTable::new();
    table.load_csv(tmp.path(), schema).unwrap();
    table
}

#[test]
fn each_configuration_shrinks_the_footprint() {
    let tmp = write_fixture();

    let wide = load(&tmp, None).deep_size_bytes();
    let numeric = load(&tmp, Some(&numeric_schema())).deep_size_bytes();
    let categorical = load(&tmp, Some(&full_schema())).deep_size_bytes();
    let pruned = load(&tmp, Some(&full_schema().prune())).deep_size_bytes();

    assert!(numeric < wide);
    assert!(categorical < numeric);
    assert!(pruned < categorical);
}

#[test]
fn analyze_returns_non_negative_mb_and_pruned_is_smallest() {
    let tmp = write_fixture();

    let wide = load(&tmp, None);
    let pruned = load(&tmp, Some(&full_schema().prune()));

    let mb_wide = analyze(&wide, "No optimizations");
    let mb_pruned = analyze(&pruned, "Without unused columns");

    assert!(mb_wide >= 0.0);
    assert!(mb_pruned >= 0.0);
    assert!(mb_pruned <= mb_wide);
}

#[test]
fn categorical_dictionaries_are_bounded_by_distinct_values() {
    let tmp = write_fixture();
    let table = load(&tmp, Some(&full_schema()));

    for name in ["flat_model", "flat_type", "storey_range", "block", "town"] {
        let column = table.get_col(name).unwrap().as_categorical();
        assert_eq!(column.len(), 3);
        assert_eq!(column.unique_count(), 2, "column {name}");
    }

    let town = table.get_col("town").unwrap().as_categorical();
    assert_eq!(town.get(0), Some("ANG MO KIO"));
    assert_eq!(town.get(2), Some("BEDOK"));
}

#[test]
fn pruned_table_contains_only_schema_fields() {
    let tmp = write_fixture();
    let table = load(&tmp, Some(&full_schema().prune()));

    // file order, extra_col gone
    assert_eq!(
        table.headers(),
        &[
            "floor_area_sqm",
            "resale_price",
            "flat_model",
            "flat_type",
            "storey_range",
            "block",
            "town",
        ]
    );
    assert!(table.get_col("extra_col").is_err());
}

#[test]
fn reduction_of_identical_sizes_formats_as_zero() {
    let tmp = write_fixture();
    let mb = analyze(&load(&tmp, None), "baseline");

    let reduction = size_reduction_pct(mb, mb);
    assert_eq!(format!("{reduction:.2}"), "0.00");
}

#[test]
fn to_mb_uses_binary_megabytes() {
    assert_eq!(to_mb(2 * 1024 * 1024), 2.0);
}

#[test]
fn absent_schema_column_is_schema_error_only_when_pruning() {
    let tmp = write_fixture();
    let schema = full_schema().with_field("lease_commence_date", TargetType::UInt32);

    let mut table = ColumnarTable::new();
    let err = table.load_csv(tmp.path(), Some(&schema)).unwrap_err();
    assert!(matches!(err, LoadError::Parse(_)));

    let mut table = ColumnarTable::new();
    let err = table
        .load_csv(tmp.path(), Some(&schema.clone().prune()))
        .unwrap_err();
    assert!(matches!(err, LoadError::Schema(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let mut table = ColumnarTable::new();
    let err = table
        .load_csv(Path::new("data/does-not-exist.csv"), None)
        .unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}
