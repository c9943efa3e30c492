//! Deep memory measurement and reporting for loaded tables

use crate::loader::columnar_table::ColumnarTable;

/// Converts a byte count to binary megabytes (1 MB = 1024 * 1024 bytes)
pub fn to_mb(bytes: usize) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

/// Prints the table's deep memory footprint and per-column storage
///
/// Output is the label line with the footprint in MB to 2 decimal places,
/// followed by one line per column with its storage representation. Returns
/// the MB value for downstream comparison. Does not mutate the table.
pub fn analyze(table: &ColumnarTable, label: &str) -> f64 {
    let mb = to_mb(table.deep_size_bytes());
    println!("{label}: {mb:.2} MB");
    for (name, column) in table.columns() {
        println!("{:<20} {}", name, column.column_type());
    }
    mb
}

/// Relative size reduction of `optimized_mb` against `baseline_mb`, in percent
///
/// Undefined when the baseline is 0 MB; the division is left unguarded.
pub fn size_reduction_pct(baseline_mb: f64, optimized_mb: f64) -> f64 {
    (baseline_mb - optimized_mb) / baseline_mb * 100.0
}
