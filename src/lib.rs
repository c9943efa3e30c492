//! # ColumnarFootprint
//!
//! `columnar-footprint` loads a delimited dataset into an in-memory columnar
//! table under increasingly strict column schemas and measures how much
//! memory each configuration costs. It supports:
//!
//! - Memory-mapped CSV loading
//! - Wide type inference (int, float, string) from the first data row
//! - Narrow numeric storage (`f16`, `u32`)
//! - Dictionary-encoded categorical columns
//! - Column pruning at parse time
//! - Deep memory accounting including string backing storage
//!
//! # Example
//!
//! ```no_run
//! use columnar_footprint::footprint::{analyze, size_reduction_pct};
//! use columnar_footprint::loader::{LoadSchema, TargetType, columnar_table::ColumnarTable};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let path = Path::new("data/flat-prices.csv");
//!
//!     // Baseline: every column keeps its wide inferred type
//!     let mut baseline = ColumnarTable::new();
//!     baseline.load_csv(path, None)?;
//!     let mb_baseline = analyze(&baseline, "No optimizations");
//!
//!     // Narrow numeric types for the two numeric columns
//!     let schema = LoadSchema::new()
//!         .with_field("floor_area_sqm", TargetType::Float16)
//!         .with_field("resale_price", TargetType::UInt32);
//!     let mut typed = ColumnarTable::new();
//!     typed.load_csv(path, Some(&schema))?;
//!     let mb_typed = analyze(&typed, "Proper numerical types");
//!
//!     println!(
//!         "Size reduced by: {:.2}%",
//!         size_reduction_pct(mb_baseline, mb_typed)
//!     );
//!     Ok(())
//! }
//! ```

pub mod footprint;
pub mod loader;
