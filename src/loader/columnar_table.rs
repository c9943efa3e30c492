use half::f16;
use memchr::{memchr, memchr_iter};
use memmap2::Mmap;
use std::{fs::File, path::Path, str};
use tracing::info;

use crate::loader::{
    LoadError, LoadSchema, TargetType,
    column::{Column, ColumnType},
};

/// In-memory columnar table loaded from a delimited file
///
/// Without a schema every column gets a wide representation inferred from
/// the first data row (Int64, Float64, Str). A [`LoadSchema`] narrows the
/// named columns and, in pruning mode, drops everything else at parse time.
///
/// # Examples
///
/// ```no_run
/// # use columnar_footprint::loader::columnar_table::ColumnarTable;
/// let mut table = ColumnarTable::new();
/// table.load_csv("data/flat-prices.csv".as_ref(), None).unwrap();
/// println!("{} rows, {} bytes", table.row_count(), table.deep_size_bytes());
/// ```
#[derive(Debug)]
pub struct ColumnarTable {
    headers: Vec<String>,
    columns: Vec<Column>,
    row_count: usize,
}

impl ColumnarTable {
    /// Create an empty table
    pub fn new() -> Self {
        ColumnarTable {
            headers: Vec::new(),
            columns: Vec::new(),
            row_count: 0,
        }
    }

    /// Loads a CSV file into memory using memory mapping
    ///
    /// Columns named in `schema` are stored with the requested narrow
    /// representation; all other columns keep their wide inferred type, or
    /// are skipped entirely when the schema is pruning.
    ///
    /// # Arguments
    /// * `path` - Path to the CSV file
    /// * `schema` - Optional column name to storage mapping
    ///
    /// # Errors
    /// Returns a [`LoadError`] if:
    /// - The file cannot be opened or mapped (`Io`)
    /// - The CSV is malformed: missing header, no data rows, a row whose
    ///   field count differs from the header, or an unparseable numeric
    ///   field (`Parse`)
    /// - A schema field is absent from the header: `Schema` in pruning
    ///   mode, `Parse` otherwise
    ///
    /// # Example
    /// ```no_run
    /// # use columnar_footprint::loader::columnar_table::ColumnarTable;
    /// let mut table = ColumnarTable::new();
    /// table.load_csv("data/flat-prices.csv".as_ref(), None).unwrap();
    /// ```
    pub fn load_csv(&mut self, path: &Path, schema: Option<&LoadSchema>) -> Result<(), LoadError> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        let buf: &[u8] = &mmap[..];

        // Parse header
        let header_end = memchr(b'\n', buf)
            .ok_or_else(|| LoadError::Parse("missing header line".to_string()))?;
        let header_line = trim_cr(&buf[..header_end]);
        let file_headers: Vec<String> = header_line
            .split(|&b| b == b',')
            .map(|s| String::from_utf8_lossy(s).to_string())
            .collect();

        // Schema fields must be a subset of the header
        if let Some(schema) = schema {
            for name in schema.field_names() {
                if !file_headers.iter().any(|h| h == name) {
                    return Err(if schema.is_pruning() {
                        LoadError::Schema(name.to_string())
                    } else {
                        LoadError::Parse(format!("schema column '{name}' not found in header"))
                    });
                }
            }
        }

        let data = &buf[header_end + 1..];
        if data.is_empty() {
            return Err(LoadError::Parse("no data rows".to_string()));
        }

        // Infer wide types from the first data row
        let first_line_end = memchr(b'\n', data).unwrap_or(data.len());
        let first_line = trim_cr(&data[..first_line_end]);
        let inferred = Self::infer_wide_types(first_line, &file_headers)?;

        // Resolve per-column storage; pruning drops columns outside the schema
        let num_cols = file_headers.len();
        let mut keep = vec![true; num_cols];
        let mut storage = inferred;
        if let Some(schema) = schema {
            for (idx, name) in file_headers.iter().enumerate() {
                match schema.target_for(name) {
                    Some(TargetType::Float16) => storage[idx] = ColumnType::Float16,
                    Some(TargetType::UInt32) => storage[idx] = ColumnType::UInt32,
                    Some(TargetType::Categorical) => storage[idx] = ColumnType::Categorical,
                    None => keep[idx] = !schema.is_pruning(),
                }
            }
        }

        // Retained columns, file order
        let kept: Vec<(usize, ColumnType)> = storage
            .iter()
            .enumerate()
            .filter(|(idx, _)| keep[*idx])
            .map(|(idx, &column_type)| (idx, column_type))
            .collect();

        let headers: Vec<String> = kept
            .iter()
            .map(|&(idx, _)| file_headers[idx].clone())
            .collect();

        let mut columns: Vec<Column> = kept
            .iter()
            .map(|&(_, column_type)| Column::new(column_type))
            .collect();

        // Estimate rows for preallocation
        let estimated_rows = data.len() / (first_line.len() + 1) + 1;
        for column in &mut columns {
            column.reserve(estimated_rows);
        }

        let mut fields: Vec<&[u8]> = Vec::with_capacity(num_cols);
        let mut row_count = 0;
        let mut line_no = 1; // header is line 1
        let mut pos = 0;

        while pos < data.len() {
            let line_end = memchr(b'\n', &data[pos..])
                .map(|i| pos + i)
                .unwrap_or(data.len());
            let line = trim_cr(&data[pos..line_end]);
            pos = line_end + 1;
            line_no += 1;

            if line.is_empty() {
                continue;
            }

            // Split line into fields
            fields.clear();
            let mut field_start = 0;
            for comma_pos in memchr_iter(b',', line) {
                fields.push(&line[field_start..comma_pos]);
                field_start = comma_pos + 1;
            }
            fields.push(&line[field_start..]);

            if fields.len() != num_cols {
                return Err(LoadError::Parse(format!(
                    "row {line_no}: expected {num_cols} fields, got {}",
                    fields.len()
                )));
            }

            for (slot, &(col_idx, column_type)) in kept.iter().enumerate() {
                let field = fields[col_idx];
                let column = &mut columns[slot];
                match column_type {
                    ColumnType::Int64 => {
                        let value = atoi_simd::parse::<i64>(field)
                            .map_err(|e| parse_error(line_no, &file_headers[col_idx], field, e))?;
                        column.push_i64(value);
                    }
                    ColumnType::Float64 => {
                        let value = fast_float::parse::<f64, _>(field)
                            .map_err(|e| parse_error(line_no, &file_headers[col_idx], field, e))?;
                        column.push_f64(value);
                    }
                    ColumnType::Str => {
                        column.push_text(str::from_utf8(field)?);
                    }
                    ColumnType::Float16 => {
                        let value = fast_float::parse::<f64, _>(field)
                            .map_err(|e| parse_error(line_no, &file_headers[col_idx], field, e))?;
                        column.push_f16(f16::from_f64(value));
                    }
                    ColumnType::UInt32 => {
                        let value = atoi_simd::parse::<u32>(field)
                            .map_err(|e| parse_error(line_no, &file_headers[col_idx], field, e))?;
                        column.push_u32(value);
                    }
                    ColumnType::Categorical => {
                        column.push_category(str::from_utf8(field)?);
                    }
                }
            }

            row_count += 1;
        }

        for column in &mut columns {
            column.seal();
        }

        info!(
            "loaded {} rows x {} columns from {}",
            row_count,
            columns.len(),
            path.display()
        );

        self.headers = headers;
        self.columns = columns;
        self.row_count = row_count;
        Ok(())
    }

    fn infer_wide_types(
        first_line: &[u8],
        headers: &[String],
    ) -> Result<Vec<ColumnType>, LoadError> {
        let fields: Vec<&[u8]> = first_line.split(|&b| b == b',').collect();

        if fields.len() != headers.len() {
            return Err(LoadError::Parse(format!(
                "header/data mismatch: {} vs {}",
                headers.len(),
                fields.len()
            )));
        }

        let types = fields
            .iter()
            .map(|field| {
                if atoi_simd::parse::<i64>(field).is_ok() {
                    ColumnType::Int64
                } else if fast_float::parse::<f64, _>(field).is_ok() {
                    ColumnType::Float64
                } else {
                    ColumnType::Str
                }
            })
            .collect();

        Ok(types)
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn column(&self, idx: usize) -> Option<&Column> {
        self.columns.get(idx)
    }

    /// Retained columns with their names, file order
    pub fn columns(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.headers
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter())
    }

    pub fn get_col(&self, col_name: &str) -> Result<&Column, LoadError> {
        let col_pos = self
            .headers
            .iter()
            .position(|name| name == col_name)
            .ok_or_else(|| LoadError::Schema(col_name.to_string()))?;

        Ok(&self.columns[col_pos])
    }

    /// Total heap bytes of all column storage, string backing bytes included
    pub fn deep_size_bytes(&self) -> usize {
        self.columns.iter().map(Column::heap_bytes).sum()
    }
}

impl Default for ColumnarTable {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_error(
    line_no: usize,
    column: &str,
    field: &[u8],
    error: impl std::fmt::Display,
) -> LoadError {
    LoadError::Parse(format!(
        "row {line_no}, column '{column}': invalid value '{}' ({error})",
        String::from_utf8_lossy(field)
    ))
}

fn trim_cr(line: &[u8]) -> &[u8] {
    match line.last() {
        Some(b'\r') => &line[..line.len() - 1],
        _ => line,
    }
}
