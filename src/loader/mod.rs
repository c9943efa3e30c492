use thiserror::Error;

pub mod column;
pub mod columnar_table;

/// Error type used across the crate
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("UTF8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("unknown column: {0}")]
    Schema(String),
}

/// Storage representation requested for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetType {
    /// Narrow half-precision float
    Float16,
    /// Narrow unsigned integer
    UInt32,
    /// Dictionary-encoded low-cardinality text
    Categorical,
}

/// Column name to storage representation mapping applied while loading
///
/// Columns are always materialized in file order regardless of the order
/// fields were added. Field names must be a subset of the file's header.
/// With [`LoadSchema::prune`] only the schema's fields are read from the
/// file at all; every other column is skipped during row parsing.
#[derive(Debug, Clone, Default)]
pub struct LoadSchema {
    fields: Vec<(String, TargetType)>,
    prune: bool,
}

impl LoadSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `name` to `target` storage
    pub fn with_field(mut self, name: &str, target: TargetType) -> Self {
        self.fields.push((name.to_string(), target));
        self
    }

    /// Restricts the load to exactly the schema's fields
    pub fn prune(mut self) -> Self {
        self.prune = true;
        self
    }

    pub fn is_pruning(&self) -> bool {
        self.prune
    }

    pub fn target_for(&self, name: &str) -> Option<TargetType> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, target)| *target)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(field, _)| field.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
