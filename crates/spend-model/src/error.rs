use thiserror::Error;

/// Fatal input-shape failures.
///
/// Structural absence (unresolved columns, unparseable cells) is never an
/// error; it degrades to null values and a lower completeness score.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpendError {
    /// The source table has no columns at all.
    #[error("source table has no columns")]
    NoColumns,

    /// A column holds a different number of cells than the first column.
    #[error("column '{label}' has {actual} cells, expected {expected}")]
    RaggedColumn {
        label: String,
        expected: usize,
        actual: usize,
    },

    /// A reporting period string could not be parsed.
    #[error("invalid reporting period '{value}' (expected YYYY-MM)")]
    InvalidPeriod { value: String },

    /// A canonical field name is not part of the schema.
    #[error("unknown canonical field '{0}'")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, SpendError>;
