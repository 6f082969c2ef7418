#![deny(unsafe_code)]

use chrono::NaiveDateTime;

use crate::error::{Result, SpendError};

/// A single source cell, as typed by the reader that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// True for empty cells and whitespace-only text.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }

    /// Text form of the cell, or `None` when empty.
    ///
    /// Numbers render without a spurious fractional part (`123.0` becomes
    /// `"123"`); timestamps render as `YYYY-MM-DD HH:MM:SS`.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Number(value) => Some(format_number(*value)),
            Self::Text(text) => Some(text.clone()),
            Self::Bool(b) => Some(if *b { "True" } else { "False" }.to_string()),
            Self::DateTime(dt) => Some(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
        }
    }
}

/// Renders a number as text, dropping the fraction of integral values.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// One source column: its header label and its cells, top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct RawColumn {
    pub label: String,
    pub cells: Vec<CellValue>,
}

impl RawColumn {
    pub fn new(label: impl Into<String>, cells: Vec<CellValue>) -> Self {
        Self {
            label: label.into(),
            cells,
        }
    }
}

/// A source table in column-major form.
///
/// Labels are kept in source order and may repeat; columns are addressed by
/// position.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    columns: Vec<RawColumn>,
    row_count: usize,
}

impl RawTable {
    /// Builds a table, rejecting zero-column and ragged input.
    pub fn new(columns: Vec<RawColumn>) -> Result<Self> {
        let Some(first) = columns.first() else {
            return Err(SpendError::NoColumns);
        };
        let row_count = first.cells.len();
        if let Some(ragged) = columns.iter().find(|c| c.cells.len() != row_count) {
            return Err(SpendError::RaggedColumn {
                label: ragged.label.clone(),
                expected: row_count,
                actual: ragged.cells.len(),
            });
        }
        Ok(Self { columns, row_count })
    }

    /// Builds a table from a header row and row-major records.
    ///
    /// Short records are padded with empty cells; extra trailing cells are
    /// ignored.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Result<Self> {
        let mut columns: Vec<RawColumn> = headers
            .into_iter()
            .map(|label| RawColumn::new(label, Vec::with_capacity(rows.len())))
            .collect();
        for row in rows {
            let mut cells = row.into_iter();
            for column in &mut columns {
                column.cells.push(cells.next().unwrap_or(CellValue::Empty));
            }
        }
        Self::new(columns)
    }

    pub fn columns(&self) -> &[RawColumn] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&RawColumn> {
        self.columns.get(index)
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.label.clone()).collect()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
