//! CSV sources, read through Polars.

use std::path::Path;

use polars::prelude::{CsvEncoding, CsvReadOptions, DataFrame, SerReader};
use spend_model::{CellValue, RawColumn, RawTable};
use tracing::debug;

use crate::cells::{any_to_cell, header_label};
use crate::error::{IngestError, Result};

/// Reads a CSV file into a [`RawTable`].
///
/// Every column is read as text so identifier columns keep leading zeros;
/// amounts are coerced later. Invalid UTF-8 (common in legacy exports) is
/// replaced rather than rejected.
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|options| options.with_encoding(CsvEncoding::LossyUtf8))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read csv"
    );

    dataframe_to_raw(&df).map_err(|source| IngestError::Shape {
        path: path.to_path_buf(),
        source,
    })
}

/// Converts a DataFrame into a column-major [`RawTable`].
pub fn dataframe_to_raw(df: &DataFrame) -> spend_model::Result<RawTable> {
    let columns = df
        .get_columns()
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let label = header_label(&CellValue::Text(column.name().to_string()), index);
            let cells = (0..column.len())
                .map(|row| column.get(row).map_or(CellValue::Empty, any_to_cell))
                .collect();
            RawColumn::new(label, cells)
        })
        .collect();
    RawTable::new(columns)
}
