#![deny(unsafe_code)]

//! Loading of monthly spend publications.
//!
//! CSV files are read through Polars with every column as text; workbooks
//! (`.xlsx`, `.xlsm`, `.xls`, `.ods`) through calamine. For workbooks the
//! worksheet holding the payment table is picked by counting signal columns
//! in each sheet's header row. Every load also fingerprints the file (size
//! and SHA-256) for provenance.

pub mod cells;
pub mod csv;
pub mod error;
pub mod fingerprint;
pub mod load;
pub mod workbook;

pub use cells::{NULL_SENTINELS, excel_serial_to_datetime};
pub use csv::{dataframe_to_raw, read_csv_table};
pub use error::{IngestError, Result};
pub use fingerprint::{SourceFingerprint, sha256_hex};
pub use load::{LoadOptions, LoadedSource, SourceFormat, load_source};
pub use workbook::{
    ExcelWorkbook, SIGNAL_TERMS, SheetSelection, SheetSource, score_headers, select_sheet,
};
