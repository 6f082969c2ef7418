//! Source loading: format detection, worksheet choice, fingerprinting.

use std::path::Path;

use spend_model::{RawTable, WorksheetChoice};
use tracing::{info, info_span, warn};

use crate::csv::read_csv_table;
use crate::error::{IngestError, Result};
use crate::fingerprint::SourceFingerprint;
use crate::workbook::{ExcelWorkbook, select_sheet};

/// Spreadsheet container formats accepted as input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Xlsx,
    Xlsm,
    Xls,
    Ods,
}

impl SourceFormat {
    /// Detects the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "xlsx" => Some(Self::Xlsx),
            "xlsm" => Some(Self::Xlsm),
            "xls" => Some(Self::Xls),
            "ods" => Some(Self::Ods),
            _ => None,
        }
    }

    /// Conventional MIME type, used when the caller supplies none.
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Xlsm => "application/vnd.ms-excel.sheet.macroEnabled.12",
            Self::Xls => "application/vnd.ms-excel",
            Self::Ods => "application/vnd.oasis.opendocument.spreadsheet",
        }
    }

    pub fn is_workbook(self) -> bool {
        !matches!(self, Self::Csv)
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Worksheet to read instead of running automatic selection.
    pub sheet: Option<String>,
}

/// A raw table together with the facts about where it came from.
#[derive(Debug, Clone)]
pub struct LoadedSource {
    pub table: RawTable,
    pub format: SourceFormat,
    /// File name of the loaded asset.
    pub file_name: String,
    pub worksheet: WorksheetChoice,
    pub fingerprint: SourceFingerprint,
}

/// Loads a CSV or workbook file into a [`RawTable`].
pub fn load_source(path: &Path, options: &LoadOptions) -> Result<LoadedSource> {
    let span = info_span!("load_source", path = %path.display());
    let _guard = span.enter();

    let format = SourceFormat::from_path(path).ok_or_else(|| IngestError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let fingerprint = SourceFingerprint::of_file(path)?;

    let (table, worksheet) = if format.is_workbook() {
        let mut workbook = ExcelWorkbook::open(path)?;
        let worksheet = match &options.sheet {
            Some(sheet) => WorksheetChoice::Manual {
                sheet: sheet.clone(),
            },
            None => {
                let selection =
                    select_sheet(&mut workbook).ok_or_else(|| IngestError::NoSheets {
                        path: path.to_path_buf(),
                    })?;
                if selection.fallback {
                    warn!(
                        sheet = %selection.sheet,
                        "no worksheet has signal columns; using the first sheet"
                    );
                }
                WorksheetChoice::Auto {
                    sheet: selection.sheet,
                    fallback: selection.fallback,
                }
            }
        };
        let table = workbook.read_table(worksheet.sheet_label())?;
        (table, worksheet)
    } else {
        if let Some(sheet) = &options.sheet {
            warn!(%sheet, "CSV sources have no worksheets; ignoring requested sheet");
        }
        (read_csv_table(path)?, WorksheetChoice::Csv)
    };

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    info!(
        format = ?format,
        worksheet = worksheet.sheet_label(),
        rows = table.row_count(),
        columns = table.column_count(),
        bytes = fingerprint.bytes,
        "loaded source"
    );

    Ok(LoadedSource {
        table,
        format,
        file_name,
        worksheet,
        fingerprint,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_format_by_extension() {
        assert_eq!(
            SourceFormat::from_path(Path::new("HMT_Spend.XLSX")),
            Some(SourceFormat::Xlsx)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("spend.csv")),
            Some(SourceFormat::Csv)
        );
        assert_eq!(SourceFormat::from_path(Path::new("spend.pdf")), None);
        assert_eq!(SourceFormat::from_path(Path::new("spend")), None);
    }

    #[test]
    fn unsupported_extension_is_rejected_before_reading() {
        let err = load_source(Path::new("/nowhere/spend.txt"), &LoadOptions::default())
            .unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedFormat { .. }));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = load_source(Path::new("/nowhere/spend.csv"), &LoadOptions::default())
            .unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
