//! Workbook sources and worksheet selection.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use spend_map::canonicalize;
use spend_model::{CellValue, RawTable};
use tracing::{debug, info, warn};

use crate::cells::{excel_cell, header_label};
use crate::error::{IngestError, Result};

/// Terms whose presence in a canonical header marks a data sheet.
pub const SIGNAL_TERMS: [&str; 3] = ["supplier", "amount", "date"];

/// A source of named worksheets whose header rows can be inspected.
pub trait SheetSource {
    /// Sheet names in workbook order.
    fn sheet_names(&self) -> Vec<String>;

    /// Header labels of `sheet`, without materializing its data rows.
    fn header_row(&mut self, sheet: &str) -> Result<Vec<String>>;
}

/// The worksheet chosen by [`select_sheet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSelection {
    pub sheet: String,
    pub score: usize,
    /// True when no sheet carried any signal column.
    pub fallback: bool,
}

/// Number of signal terms present in a header row.
///
/// Each term counts once, however many headers contain it.
pub fn score_headers<S: AsRef<str>>(headers: &[S]) -> usize {
    let canonical: Vec<String> = headers.iter().map(|h| canonicalize(h.as_ref())).collect();
    SIGNAL_TERMS
        .iter()
        .filter(|term| canonical.iter().any(|header| header.contains(*term)))
        .count()
}

/// Picks the worksheet most likely to hold the payment table.
///
/// The highest-scoring sheet wins; ties go to the earliest sheet. Sheets that
/// cannot be read are skipped. When nothing scores, the first sheet is
/// returned as a fallback. Returns `None` only for a workbook without sheets.
pub fn select_sheet<W: SheetSource + ?Sized>(source: &mut W) -> Option<SheetSelection> {
    let names = source.sheet_names();
    let first = names.first()?.clone();
    let mut best: Option<(String, usize)> = None;

    for name in names {
        let score = match source.header_row(&name) {
            Ok(headers) => score_headers(&headers),
            Err(error) => {
                warn!(sheet = %name, %error, "skipping unreadable worksheet");
                continue;
            }
        };
        debug!(sheet = %name, score, "scored worksheet");
        if best.as_ref().is_none_or(|(_, top)| score > *top) {
            best = Some((name, score));
        }
    }

    match best {
        Some((sheet, score)) if score > 0 => Some(SheetSelection {
            sheet,
            score,
            fallback: false,
        }),
        _ => Some(SheetSelection {
            sheet: first,
            score: 0,
            fallback: true,
        }),
    }
}

/// A spreadsheet workbook opened with calamine (`.xlsx`, `.xlsm`, `.xls`,
/// `.ods`).
pub struct ExcelWorkbook {
    path: PathBuf,
    sheets: Sheets<BufReader<File>>,
}

impl ExcelWorkbook {
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(IngestError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let sheets = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            sheets,
        })
    }

    /// Reads `sheet` into a [`RawTable`]; the first row is the header.
    pub fn read_table(&mut self, sheet: &str) -> Result<RawTable> {
        let range = self.range(sheet)?;
        let mut rows = range.rows();
        let Some(header) = rows.next() else {
            return Err(IngestError::NoHeaderRow {
                path: self.path.clone(),
            });
        };
        let headers = labels(header);
        let records: Vec<Vec<CellValue>> = rows
            .map(|row| row.iter().map(excel_cell).collect())
            .collect();
        info!(
            sheet,
            rows = records.len(),
            columns = headers.len(),
            "read worksheet"
        );
        RawTable::from_rows(headers, records).map_err(|source| IngestError::Shape {
            path: self.path.clone(),
            source,
        })
    }

    fn range(&mut self, sheet: &str) -> Result<Range<Data>> {
        if !self.sheets.sheet_names().iter().any(|name| name == sheet) {
            return Err(IngestError::SheetNotFound {
                path: self.path.clone(),
                sheet: sheet.to_string(),
            });
        }
        self.sheets
            .worksheet_range(sheet)
            .map_err(|e| IngestError::Workbook {
                path: self.path.clone(),
                message: format!("worksheet '{sheet}': {e}"),
            })
    }
}

impl SheetSource for ExcelWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    fn header_row(&mut self, sheet: &str) -> Result<Vec<String>> {
        let range = self.range(sheet)?;
        range
            .rows()
            .next()
            .map(labels)
            .ok_or_else(|| IngestError::NoHeaderRow {
                path: self.path.clone(),
            })
    }
}

fn labels(row: &[Data]) -> Vec<String> {
    row.iter()
        .enumerate()
        .map(|(index, cell)| header_label(&excel_cell(cell), index))
        .collect()
}
