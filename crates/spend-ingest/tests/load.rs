//! End-to-end source loading from files on disk.

use std::fs;
use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};
use spend_ingest::{IngestError, LoadOptions, SourceFormat, load_source, sha256_hex};
use spend_model::{CellValue, WorksheetChoice};
use tempfile::TempDir;

fn write_workbook(path: &Path, sheets: &[(&str, Vec<Vec<&str>>)]) {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let sheet = workbook.add_worksheet();
        sheet.set_name(*name).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                sheet.write_string(r as u32, c as u16, *value).unwrap();
            }
        }
    }
    workbook.save(path).unwrap();
}

#[test]
fn csv_columns_are_read_as_text() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("spend.csv");
    let body = "Supplier,Amount,Transaction number\nAcme Ltd,\"£2,000\",00123\n,N/A,\n";
    fs::write(&path, body).unwrap();

    let loaded = load_source(&path, &LoadOptions::default()).unwrap();
    assert_eq!(loaded.format, SourceFormat::Csv);
    assert_eq!(loaded.worksheet, WorksheetChoice::Csv);
    assert_eq!(loaded.file_name, "spend.csv");
    assert_eq!(loaded.fingerprint.bytes, body.len() as u64);
    assert_eq!(loaded.fingerprint.sha256, sha256_hex(body.as_bytes()));

    let table = loaded.table;
    assert_eq!(table.headers(), ["Supplier", "Amount", "Transaction number"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(
        table.column(2).unwrap().cells[0],
        CellValue::Text("00123".to_string())
    );
    assert_eq!(
        table.column(1).unwrap().cells[0],
        CellValue::Text("£2,000".to_string())
    );
    assert_eq!(table.column(0).unwrap().cells[1], CellValue::Empty);
    assert_eq!(table.column(1).unwrap().cells[1], CellValue::Empty);
}

#[test]
fn sheet_request_is_ignored_for_csv() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("spend.csv");
    fs::write(&path, "Supplier,Amount\nAcme Ltd,100\n").unwrap();

    let options = LoadOptions {
        sheet: Some("Data".to_string()),
    };
    let loaded = load_source(&path, &options).unwrap();
    assert_eq!(loaded.worksheet, WorksheetChoice::Csv);
    assert_eq!(loaded.table.row_count(), 1);
}

#[test]
fn header_only_csv_yields_zero_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.csv");
    fs::write(&path, "Supplier,Amount\n").unwrap();

    let loaded = load_source(&path, &LoadOptions::default()).unwrap();
    assert_eq!(loaded.table.row_count(), 0);
    assert_eq!(loaded.table.column_count(), 2);
}

#[test]
fn workbook_selects_sheet_with_most_signals() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hmt.xlsx");
    write_workbook(
        &path,
        &[
            ("Cover", vec![vec!["HM Treasury spend"], vec!["Notes"]]),
            (
                "Data",
                vec![
                    vec!["Payment Date", "Supplier", "Amount"],
                    vec!["05/01/2025", "Acme Ltd", "2000"],
                ],
            ),
        ],
    );

    let loaded = load_source(&path, &LoadOptions::default()).unwrap();
    assert_eq!(loaded.format, SourceFormat::Xlsx);
    assert_eq!(
        loaded.worksheet,
        WorksheetChoice::Auto {
            sheet: "Data".to_string(),
            fallback: false
        }
    );
    assert_eq!(loaded.table.headers(), ["Payment Date", "Supplier", "Amount"]);
    assert_eq!(loaded.table.row_count(), 1);
}

#[test]
fn workbook_tie_goes_to_first_sheet() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tie.xlsx");
    write_workbook(
        &path,
        &[
            ("January", vec![vec!["Supplier", "Amount"], vec!["A", "1"]]),
            ("February", vec![vec!["Supplier", "Amount"], vec!["B", "2"]]),
        ],
    );

    let loaded = load_source(&path, &LoadOptions::default()).unwrap();
    assert_eq!(loaded.worksheet.sheet_label(), "January");
}

#[test]
fn workbook_without_signals_falls_back_to_first_sheet() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plain.xlsx");
    write_workbook(
        &path,
        &[
            ("One", vec![vec!["Name", "Value"], vec!["x", "1"]]),
            ("Two", vec![vec!["Other"], vec!["y"]]),
        ],
    );

    let loaded = load_source(&path, &LoadOptions::default()).unwrap();
    assert_eq!(
        loaded.worksheet,
        WorksheetChoice::Auto {
            sheet: "One".to_string(),
            fallback: true
        }
    );
    assert_eq!(loaded.worksheet.reason(), "no signal columns found; first sheet");
}

#[test]
fn requested_sheet_overrides_selection() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("manual.xlsx");
    write_workbook(
        &path,
        &[
            ("Data", vec![vec!["Supplier", "Amount", "Date"], vec!["A", "1", "x"]]),
            ("Extra", vec![vec!["Vendor"], vec!["B"]]),
        ],
    );

    let options = LoadOptions {
        sheet: Some("Extra".to_string()),
    };
    let loaded = load_source(&path, &options).unwrap();
    assert_eq!(
        loaded.worksheet,
        WorksheetChoice::Manual {
            sheet: "Extra".to_string()
        }
    );
    assert_eq!(loaded.table.headers(), ["Vendor"]);

    let missing = LoadOptions {
        sheet: Some("Nope".to_string()),
    };
    let err = load_source(&path, &missing).unwrap_err();
    assert!(matches!(err, IngestError::SheetNotFound { .. }));
}

#[test]
fn workbook_cells_keep_their_types() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("typed.xlsx");
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("dd/mm/yyyy");
    let sheet = workbook.add_worksheet();
    sheet.set_name("Data").unwrap();
    sheet.write_string(0, 0, "Date").unwrap();
    sheet.write_string(0, 2, "Amount").unwrap();
    sheet
        .write_number_with_format(1, 0, 45662.0, &date_format)
        .unwrap();
    sheet.write_number(1, 2, 2500.5).unwrap();
    workbook.save(&path).unwrap();

    let loaded = load_source(&path, &LoadOptions::default()).unwrap();
    let table = loaded.table;
    assert_eq!(table.headers(), ["Date", "Unnamed: 1", "Amount"]);
    match &table.column(0).unwrap().cells[0] {
        CellValue::DateTime(dt) => {
            assert_eq!(dt.format("%Y-%m-%d").to_string(), "2025-01-05");
        }
        other => panic!("expected a date cell, got {other:?}"),
    }
    assert_eq!(table.column(2).unwrap().cells[0], CellValue::Number(2500.5));
}
