//! Conversion of reader-specific cell values into [`CellValue`].

use calamine::Data;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use polars::prelude::AnyValue;
use spend_model::CellValue;

/// Strings spreadsheet exports write in place of an empty cell.
pub const NULL_SENTINELS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Wraps source text, mapping null sentinels to [`CellValue::Empty`].
pub fn text_cell(raw: &str) -> CellValue {
    if NULL_SENTINELS.contains(&raw) {
        CellValue::Empty
    } else {
        CellValue::Text(raw.to_string())
    }
}

/// Converts a Polars value (CSV path).
pub fn any_to_cell(value: AnyValue<'_>) -> CellValue {
    match value {
        AnyValue::Null => CellValue::Empty,
        AnyValue::Boolean(b) => CellValue::Bool(b),
        AnyValue::Int8(v) => CellValue::Number(f64::from(v)),
        AnyValue::Int16(v) => CellValue::Number(f64::from(v)),
        AnyValue::Int32(v) => CellValue::Number(f64::from(v)),
        AnyValue::Int64(v) => CellValue::Number(v as f64),
        AnyValue::UInt8(v) => CellValue::Number(f64::from(v)),
        AnyValue::UInt16(v) => CellValue::Number(f64::from(v)),
        AnyValue::UInt32(v) => CellValue::Number(f64::from(v)),
        AnyValue::UInt64(v) => CellValue::Number(v as f64),
        AnyValue::Float32(v) => CellValue::Number(f64::from(v)),
        AnyValue::Float64(v) => CellValue::Number(v),
        AnyValue::String(s) => text_cell(s),
        AnyValue::StringOwned(s) => text_cell(&s),
        other => text_cell(&other.to_string()),
    }
}

/// Converts a calamine cell (workbook path).
pub fn excel_cell(value: &Data) -> CellValue {
    match value {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::Int(v) => CellValue::Number(*v as f64),
        Data::Float(v) => CellValue::Number(*v),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::String(s) => text_cell(s),
        Data::DateTime(dt) => excel_serial_to_datetime(dt.as_f64())
            .map_or(CellValue::Number(dt.as_f64()), CellValue::DateTime),
        Data::DateTimeIso(s) | Data::DurationIso(s) => text_cell(s),
    }
}

/// Converts an Excel serial date (1900 date system) into a timestamp.
pub fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let days = serial.trunc() as i64;
    let seconds = ((serial - serial.trunc()) * 86_400.0).round() as i64;
    epoch
        .checked_add_signed(Duration::days(days))?
        .checked_add_signed(Duration::seconds(seconds))
}

/// Header label for a source cell; blanks become `Unnamed: {index}`.
pub fn header_label(cell: &CellValue, index: usize) -> String {
    match cell {
        CellValue::Empty => format!("Unnamed: {index}"),
        CellValue::Text(text) if text.trim().is_empty() => format!("Unnamed: {index}"),
        CellValue::Text(text) => text.trim_start_matches('\u{feff}').to_string(),
        other => other.to_text().unwrap_or_default(),
    }
}
