//! Payment date coercion.
//!
//! Source files are UK publications, so ambiguous numeric dates are read day
//! first. A value that is impossible day first (`12/31/2025`) is retried
//! month first before giving up.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use spend_model::CellValue;

/// A trailing time of day, which is discarded.
static TIME_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.*?)[ T]\d{1,2}:\d{2}(?::\d{2}(?:\.\d+)?)?\s*(?:am|pm|z|[+-]\d{2}:?\d{2})?$")
        .expect("Invalid time suffix regex")
});

/// Year-first layouts are unambiguous and tried before anything else.
const YEAR_FIRST: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];

const DAY_FIRST: &[&str] = &[
    "%d/%m/%Y", "%d/%m/%y", "%d-%m-%Y", "%d-%m-%y", "%d.%m.%Y", "%d.%m.%y", "%d %b %Y",
    "%d %B %Y", "%d %b %y", "%d-%b-%Y", "%d-%b-%y", "%d-%B-%Y",
];

const MONTH_FIRST: &[&str] = &["%m/%d/%Y", "%m/%d/%y", "%m-%d-%Y", "%b %d %Y", "%b %d, %Y"];

/// Parses date text, ignoring any time of day.
///
/// ```
/// use chrono::NaiveDate;
/// use spend_transform::coerce::parse_date;
///
/// assert_eq!(parse_date("01/02/2025"), NaiveDate::from_ymd_opt(2025, 2, 1));
/// assert_eq!(parse_date("31/13/2025"), None);
/// ```
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let date_part = TIME_SUFFIX
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .map_or(trimmed, |m| m.as_str().trim());

    YEAR_FIRST
        .iter()
        .chain(DAY_FIRST)
        .chain(MONTH_FIRST)
        .find_map(|format| {
            NaiveDate::parse_from_str(date_part, format)
                .ok()
                // `%Y` also accepts short years; leave those to `%y`.
                .filter(|date| date.year() >= 1000)
        })
}

/// Coerces a source cell into a date.
///
/// Numeric cells are not treated as dates: workbook dates arrive as
/// timestamps already, and a bare number is more likely a misplaced amount.
pub fn coerce_date(cell: &CellValue) -> Option<NaiveDate> {
    match cell {
        CellValue::DateTime(dt) => Some(dt.date()),
        CellValue::Text(text) => parse_date(text),
        _ => None,
    }
}

/// Output form of a date (`YYYY-MM-DD`).
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
