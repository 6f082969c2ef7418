//! Amount coercion.

use std::sync::LazyLock;

use regex::Regex;
use spend_model::CellValue;

/// A fully parenthesized value, the accounting notation for negatives.
static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\((.*)\)$").expect("Invalid parenthesized amount regex"));

/// First signed decimal number in a string.
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d+(?:\.\d+)?").expect("Invalid amount number regex"));

/// Parses an amount written as text.
///
/// Thousands separators and `£` are removed, `(X)` is read as `-X`, and the
/// first number in what remains is taken.
///
/// ```
/// use spend_transform::coerce::parse_amount;
///
/// assert_eq!(parse_amount("(1,234.50)"), Some(-1234.5));
/// assert_eq!(parse_amount("£2,000"), Some(2000.0));
/// assert_eq!(parse_amount("n/a"), None);
/// ```
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '£')
        .collect();
    let cleaned = cleaned.trim();
    let signed = PARENTHESIZED.replace(cleaned, "-$1");
    let found = NUMBER.find(&signed)?;
    found
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Coerces a source cell into an amount.
///
/// Boolean and timestamp cells are never amounts.
pub fn coerce_amount(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Number(value) if value.is_finite() => Some(*value),
        CellValue::Text(text) => parse_amount(text),
        _ => None,
    }
}
