//! Identifier and free-text coercion.

use spend_model::CellValue;

/// Trimmed text form of a cell; empty results are null.
pub fn coerce_text(cell: &CellValue) -> Option<String> {
    let text = cell.to_text()?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Coerces a transaction reference.
///
/// Numeric references render without a fractional part, so `123.0` and
/// `"123"` agree. A literal `nan` left behind by an upstream export is null.
pub fn coerce_identifier(cell: &CellValue) -> Option<String> {
    coerce_text(cell).filter(|text| text != "nan")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers() {
        assert_eq!(
            coerce_identifier(&CellValue::Number(123.0)).as_deref(),
            Some("123")
        );
        assert_eq!(
            coerce_identifier(&CellValue::Text(" 00123 ".to_string())).as_deref(),
            Some("00123")
        );
        assert_eq!(coerce_identifier(&CellValue::Text("nan".to_string())), None);
        assert_eq!(coerce_identifier(&CellValue::Text("  ".to_string())), None);
    }

    #[test]
    fn text_is_trimmed() {
        assert_eq!(
            coerce_text(&CellValue::Text("  Acme Ltd ".to_string())).as_deref(),
            Some("Acme Ltd")
        );
        assert_eq!(coerce_text(&CellValue::Empty), None);
    }
}
