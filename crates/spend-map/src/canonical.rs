//! Header canonicalization.

/// Reduces a header label to its comparison key.
///
/// Lowercases and drops ASCII punctuation and all whitespace, so
/// `"Amount (GBP)"`, `"amount_gbp"` and `" AMOUNT GBP "` all become
/// `"amountgbp"`. Non-ASCII symbols such as `£` are kept.
pub fn canonicalize(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .chars()
        .filter(|ch| !ch.is_ascii_punctuation() && !ch.is_whitespace())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_case_punctuation_and_spaces() {
        assert_eq!(canonicalize("Amount (GBP)"), "amountgbp");
        assert_eq!(canonicalize("  Payment-Date "), "paymentdate");
        assert_eq!(canonicalize("Transaction No."), "transactionno");
        assert_eq!(canonicalize("Expense\nType"), "expensetype");
    }

    #[test]
    fn keeps_currency_symbol() {
        assert_eq!(canonicalize("Amount £"), "amount£");
        assert_eq!(canonicalize("£"), "£");
    }
}
