//! Completeness scoring and null accounting.

use spend_model::{CORE_FIELDS, CanonicalField, Coverage, NormalizedTable, NullCounts};

/// Completeness at or above this is `complete`.
const COMPLETE_THRESHOLD: f64 = 0.9;
/// Completeness at or above this is `partial`; below it, `limited`.
const PARTIAL_THRESHOLD: f64 = 0.6;

/// Fraction of populated core-field cells, unrounded, with its band.
///
/// A table whose core fields hold no value at all (including a table with
/// no rows) scores `0.0` and is `unknown`.
pub fn completeness(table: &NormalizedTable) -> (f64, Coverage) {
    let populated: usize = CORE_FIELDS
        .iter()
        .map(|field| table.non_null_count(*field))
        .sum();
    if populated == 0 {
        return (0.0, Coverage::Unknown);
    }
    let score = populated as f64 / (CORE_FIELDS.len() * table.len()) as f64;
    let coverage = if score >= COMPLETE_THRESHOLD {
        Coverage::Complete
    } else if score >= PARTIAL_THRESHOLD {
        Coverage::Partial
    } else {
        Coverage::Limited
    };
    (score, coverage)
}

/// Rounds a score to two decimals for reporting.
///
/// Rounding works on the exact binary value with ties to even, so `0.625`
/// becomes `0.62` and `0.175` (stored just below) becomes `0.17`.
pub fn round_score(score: f64) -> f64 {
    format!("{score:.2}").parse().unwrap_or(score)
}

/// Null count for every canonical field, in schema order.
pub fn null_counts(table: &NormalizedTable) -> NullCounts {
    NullCounts(
        CanonicalField::ALL
            .iter()
            .map(|field| (*field, table.len() - table.non_null_count(*field)))
            .collect(),
    )
}
