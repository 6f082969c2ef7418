//! Row normalization: raw source table to the fixed output schema.

use std::time::Instant;

use spend_map::{AliasRegistry, ColumnResolver, UnresolvedField};
use spend_model::{
    CanonicalField, CellValue, ColumnMapping, NormalizedTable, RawTable, SpendRecord,
};
use tracing::{debug, info, info_span};

use crate::coerce::{coerce_amount, coerce_date, coerce_identifier, coerce_text, format_date};

/// Non-empty cells that could not be coerced, per typed field.
///
/// Counted over every source row, including rows later dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoercionStats {
    pub amount_failures: usize,
    pub date_failures: usize,
}

impl CoercionStats {
    pub fn total(&self) -> usize {
        self.amount_failures + self.date_failures
    }
}

/// Everything a normalization pass produces.
#[derive(Debug, Clone)]
pub struct NormalizedOutput {
    pub table: NormalizedTable,
    pub mapping: ColumnMapping,
    pub unresolved: Vec<UnresolvedField>,
    pub stats: CoercionStats,
    /// Source rows before dropping.
    pub source_rows: usize,
}

impl NormalizedOutput {
    pub fn dropped_rows(&self) -> usize {
        self.source_rows - self.table.len()
    }
}

/// Projects raw tables onto the canonical schema using an alias registry.
#[derive(Debug, Clone, Copy)]
pub struct RowNormalizer<'a> {
    registry: &'a AliasRegistry,
}

impl<'a> RowNormalizer<'a> {
    pub fn new(registry: &'a AliasRegistry) -> Self {
        Self { registry }
    }

    /// Normalizes `table`.
    ///
    /// Columns are resolved once. Each output row carries every canonical
    /// field (null where unresolved or empty); text is trimmed; dates and
    /// amounts are coerced. Rows with neither supplier nor amount are
    /// dropped after trimming and coercion.
    pub fn normalize(&self, table: &RawTable) -> NormalizedOutput {
        let span = info_span!("normalize", rows = table.row_count());
        let _guard = span.enter();
        let start = Instant::now();

        let headers = table.headers();
        let resolution = ColumnResolver::new(self.registry).resolve(&headers);
        let mapping = resolution.mapping;

        let bound: Vec<(CanonicalField, &[CellValue])> = mapping
            .iter()
            .filter_map(|(field, column)| {
                table
                    .column(column.index)
                    .map(|raw| (field, raw.cells.as_slice()))
            })
            .collect();

        let mut stats = CoercionStats::default();
        let mut rows = Vec::with_capacity(table.row_count());
        for index in 0..table.row_count() {
            let mut record = SpendRecord::default();
            for (field, cells) in &bound {
                let Some(cell) = cells.get(index) else {
                    continue;
                };
                coerce_into(&mut record, *field, cell, &mut stats);
            }
            if record.is_noise() {
                continue;
            }
            rows.push(record);
        }

        let output = NormalizedOutput {
            table: NormalizedTable::new(rows),
            mapping,
            unresolved: resolution.unresolved,
            stats,
            source_rows: table.row_count(),
        };

        if output.stats.total() > 0 {
            debug!(
                amount_failures = output.stats.amount_failures,
                date_failures = output.stats.date_failures,
                "cells could not be coerced"
            );
        }
        info!(
            kept = output.table.len(),
            dropped = output.dropped_rows(),
            mapped_fields = output.mapping.len(),
            duration_ms = start.elapsed().as_millis(),
            "normalization complete"
        );
        output
    }
}

/// Normalizes `table` and returns the table and the column mapping used.
pub fn normalize(table: &RawTable, registry: &AliasRegistry) -> (NormalizedTable, ColumnMapping) {
    let output = RowNormalizer::new(registry).normalize(table);
    (output.table, output.mapping)
}

fn coerce_into(
    record: &mut SpendRecord,
    field: CanonicalField,
    cell: &CellValue,
    stats: &mut CoercionStats,
) {
    match field {
        CanonicalField::AmountGbp => {
            record.amount_gbp = coerce_amount(cell);
            if record.amount_gbp.is_none() && !cell.is_blank() {
                stats.amount_failures += 1;
            }
        }
        CanonicalField::Date => {
            let date = coerce_date(cell);
            if date.is_none() && !cell.is_blank() {
                stats.date_failures += 1;
            }
            record.date = date.map(format_date);
        }
        CanonicalField::TransactionNumber => {
            record.transaction_number = coerce_identifier(cell);
        }
        other => record.set_text(other, coerce_text(cell)),
    }
}
