//! Run summary tables.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use spend_cli::pipeline::RunOutcome;
use spend_map::AliasRegistry;
use spend_model::{CanonicalField, Coverage, MatchKind};

pub fn print_summary(outcome: &RunOutcome) {
    let metadata = &outcome.metadata;
    println!("Output: {}", outcome.path.display());

    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Measure"), header_cell("Value")]);
    align_column(&mut table, 1, CellAlignment::Right);

    let counts = &metadata.record_counts;
    let quality = &metadata.data_quality;
    table.add_row(vec![
        Cell::new("Period"),
        Cell::new(&metadata.temporal_coverage.period),
    ]);
    table.add_row(vec![
        Cell::new("Fiscal year"),
        Cell::new(&metadata.temporal_coverage.fiscal_year),
    ]);
    table.add_row(vec![
        Cell::new("Worksheet"),
        Cell::new(&metadata.source_worksheet.worksheet),
    ]);
    table.add_row(vec![
        Cell::new("Transactions"),
        Cell::new(format!(
            "{} of {}",
            counts.transaction_count, counts.source_record_count
        )),
    ]);
    table.add_row(vec![
        Cell::new("Suppliers"),
        Cell::new(counts.unique_suppliers),
    ]);
    table.add_row(vec![
        Cell::new("Total (GBP)"),
        Cell::new(format!(
            "{:.2}",
            metadata.financial_summary.total_amount_gbp
        )),
    ]);
    table.add_row(vec![
        Cell::new("Completeness"),
        coverage_cell(quality.completeness_score, quality.coverage),
    ]);
    table.add_row(vec![
        Cell::new("Parse warnings"),
        count_cell(quality.validation.parse_warnings, Color::Yellow),
    ]);
    println!("{table}");

    print_mapping_table(outcome);
}

fn print_mapping_table(outcome: &RunOutcome) {
    let mapping = &outcome.metadata.column_mapping;
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Column"),
        header_cell("Match"),
    ]);
    align_column(&mut table, 2, CellAlignment::Center);

    for field in CanonicalField::ALL {
        let field_cell = if field.is_core() {
            Cell::new(field.as_str()).add_attribute(Attribute::Bold)
        } else {
            Cell::new(field.as_str())
        };
        match mapping.get(field) {
            Some(column) => table.add_row(vec![
                field_cell,
                Cell::new(&column.label),
                match column.match_kind {
                    MatchKind::Exact => Cell::new("exact").fg(Color::Green),
                    MatchKind::Lenient => Cell::new("lenient").fg(Color::Yellow),
                },
            ]),
            None => {
                let hint = outcome
                    .unresolved
                    .iter()
                    .find(|u| u.field == field)
                    .and_then(|u| u.closest.as_ref())
                    .map(|(label, score)| format!("closest: {label} ({score:.2})"))
                    .unwrap_or_else(|| "-".to_string());
                table.add_row(vec![field_cell, dim_cell(hint), dim_cell("-")])
            }
        };
    }
    println!("{table}");
}

pub fn print_aliases(registry: &AliasRegistry) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Field"), header_cell("Aliases (canonical)")]);
    for entry in registry.entries() {
        table.add_row(vec![
            Cell::new(entry.field.as_str()),
            Cell::new(entry.aliases.join(", ")),
        ]);
    }
    println!("{table}");
}

fn coverage_cell(score: f64, coverage: Coverage) -> Cell {
    let color = match coverage {
        Coverage::Complete => Color::Green,
        Coverage::Partial => Color::Yellow,
        Coverage::Limited => Color::Red,
        Coverage::Unknown => Color::DarkGrey,
    };
    Cell::new(format!("{score:.2} ({})", coverage.as_str())).fg(color)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
