//! Assembly of the metadata record.

use chrono::{DateTime, Utc};
use spend_model::{
    CanonicalField, ColumnMapping, DataQuality, MetadataRecord, NormalizedTable, ProcessingInfo,
    Provenance, RecordCounts, ReportingPeriod, SourceFile, SourceWorksheet, ValidationSummary,
};
use tracing::{debug, info};

use crate::coverage::{next_publication_date, temporal_coverage};
use crate::grouping::{distinct_count, top_groups};
use crate::profile::{DatasetProfile, SCHEMA_VERSION};
use crate::quality::{completeness, null_counts, round_score};
use crate::stats::financial_summary;

/// Everything measured about one run that feeds the metadata record.
#[derive(Debug, Clone, Copy)]
pub struct RunFacts<'a> {
    pub period: ReportingPeriod,
    pub table: &'a NormalizedTable,
    pub mapping: &'a ColumnMapping,
    /// Rows in the source table before dropping.
    pub source_rows: usize,
    pub provenance: &'a Provenance,
    /// Non-empty amount/date cells that could not be coerced.
    pub parse_warnings: usize,
    /// Wall-clock time of the run; the only input that varies between
    /// otherwise identical runs.
    pub processed_at: DateTime<Utc>,
}

/// Builds [`MetadataRecord`]s for one publisher profile.
#[derive(Debug, Clone, Copy)]
pub struct MetadataBuilder<'a> {
    profile: &'a DatasetProfile,
}

impl<'a> MetadataBuilder<'a> {
    pub fn new(profile: &'a DatasetProfile) -> Self {
        Self { profile }
    }

    /// Derives the full metadata record. Never fails: absent columns show up
    /// as nulls and lower completeness.
    pub fn build(&self, facts: &RunFacts<'_>) -> MetadataRecord {
        let profile = self.profile;
        let period = facts.period;
        let table = facts.table;

        let (score, coverage) = completeness(table);
        debug!(score, coverage = coverage.as_str(), "completeness");

        let record = MetadataRecord {
            title: format!(
                "{} - {} {}",
                profile.title_prefix,
                period.month_name(),
                period.year()
            ),
            publisher: profile.publisher.clone(),
            department_code: profile.department_code.clone(),
            publication_url: facts.provenance.publication_url.clone(),
            source_url: facts.provenance.source_url.clone(),
            license: profile.license.clone(),
            license_url: profile.license_url.clone(),
            schema_version: SCHEMA_VERSION.to_string(),
            data_classification: profile.data_classification.clone(),
            spending_threshold: profile.spending_threshold,
            currency: profile.currency.clone(),
            amount_precision: profile.amount_precision,
            temporal_coverage: temporal_coverage(period, table),
            processing_info: ProcessingInfo {
                generator: profile.generator.clone(),
                processed_timestamp: facts
                    .processed_at
                    .format("%Y-%m-%dT%H:%M:%S%.6fZ")
                    .to_string(),
                update_frequency: profile.update_frequency.clone(),
                next_publication_date: next_publication_date(period, profile.publication_day)
                    .format("%Y-%m-%d")
                    .to_string(),
            },
            source_worksheet: SourceWorksheet {
                workbook: facts.provenance.workbook.clone(),
                worksheet: facts.provenance.worksheet.sheet_label().to_string(),
                selector: facts.provenance.worksheet.selector().to_string(),
                reason: facts.provenance.worksheet.reason().to_string(),
            },
            source_file: SourceFile {
                bytes: facts.provenance.bytes,
                content_type: facts.provenance.content_type.clone(),
                sha256: facts.provenance.sha256.clone(),
            },
            column_mapping: facts.mapping.clone(),
            record_counts: RecordCounts {
                transaction_count: table.len(),
                source_record_count: facts.source_rows,
                unique_suppliers: distinct_count(table, CanonicalField::Supplier),
                unique_entities: distinct_count(table, CanonicalField::Entity),
                unique_expense_types: distinct_count(table, CanonicalField::ExpenseType),
            },
            financial_summary: financial_summary(&table.amounts()),
            data_quality: DataQuality {
                completeness_score: round_score(score),
                coverage,
                validation: ValidationSummary {
                    schema_checks_passed: true,
                    parse_errors: 0,
                    parse_warnings: facts.parse_warnings,
                },
                missing_data_counts: null_counts(table),
            },
            data_completeness: profile.data_completeness.clone(),
            known_limitations: profile.known_limitations.clone(),
            top_suppliers: top_groups(table, CanonicalField::Supplier, profile.top_suppliers),
            spending_by_entity: top_groups(table, CanonicalField::Entity, profile.top_entities),
            spending_by_expense_type: top_groups(
                table,
                CanonicalField::ExpenseType,
                profile.top_expense_types,
            ),
            contact_info: profile.contact.clone(),
            keywords: profile.keywords.clone(),
            themes: profile.themes.clone(),
        };

        info!(
            period = %period,
            transactions = record.record_counts.transaction_count,
            total = record.financial_summary.total_amount_gbp,
            completeness = record.data_quality.completeness_score,
            "metadata built"
        );
        record
    }
}
