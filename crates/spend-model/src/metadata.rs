//! The metadata record emitted alongside each normalized dataset.
//!
//! Field names and nesting are a compatibility contract with downstream
//! consumers and are versioned through `schema_version`.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Serialize, Serializer};

use crate::field::CanonicalField;
use crate::mapping::ColumnMapping;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataRecord {
    pub title: String,
    pub publisher: String,
    pub department_code: String,
    pub publication_url: String,
    pub source_url: String,
    pub license: String,
    pub license_url: String,
    pub schema_version: String,
    pub data_classification: String,
    pub spending_threshold: u64,
    pub currency: String,
    pub amount_precision: u32,
    pub temporal_coverage: TemporalCoverage,
    pub processing_info: ProcessingInfo,
    pub source_worksheet: SourceWorksheet,
    pub source_file: SourceFile,
    pub column_mapping: ColumnMapping,
    pub record_counts: RecordCounts,
    pub financial_summary: FinancialSummary,
    pub data_quality: DataQuality,
    #[serde(serialize_with = "serialize_disclosures")]
    pub data_completeness: Vec<FieldDisclosure>,
    pub known_limitations: Vec<String>,
    pub top_suppliers: GroupTotals,
    pub spending_by_entity: GroupTotals,
    pub spending_by_expense_type: GroupTotals,
    pub contact_info: ContactInfo,
    pub keywords: Vec<String>,
    pub themes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemporalCoverage {
    /// `YYYY-MM`.
    pub period: String,
    pub fiscal_year: String,
    pub start_date: String,
    pub end_date: String,
    pub earliest_payment_date: Option<String>,
    pub latest_payment_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessingInfo {
    pub generator: String,
    /// The only field that differs between runs over identical input.
    pub processed_timestamp: String,
    pub update_frequency: String,
    pub next_publication_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceWorksheet {
    pub workbook: String,
    pub worksheet: String,
    pub selector: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    pub bytes: u64,
    pub content_type: String,
    pub sha256: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecordCounts {
    pub transaction_count: usize,
    pub source_record_count: usize,
    pub unique_suppliers: usize,
    pub unique_entities: usize,
    pub unique_expense_types: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinancialSummary {
    pub total_amount_gbp: f64,
    pub payment_statistics: PaymentStatistics,
}

/// Descriptive statistics over non-null amounts; all absent when there are
/// none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PaymentStatistics {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub p95: Option<f64>,
}

/// Completeness band derived from the completeness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Coverage {
    Complete,
    Partial,
    Limited,
    Unknown,
}

impl Coverage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Partial => "partial",
            Self::Limited => "limited",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataQuality {
    /// Rounded to two decimals.
    pub completeness_score: f64,
    pub coverage: Coverage,
    pub validation: ValidationSummary,
    pub missing_data_counts: NullCounts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    pub schema_checks_passed: bool,
    pub parse_errors: usize,
    /// Non-empty amount/date cells that could not be coerced.
    pub parse_warnings: usize,
}

/// Null counts per canonical field, serialized as a map in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NullCounts(pub Vec<(CanonicalField, usize)>);

impl NullCounts {
    pub fn get(&self, field: CanonicalField) -> Option<usize> {
        self.0
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, count)| *count)
    }
}

impl Serialize for NullCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, count) in &self.0 {
            map.serialize_entry(field.as_str(), count)?;
        }
        map.end()
    }
}

/// A note explaining why an optional field is sparsely populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDisclosure {
    pub field: String,
    pub status: String,
    pub reason: String,
}

fn serialize_disclosures<S: Serializer>(
    disclosures: &[FieldDisclosure],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    #[derive(Serialize)]
    struct Note<'a> {
        status: &'a str,
        reason: &'a str,
    }

    let mut map = serializer.serialize_map(Some(disclosures.len()))?;
    for disclosure in disclosures {
        map.serialize_entry(
            &disclosure.field,
            &Note {
                status: &disclosure.status,
                reason: &disclosure.reason,
            },
        )?;
    }
    map.end()
}

/// One group of a top-N aggregation. `key` is `None` for the group of rows
/// with no value in the grouping field.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotal {
    pub key: Option<String>,
    pub total: f64,
    pub transaction_count: usize,
}

/// Ranked groups for one categorical field.
///
/// Serialized as a list of `{ <field>: key, total, transaction_count }`.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotals {
    pub field: CanonicalField,
    pub groups: Vec<GroupTotal>,
}

impl Serialize for GroupTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Labelled<'a> {
            label: &'static str,
            group: &'a GroupTotal,
        }

        impl Serialize for Labelled<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry(self.label, &self.group.key)?;
                map.serialize_entry("total", &self.group.total)?;
                map.serialize_entry("transaction_count", &self.group.transaction_count)?;
                map.end()
            }
        }

        let label = self.field.as_str();
        let mut seq = serializer.serialize_seq(Some(self.groups.len()))?;
        for group in &self.groups {
            seq.serialize_element(&Labelled { label, group })?;
        }
        seq.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub department: String,
}
