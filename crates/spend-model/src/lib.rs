//! Data model for the monthly spend normalization engine.
//!
//! - **field**: the closed set of canonical output fields
//! - **table**: raw source cells and tables as handed over by ingestion
//! - **mapping**: canonical field to source column assignments
//! - **record**: normalized, fixed-shape spend rows
//! - **metadata**: the provenance/quality/aggregate record emitted per run
//! - **period**: reporting months

pub mod error;
pub mod field;
pub mod mapping;
pub mod metadata;
pub mod period;
pub mod provenance;
pub mod record;
pub mod table;

pub use error::{Result, SpendError};
pub use field::{CORE_FIELDS, CanonicalField};
pub use mapping::{ColumnMapping, MappedColumn, MatchKind};
pub use metadata::{
    ContactInfo, Coverage, DataQuality, FieldDisclosure, FinancialSummary, GroupTotal,
    GroupTotals, MetadataRecord, NullCounts, PaymentStatistics, ProcessingInfo, RecordCounts,
    SourceFile, SourceWorksheet, TemporalCoverage, ValidationSummary,
};
pub use period::ReportingPeriod;
pub use provenance::{Provenance, WorksheetChoice};
pub use record::{NormalizedTable, SpendDocument, SpendRecord};
pub use table::{CellValue, RawColumn, RawTable, format_number};
