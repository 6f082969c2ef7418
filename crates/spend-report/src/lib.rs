#![deny(unsafe_code)]

//! Metadata for normalized monthly spend datasets.
//!
//! [`MetadataBuilder`] combines a [`DatasetProfile`] (publisher constants)
//! with the measured facts of one run into a
//! [`MetadataRecord`](spend_model::MetadataRecord): temporal coverage and UK
//! fiscal year, payment statistics, completeness, record counts and top-N
//! groupings.

pub mod builder;
pub mod coverage;
pub mod grouping;
pub mod profile;
pub mod quality;
pub mod stats;

pub use builder::{MetadataBuilder, RunFacts};
pub use coverage::{fiscal_year_label, next_publication_date, temporal_coverage};
pub use grouping::{distinct_count, top_groups};
pub use profile::{DatasetProfile, SCHEMA_VERSION};
pub use quality::{completeness, null_counts, round_score};
pub use stats::{financial_summary, percentile};
