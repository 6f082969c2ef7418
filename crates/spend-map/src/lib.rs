#![deny(unsafe_code)]

//! Column resolution for spend spreadsheets.
//!
//! Source headers drift from month to month ("Payment Date", "Date Paid",
//! "Transaction Date"). This crate reduces every header to a comparison key
//! and matches it against an ordered [`AliasRegistry`] to produce a
//! [`ColumnMapping`](spend_model::ColumnMapping).

pub mod aliases;
pub mod canonical;
pub mod resolve;

pub use aliases::{AliasEntry, AliasRegistry};
pub use canonical::canonicalize;
pub use resolve::{ColumnResolver, Resolution, UnresolvedField, resolve_columns};
