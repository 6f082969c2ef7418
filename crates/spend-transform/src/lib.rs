#![deny(unsafe_code)]

//! Spend table transformation.
//!
//! - **coerce**: amount, date and identifier coercion
//! - **normalize**: projection of a raw table onto the canonical schema

pub mod coerce;
pub mod normalize;

pub use normalize::{CoercionStats, NormalizedOutput, RowNormalizer, normalize};
