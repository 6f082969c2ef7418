//! Cell coercion into the types of the output schema.
//!
//! Every coercer is total: a value that cannot be coerced becomes `None`.
//! - **amount**: currency text and numeric cells to `f64`
//! - **date**: day-first date text and native timestamps to `NaiveDate`
//! - **text**: identifiers and free-text fields

pub mod amount;
pub mod date;
pub mod text;

pub use amount::{coerce_amount, parse_amount};
pub use date::{coerce_date, format_date, parse_date};
pub use text::{coerce_identifier, coerce_text};
