//! Canonical output fields.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::SpendError;

/// One column of the fixed output schema.
///
/// The declaration order is the resolution order, the serialized column
/// order, and the order used for per-field reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CanonicalField {
    DepartmentFamily,
    Entity,
    Date,
    ExpenseType,
    ExpenseArea,
    Supplier,
    TransactionNumber,
    AmountGbp,
    Description,
    SupplierPostcode,
    SupplierType,
    ContractNumber,
    ProjectCode,
    ItemText,
}

/// Fields used for completeness scoring.
pub const CORE_FIELDS: [CanonicalField; 7] = [
    CanonicalField::Date,
    CanonicalField::Supplier,
    CanonicalField::Entity,
    CanonicalField::AmountGbp,
    CanonicalField::ExpenseType,
    CanonicalField::ExpenseArea,
    CanonicalField::Description,
];

impl CanonicalField {
    /// Every field, in schema order.
    pub const ALL: [CanonicalField; 14] = [
        Self::DepartmentFamily,
        Self::Entity,
        Self::Date,
        Self::ExpenseType,
        Self::ExpenseArea,
        Self::Supplier,
        Self::TransactionNumber,
        Self::AmountGbp,
        Self::Description,
        Self::SupplierPostcode,
        Self::SupplierType,
        Self::ContractNumber,
        Self::ProjectCode,
        Self::ItemText,
    ];

    /// Output key used in the normalized dataset.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DepartmentFamily => "department_family",
            Self::Entity => "entity",
            Self::Date => "date",
            Self::ExpenseType => "expense_type",
            Self::ExpenseArea => "expense_area",
            Self::Supplier => "supplier",
            Self::TransactionNumber => "transaction_number",
            Self::AmountGbp => "amount_gbp",
            Self::Description => "description",
            Self::SupplierPostcode => "supplier_postcode",
            Self::SupplierType => "supplier_type",
            Self::ContractNumber => "contract_number",
            Self::ProjectCode => "project_code",
            Self::ItemText => "item_text",
        }
    }

    /// Whether the field contributes to the completeness score.
    #[must_use]
    pub fn is_core(self) -> bool {
        CORE_FIELDS.contains(&self)
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CanonicalField {
    type Err = SpendError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SpendError::UnknownField(trimmed.to_string()))
    }
}

impl Serialize for CanonicalField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
