//! Normalized spend rows.

use serde::Serialize;

use crate::field::CanonicalField;
use crate::metadata::MetadataRecord;

/// One normalized row. Every canonical field is always present; unresolved
/// or empty values serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpendRecord {
    pub department_family: Option<String>,
    pub entity: Option<String>,
    /// ISO `YYYY-MM-DD`.
    pub date: Option<String>,
    pub expense_type: Option<String>,
    pub expense_area: Option<String>,
    pub supplier: Option<String>,
    pub transaction_number: Option<String>,
    pub amount_gbp: Option<f64>,
    pub description: Option<String>,
    pub supplier_postcode: Option<String>,
    pub supplier_type: Option<String>,
    pub contract_number: Option<String>,
    pub project_code: Option<String>,
    pub item_text: Option<String>,
}

impl SpendRecord {
    /// Text value of a field; `None` for `amount_gbp` and null values.
    pub fn text(&self, field: CanonicalField) -> Option<&str> {
        let value = match field {
            CanonicalField::DepartmentFamily => &self.department_family,
            CanonicalField::Entity => &self.entity,
            CanonicalField::Date => &self.date,
            CanonicalField::ExpenseType => &self.expense_type,
            CanonicalField::ExpenseArea => &self.expense_area,
            CanonicalField::Supplier => &self.supplier,
            CanonicalField::TransactionNumber => &self.transaction_number,
            CanonicalField::AmountGbp => return None,
            CanonicalField::Description => &self.description,
            CanonicalField::SupplierPostcode => &self.supplier_postcode,
            CanonicalField::SupplierType => &self.supplier_type,
            CanonicalField::ContractNumber => &self.contract_number,
            CanonicalField::ProjectCode => &self.project_code,
            CanonicalField::ItemText => &self.item_text,
        };
        value.as_deref()
    }

    /// Stores a text value. Writes to `amount_gbp` are ignored; use the
    /// field directly.
    pub fn set_text(&mut self, field: CanonicalField, value: Option<String>) {
        let slot = match field {
            CanonicalField::DepartmentFamily => &mut self.department_family,
            CanonicalField::Entity => &mut self.entity,
            CanonicalField::Date => &mut self.date,
            CanonicalField::ExpenseType => &mut self.expense_type,
            CanonicalField::ExpenseArea => &mut self.expense_area,
            CanonicalField::Supplier => &mut self.supplier,
            CanonicalField::TransactionNumber => &mut self.transaction_number,
            CanonicalField::AmountGbp => return,
            CanonicalField::Description => &mut self.description,
            CanonicalField::SupplierPostcode => &mut self.supplier_postcode,
            CanonicalField::SupplierType => &mut self.supplier_type,
            CanonicalField::ContractNumber => &mut self.contract_number,
            CanonicalField::ProjectCode => &mut self.project_code,
            CanonicalField::ItemText => &mut self.item_text,
        };
        *slot = value;
    }

    pub fn is_null(&self, field: CanonicalField) -> bool {
        match field {
            CanonicalField::AmountGbp => self.amount_gbp.is_none(),
            other => self.text(other).is_none(),
        }
    }

    /// Rows with neither a supplier nor an amount are page totals or
    /// separators.
    pub fn is_noise(&self) -> bool {
        self.supplier.is_none() && self.amount_gbp.is_none()
    }
}

/// The normalized dataset, in source row order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NormalizedTable {
    rows: Vec<SpendRecord>,
}

impl NormalizedTable {
    pub fn new(rows: Vec<SpendRecord>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[SpendRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows holding a value for `field`.
    pub fn non_null_count(&self, field: CanonicalField) -> usize {
        self.rows.iter().filter(|row| !row.is_null(field)).count()
    }

    /// Non-null amounts in row order.
    pub fn amounts(&self) -> Vec<f64> {
        self.rows.iter().filter_map(|row| row.amount_gbp).collect()
    }
}

/// The combined object handed to the sink.
#[derive(Debug, Serialize)]
pub struct SpendDocument<'a> {
    pub metadata: &'a MetadataRecord,
    pub data: &'a NormalizedTable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_amount_is_not_noise() {
        let record = SpendRecord {
            amount_gbp: Some(0.0),
            ..SpendRecord::default()
        };
        assert!(!record.is_noise());
    }

    #[test]
    fn entity_only_row_is_noise() {
        let record = SpendRecord {
            entity: Some("HM Treasury".to_string()),
            ..SpendRecord::default()
        };
        assert!(record.is_noise());
    }

    #[test]
    fn text_accessors_cover_every_textual_field() {
        let mut record = SpendRecord::default();
        for field in CanonicalField::ALL {
            record.set_text(field, Some(field.as_str().to_string()));
        }
        for field in CanonicalField::ALL {
            if field == CanonicalField::AmountGbp {
                assert!(record.is_null(field));
            } else {
                assert_eq!(record.text(field), Some(field.as_str()));
            }
        }
    }
}
