//! The alias registry: acceptable source headers per canonical field.

use spend_model::CanonicalField;

use crate::canonical::canonicalize;

/// Built-in aliases, in match-priority order within each field.
const BUILTIN_ALIASES: [(CanonicalField, &[&str]); 14] = [
    (
        CanonicalField::DepartmentFamily,
        &["department family", "department", "departmentfamily"],
    ),
    (CanonicalField::Entity, &["entity", "body", "entity name"]),
    (
        CanonicalField::Date,
        &["payment date", "date", "transaction date", "paid date"],
    ),
    (
        CanonicalField::ExpenseType,
        &["expense type", "expenditure type", "type", "category"],
    ),
    (
        CanonicalField::ExpenseArea,
        &[
            "expense area",
            "cost centre",
            "cost center",
            "costcentre",
            "directorate",
            "unit",
        ],
    ),
    (
        CanonicalField::Supplier,
        &["supplier", "vendor", "supplier name", "payee", "recipient"],
    ),
    (
        CanonicalField::TransactionNumber,
        &[
            "voucher number",
            "transaction number",
            "transaction no",
            "transaction id",
            "reference",
            "ref",
        ],
    ),
    (
        CanonicalField::AmountGbp,
        &[
            "amount",
            "amount gbp",
            "amount £",
            "amount(£)",
            "£",
            "gbp",
            "net amount",
            "value",
            "amount (gbp)",
            "amount (excl vat)",
            "amount excluding vat",
        ],
    ),
    (
        CanonicalField::Description,
        &[
            "publication description",
            "description",
            "item text",
            "narrative",
            "spend description",
            "notes",
        ],
    ),
    (
        CanonicalField::SupplierPostcode,
        &["supplier postcode", "postal code", "post code", "postcode"],
    ),
    (
        CanonicalField::SupplierType,
        &[
            "supplier type",
            "supplier category",
            "organisation type",
            "organization type",
        ],
    ),
    (
        CanonicalField::ContractNumber,
        &[
            "contract number",
            "contract no",
            "po number",
            "purchase order",
            "purchase order no",
            "purchase order number",
        ],
    ),
    (
        CanonicalField::ProjectCode,
        &[
            "project code",
            "project",
            "cost code",
            "programme code",
            "program code",
        ],
    ),
    (CanonicalField::ItemText, &["item text", "line description"]),
];

/// Canonicalized aliases for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub field: CanonicalField,
    /// Canonical, de-duplicated, non-empty; first occurrence order.
    pub aliases: Vec<String>,
}

/// Ordered alias configuration consumed by the column resolver.
///
/// Fields are processed in schema order. The registry is an immutable value:
/// extending it produces a new registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRegistry {
    entries: Vec<AliasEntry>,
}

impl Default for AliasRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AliasRegistry {
    /// The registry shipped with the engine.
    pub fn builtin() -> Self {
        let entries = BUILTIN_ALIASES
            .iter()
            .map(|(field, aliases)| AliasEntry {
                field: *field,
                aliases: canonical_unique(aliases.iter().copied()),
            })
            .collect();
        Self { entries }
    }

    /// A registry with no aliases at all.
    pub fn empty() -> Self {
        Self {
            entries: CanonicalField::ALL
                .into_iter()
                .map(|field| AliasEntry {
                    field,
                    aliases: Vec::new(),
                })
                .collect(),
        }
    }

    /// Returns a copy with `extra` appended after the existing aliases of
    /// `field`.
    #[must_use]
    pub fn with_extra_aliases<I, S>(&self, field: CanonicalField, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut next = self.clone();
        if let Some(entry) = next.entries.iter_mut().find(|e| e.field == field) {
            let combined = entry
                .aliases
                .iter()
                .cloned()
                .chain(extra.into_iter().map(|alias| alias.as_ref().to_string()))
                .collect::<Vec<_>>();
            entry.aliases = canonical_unique(combined.iter().map(String::as_str));
        }
        next
    }

    pub fn entries(&self) -> &[AliasEntry] {
        &self.entries
    }

    pub fn aliases(&self, field: CanonicalField) -> &[String] {
        self.entries
            .iter()
            .find(|entry| entry.field == field)
            .map(|entry| entry.aliases.as_slice())
            .unwrap_or(&[])
    }
}

fn canonical_unique<'a>(aliases: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for alias in aliases {
        let key = canonicalize(alias);
        // An empty key would substring-match every header.
        if key.is_empty() || out.contains(&key) {
            continue;
        }
        out.push(key);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_field_in_schema_order() {
        let registry = AliasRegistry::builtin();
        let fields: Vec<_> = registry.entries().iter().map(|e| e.field).collect();
        assert_eq!(fields, CanonicalField::ALL.to_vec());
        assert!(registry.entries().iter().all(|e| !e.aliases.is_empty()));
    }

    #[test]
    fn aliases_are_canonical_and_unique() {
        let registry = AliasRegistry::builtin();
        // "department family" and "departmentfamily" collapse to one key.
        assert_eq!(
            registry.aliases(CanonicalField::DepartmentFamily),
            ["departmentfamily", "department"]
        );
        // "amount gbp" and "amount (gbp)" collapse as well.
        let amount = registry.aliases(CanonicalField::AmountGbp);
        assert_eq!(amount.iter().filter(|a| *a == "amountgbp").count(), 1);
        assert!(amount.contains(&"amount£".to_string()));
    }

    #[test]
    fn extra_aliases_append_and_skip_blanks() {
        let registry = AliasRegistry::builtin().with_extra_aliases(
            CanonicalField::Supplier,
            ["Beneficiary", "  ", "payee"],
        );
        let aliases = registry.aliases(CanonicalField::Supplier);
        assert_eq!(aliases.last().map(String::as_str), Some("beneficiary"));
        assert_eq!(aliases.iter().filter(|a| *a == "payee").count(), 1);
        assert!(!aliases.iter().any(String::is_empty));
    }

    #[test]
    fn extending_leaves_original_untouched() {
        let base = AliasRegistry::builtin();
        let extended = base.with_extra_aliases(CanonicalField::Entity, ["organisation"]);
        assert_ne!(base, extended);
        assert!(!base.aliases(CanonicalField::Entity).contains(&"organisation".to_string()));
    }
}
