//! Canonical field to source column assignments.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::field::CanonicalField;

/// How a source column was matched to its canonical field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// The canonical header equals one of the field's aliases.
    Exact,
    /// The canonical header contains one of the field's aliases.
    Lenient,
}

/// The source column assigned to a canonical field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedColumn {
    /// Position of the column in the source table.
    pub index: usize,
    /// Original (uncanonicalized) header label.
    pub label: String,
    pub match_kind: MatchKind,
}

/// Partial mapping from canonical field to source column.
///
/// Entries are kept in schema order regardless of insertion order. A mapping
/// is immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMapping {
    entries: Vec<(CanonicalField, MappedColumn)>,
}

impl ColumnMapping {
    /// Builds a mapping; later duplicates of a field are ignored.
    pub fn from_entries(entries: impl IntoIterator<Item = (CanonicalField, MappedColumn)>) -> Self {
        let mut collected: Vec<(CanonicalField, MappedColumn)> = Vec::new();
        for (field, column) in entries {
            if collected.iter().any(|(existing, _)| *existing == field) {
                continue;
            }
            collected.push((field, column));
        }
        collected.sort_by_key(|(field, _)| *field);
        Self { entries: collected }
    }

    pub fn get(&self, field: CanonicalField) -> Option<&MappedColumn> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, column)| column)
    }

    pub fn contains(&self, field: CanonicalField) -> bool {
        self.get(field).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CanonicalField, &MappedColumn)> {
        self.entries.iter().map(|(field, column)| (*field, column))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Canonical fields with no source column, in schema order.
    pub fn unresolved(&self) -> Vec<CanonicalField> {
        CanonicalField::ALL
            .into_iter()
            .filter(|field| !self.contains(*field))
            .collect()
    }
}

/// Serialized as `{ canonical_field: source_label }` in schema order.
impl Serialize for ColumnMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, column) in &self.entries {
            map.serialize_entry(field.as_str(), &column.label)?;
        }
        map.end()
    }
}
