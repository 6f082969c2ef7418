//! Exact-then-lenient column resolution.

use rapidfuzz::distance::jaro_winkler;
use spend_model::{CanonicalField, ColumnMapping, MappedColumn, MatchKind};
use tracing::{debug, warn};

use crate::aliases::AliasRegistry;
use crate::canonical::canonicalize;

/// A canonical field that no header matched.
#[derive(Debug, Clone, PartialEq)]
pub struct UnresolvedField {
    pub field: CanonicalField,
    /// Most similar header by Jaro-Winkler against the field's aliases.
    /// Diagnostic only; never used for mapping.
    pub closest: Option<(String, f64)>,
}

/// Outcome of resolving one header row.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub mapping: ColumnMapping,
    pub unresolved: Vec<UnresolvedField>,
}

/// Matches header rows against an injected alias registry.
#[derive(Debug, Clone, Copy)]
pub struct ColumnResolver<'a> {
    registry: &'a AliasRegistry,
}

impl<'a> ColumnResolver<'a> {
    pub fn new(registry: &'a AliasRegistry) -> Self {
        Self { registry }
    }

    /// Resolves every canonical field against `headers`.
    ///
    /// For each field, in registry order: the first header whose canonical
    /// form equals an alias wins; failing that, the first header whose
    /// canonical form contains an alias. Fields are resolved independently,
    /// so one header may serve several fields.
    pub fn resolve<S: AsRef<str>>(&self, headers: &[S]) -> Resolution {
        let canonical: Vec<String> = headers.iter().map(|h| canonicalize(h.as_ref())).collect();
        let mut entries = Vec::new();
        let mut unresolved = Vec::new();

        for entry in self.registry.entries() {
            match match_field(&canonical, &entry.aliases) {
                Some((index, match_kind)) => {
                    let label = headers[index].as_ref().to_string();
                    debug!(
                        field = %entry.field,
                        column = %label,
                        index,
                        match_kind = ?match_kind,
                        "resolved column"
                    );
                    entries.push((
                        entry.field,
                        MappedColumn {
                            index,
                            label,
                            match_kind,
                        },
                    ));
                }
                None => {
                    let closest = closest_header(headers, &canonical, &entry.aliases);
                    if entry.field.is_core() {
                        warn!(
                            field = %entry.field,
                            closest = closest.as_ref().map(|(label, _)| label.as_str()).unwrap_or("-"),
                            "no column matched core field"
                        );
                    } else {
                        debug!(field = %entry.field, "no column matched optional field");
                    }
                    unresolved.push(UnresolvedField {
                        field: entry.field,
                        closest,
                    });
                }
            }
        }

        Resolution {
            mapping: ColumnMapping::from_entries(entries),
            unresolved,
        }
    }
}

/// Resolves `headers` and returns only the mapping.
pub fn resolve_columns<S: AsRef<str>>(headers: &[S], registry: &AliasRegistry) -> ColumnMapping {
    ColumnResolver::new(registry).resolve(headers).mapping
}

fn match_field(canonical: &[String], aliases: &[String]) -> Option<(usize, MatchKind)> {
    if let Some(index) = canonical.iter().position(|h| aliases.contains(h)) {
        return Some((index, MatchKind::Exact));
    }
    canonical
        .iter()
        .position(|h| aliases.iter().any(|alias| h.contains(alias.as_str())))
        .map(|index| (index, MatchKind::Lenient))
}

fn closest_header<S: AsRef<str>>(
    headers: &[S],
    canonical: &[String],
    aliases: &[String],
) -> Option<(String, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (index, header) in canonical.iter().enumerate() {
        if header.is_empty() {
            continue;
        }
        let score = aliases
            .iter()
            .map(|alias| jaro_winkler::similarity(header.chars(), alias.chars()))
            .fold(0.0_f64, f64::max);
        if best.is_none_or(|(_, current)| score > current) {
            best = Some((index, score));
        }
    }
    best.map(|(index, score)| (headers[index].as_ref().to_string(), score))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closest_header_prefers_most_similar() {
        let registry = AliasRegistry::builtin();
        let headers = ["Suplier Nme", "Region"];
        let canonical: Vec<String> = headers.iter().map(|h| canonicalize(h)).collect();
        let closest = closest_header(
            &headers,
            &canonical,
            registry.aliases(CanonicalField::Supplier),
        )
        .unwrap();
        assert_eq!(closest.0, "Suplier Nme");
        assert!(closest.1 > 0.8);
    }

    #[test]
    fn no_headers_means_no_suggestion() {
        let registry = AliasRegistry::builtin();
        let headers: [&str; 0] = [];
        assert!(closest_header(&headers, &[], registry.aliases(CanonicalField::Date)).is_none());
    }
}
