//! Top-N aggregation over categorical fields.

use std::collections::{BTreeSet, HashMap};

use spend_model::{CanonicalField, GroupTotal, GroupTotals, NormalizedTable};

/// Groups rows by `field`, summing non-null amounts.
///
/// Groups are ranked by descending total; equal totals keep first-seen
/// order. Rows with no value form their own `None` group. At most `limit`
/// groups are returned.
pub fn top_groups(table: &NormalizedTable, field: CanonicalField, limit: usize) -> GroupTotals {
    let mut groups: Vec<GroupTotal> = Vec::new();
    let mut positions: HashMap<Option<&str>, usize> = HashMap::new();

    for row in table.rows() {
        let key = row.text(field);
        let position = *positions.entry(key).or_insert_with(|| {
            groups.push(GroupTotal {
                key: key.map(str::to_string),
                total: 0.0,
                transaction_count: 0,
            });
            groups.len() - 1
        });
        let group = &mut groups[position];
        group.total += row.amount_gbp.unwrap_or(0.0);
        group.transaction_count += 1;
    }

    groups.sort_by(|a, b| b.total.total_cmp(&a.total));
    groups.truncate(limit);
    GroupTotals { field, groups }
}

/// Number of distinct non-null values of `field`.
pub fn distinct_count(table: &NormalizedTable, field: CanonicalField) -> usize {
    table
        .rows()
        .iter()
        .filter_map(|row| row.text(field))
        .collect::<BTreeSet<_>>()
        .len()
}
