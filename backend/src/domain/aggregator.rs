//! Grouped sums over records.
//!
//! Every summary is computed directly from records of the immutable table, never
//! from another summary.

use std::collections::BTreeMap;

use super::models::{CategoryField, GroupKey, MeasureField, Record, SummaryRow, SummaryTable};

/// Group `rows` by `group_field` and sum `measure`.
///
/// Rows without a group value form one group of their own. Measure cells that are
/// missing or not numeric contribute zero. The result is ordered by group key.
pub fn aggregate<'a, I>(rows: I, group_field: CategoryField, measure: MeasureField) -> SummaryTable
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut groups: BTreeMap<GroupKey, f64> = BTreeMap::new();
    for record in rows {
        let key = GroupKey(record.category(group_field).map(str::to_string));
        *groups.entry(key).or_insert(0.0) += record.measure(measure).summable();
    }

    SummaryTable {
        group_field,
        measure,
        rows: groups
            .into_iter()
            .map(|(key, value)| SummaryRow { key: key.0, value })
            .collect(),
    }
}

/// Sum of `measure` over all rows, ungrouped
pub fn grand_total<'a, I>(rows: I, measure: MeasureField) -> f64
where
    I: IntoIterator<Item = &'a Record>,
{
    rows.into_iter()
        .map(|record| record.measure(measure).summable())
        .sum()
}
