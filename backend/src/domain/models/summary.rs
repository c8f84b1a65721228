use std::cmp::Ordering;

use super::field::{CategoryField, MeasureField};

/// Orders category values the way a reader expects: numeric values by magnitude
/// ("2" before "10"), then text lexicographically.
pub fn compare_categories(a: &str, b: &str) -> Ordering {
    match (as_finite_number(a), as_finite_number(b)) {
        (Some(x), Some(y)) => x
            .partial_cmp(&y)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn as_finite_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Grouping key; the missing value is a group of its own and sorts last
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupKey(pub Option<String>);

impl Ord for GroupKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => compare_categories(a, b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl PartialOrd for GroupKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub key: Option<String>,
    pub value: f64,
}

/// Result of grouping by one category and summing one measure.
/// Rows are ordered by group key.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTable {
    pub group_field: CategoryField,
    pub measure: MeasureField,
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub fn empty(group_field: CategoryField, measure: MeasureField) -> Self {
        Self {
            group_field,
            measure,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.rows.iter().map(|row| row.value).sum()
    }

    /// Summed value for a group, `None` key meaning the missing-value group
    pub fn value_of(&self, key: Option<&str>) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| row.key.as_deref() == key)
            .map(|row| row.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_categories_sort_by_value() {
        let mut values = vec!["10", "2", "1", "B", "A"];
        values.sort_by(|a, b| compare_categories(a, b));
        assert_eq!(values, vec!["1", "2", "10", "A", "B"]);
    }

    #[test]
    fn test_missing_group_sorts_last() {
        let mut keys = vec![
            GroupKey(None),
            GroupKey(Some("b".to_string())),
            GroupKey(Some("a".to_string())),
        ];
        keys.sort();
        assert_eq!(keys.last(), Some(&GroupKey(None)));
        assert_eq!(keys[0], GroupKey(Some("a".to_string())));
    }

    #[test]
    fn test_equal_numbers_with_different_text_are_distinct() {
        assert_eq!(compare_categories("01", "1"), std::cmp::Ordering::Less);
        assert_ne!(GroupKey(Some("01".to_string())), GroupKey(Some("1".to_string())));
    }
}
