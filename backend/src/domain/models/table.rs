use std::slice::Iter;

use super::record::Record;

/// The loaded extract. Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    extra_columns: Vec<String>,
    records: Vec<Record>,
}

impl Table {
    pub fn new(extra_columns: Vec<String>, records: Vec<Record>) -> Self {
        Self {
            extra_columns,
            records,
        }
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self::new(Vec::new(), records)
    }

    /// Names of the columns that are carried along but not interpreted
    pub fn extra_columns(&self) -> &[String] {
        &self.extra_columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
