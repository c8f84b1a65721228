//! Cascading region → sub-region → block filter.
//!
//! Each level's choice set is derived from the table narrowed by every level to
//! its left. A level without a value matches no rows, the same way comparing a
//! column against a missing value does.

use std::collections::BTreeSet;

use tracing::debug;

use super::models::summary::compare_categories;
use super::models::{CategoryField, FilterSelection, LevelOptions, Record, ResolvedSelection, Table};

#[derive(Debug, Clone, Default)]
pub struct CascadingFilter;

impl CascadingFilter {
    pub fn new() -> Self {
        Self
    }

    /// Rows matching the selection on every level up to and including `through`
    pub fn scope<'a>(
        &self,
        table: &'a Table,
        selection: &FilterSelection,
        through: CategoryField,
    ) -> Vec<&'a Record> {
        let levels = &CategoryField::ALL[..=through.index()];
        let mut wanted = Vec::with_capacity(levels.len());
        for field in levels {
            match selection.get(*field) {
                Some(value) => wanted.push((*field, value)),
                None => return Vec::new(),
            }
        }

        table
            .iter()
            .filter(|record| {
                wanted
                    .iter()
                    .all(|(field, value)| record.category(*field) == Some(*value))
            })
            .collect()
    }

    /// The filtered scope: rows matching all three levels
    pub fn narrow<'a>(&self, table: &'a Table, selection: &FilterSelection) -> Vec<&'a Record> {
        self.scope(table, selection, CategoryField::Block)
    }

    /// Rows a level chooses from: the whole table for the first level, otherwise
    /// the scope of the level to its left
    pub fn candidates<'a>(
        &self,
        table: &'a Table,
        selection: &FilterSelection,
        field: CategoryField,
    ) -> Vec<&'a Record> {
        match field.previous() {
            None => table.iter().collect(),
            Some(previous) => self.scope(table, selection, previous),
        }
    }

    /// Sorted distinct non-missing values of `field` within its candidate rows
    pub fn options(&self, table: &Table, selection: &FilterSelection, field: CategoryField) -> Vec<String> {
        let distinct: BTreeSet<&str> = self
            .candidates(table, selection, field)
            .into_iter()
            .filter_map(|record| record.category(field))
            .collect();

        let mut options: Vec<String> = distinct.into_iter().map(str::to_string).collect();
        options.sort_by(|a, b| compare_categories(a, b));
        options
    }

    /// Choose `value` for `field`; levels to its right are cleared because their
    /// choice sets depend on the new value
    pub fn select(&self, selection: &FilterSelection, field: CategoryField, value: String) -> FilterSelection {
        let mut updated = selection.clone();
        updated.set(field, Some(value));
        for downstream in field.downstream() {
            updated.set(*downstream, None);
        }
        updated
    }

    /// Check a requested selection against the table, left to right.
    ///
    /// A requested value is kept when it is one of the level's options. A missing
    /// or invalid value is replaced with the first option. A level with no
    /// options stays unselected, which leaves every level to its right empty.
    pub fn resolve(&self, table: &Table, requested: &FilterSelection) -> ResolvedSelection {
        let mut selection = FilterSelection::default();
        let mut levels = Vec::with_capacity(CategoryField::ALL.len());

        for field in CategoryField::ALL {
            let options = self.options(table, &selection, field);
            let wanted = requested.get(field);

            let selected = match wanted {
                Some(value) if options.iter().any(|option| option == value) => Some(value.to_string()),
                _ => options.first().cloned(),
            };
            let adjusted = wanted != selected.as_deref();
            if adjusted {
                debug!(
                    level = %field,
                    requested = ?wanted,
                    selected = ?selected,
                    "selection adjusted"
                );
            }

            selection.set(field, selected.clone());
            levels.push(LevelOptions {
                field,
                options,
                selected,
                adjusted,
            });
        }

        ResolvedSelection { selection, levels }
    }
}
