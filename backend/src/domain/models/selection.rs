use super::field::CategoryField;

/// Active drill-down path, one optional value per level
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub region: Option<String>,
    pub sub_region: Option<String>,
    pub block: Option<String>,
}

impl FilterSelection {
    pub fn get(&self, field: CategoryField) -> Option<&str> {
        match field {
            CategoryField::Region => self.region.as_deref(),
            CategoryField::SubRegion => self.sub_region.as_deref(),
            CategoryField::Block => self.block.as_deref(),
        }
    }

    pub fn set(&mut self, field: CategoryField, value: Option<String>) {
        match field {
            CategoryField::Region => self.region = value,
            CategoryField::SubRegion => self.sub_region = value,
            CategoryField::Block => self.block = value,
        }
    }
}

/// Selector state of one level after resolution
#[derive(Debug, Clone, PartialEq)]
pub struct LevelOptions {
    pub field: CategoryField,
    pub options: Vec<String>,
    pub selected: Option<String>,
    pub adjusted: bool,
}

/// A selection checked against the table, with the choice set of every level
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSelection {
    pub selection: FilterSelection,
    pub levels: Vec<LevelOptions>,
}

impl ResolvedSelection {
    pub fn level(&self, field: CategoryField) -> Option<&LevelOptions> {
        self.levels.iter().find(|level| level.field == field)
    }

    /// True when any requested value was missing or invalid and got replaced
    pub fn was_adjusted(&self) -> bool {
        self.levels.iter().any(|level| level.adjusted)
    }
}
