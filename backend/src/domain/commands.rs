//! Domain-level query and command types.
//! The REST layer maps the DTOs of the `shared` crate to these types.

pub mod filters {
    use crate::domain::models::{CategoryField, FilterSelection};

    /// Change the value of one level
    #[derive(Debug, Clone)]
    pub struct SelectFilterCommand {
        pub selection: FilterSelection,
        pub field: CategoryField,
        pub value: String,
    }
}

pub mod dashboard {
    use crate::domain::models::{CategoryField, FilterSelection, MeasureField};

    #[derive(Debug, Clone, Default)]
    pub struct DashboardQuery {
        pub selection: FilterSelection,
    }

    /// One chart: a level's scope summed by one measure
    #[derive(Debug, Clone)]
    pub struct SummaryQuery {
        pub selection: FilterSelection,
        pub field: CategoryField,
        pub measure: MeasureField,
    }

    #[derive(Debug, Clone, Default)]
    pub struct RecordsQuery {
        pub selection: FilterSelection,
    }
}
