pub mod dashboard_mapper;
pub mod record_mapper;
pub mod selection_mapper;
pub mod summary_mapper;
