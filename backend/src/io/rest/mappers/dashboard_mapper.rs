//! backend/src/io/rest/mappers/dashboard_mapper.rs

use crate::domain::{DashboardView, DisplayLabels, CurrencyFormatter};
use crate::io::rest::mappers::record_mapper::RecordMapper;
use crate::io::rest::mappers::selection_mapper::SelectionMapper;
use crate::io::rest::mappers::summary_mapper::SummaryMapper;
use shared::DashboardResponse;

pub struct DashboardMapper;

impl DashboardMapper {
    pub fn to_dto(view: DashboardView, labels: &DisplayLabels, formatter: &CurrencyFormatter) -> DashboardResponse {
        DashboardResponse {
            title: view.title,
            grand_total: SummaryMapper::to_grand_total_dto(view.grand_total),
            filters: SelectionMapper::to_filter_state_dto(view.filters, labels),
            charts: view
                .charts
                .into_iter()
                .map(|chart| SummaryMapper::to_series(chart, formatter))
                .collect(),
            records: RecordMapper::to_table_dto(view.records),
        }
    }
}
