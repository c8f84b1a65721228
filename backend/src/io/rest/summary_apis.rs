use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use tracing::info;

use crate::domain::commands::dashboard::SummaryQuery;
use crate::io::rest::error::ApiError;
use crate::io::rest::mappers::selection_mapper::SelectionMapper;
use crate::io::rest::mappers::summary_mapper::SummaryMapper;
use crate::AppState;
use shared::{ChartSeries, FilterSelection, GrandTotalResponse};

/// Create a router for the grand total and per-level summaries
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/summaries/total", get(get_grand_total))
        .route("/summaries/:level/:measure", get(get_summary))
}

/// Tax principal over the whole table
async fn get_grand_total(State(state): State<AppState>) -> Json<GrandTotalResponse> {
    info!("GET /api/summaries/total");
    let total = state.dashboard_service.grand_total(&state.table);
    Json(SummaryMapper::to_grand_total_dto(total))
}

/// One chart series, e.g. `/api/summaries/block/tax_principal?region=A&sub_region=X`
async fn get_summary(
    State(state): State<AppState>,
    Path((level, measure)): Path<(String, String)>,
    Query(selection): Query<FilterSelection>,
) -> Result<Json<ChartSeries>, ApiError> {
    info!("GET /api/summaries/{}/{} - selection: {:?}", level, measure, selection);

    let query = SummaryQuery {
        selection: SelectionMapper::to_domain(selection),
        field: SelectionMapper::parse_level(&level)?,
        measure: SelectionMapper::parse_measure(&measure)?,
    };
    let service = &state.dashboard_service;
    let chart = service.summary(&state.table, query);
    Ok(Json(SummaryMapper::to_series(chart, service.formatter())))
}
