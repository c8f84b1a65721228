use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use tracing::info;

use crate::domain::commands::dashboard::DashboardQuery;
use crate::io::rest::mappers::dashboard_mapper::DashboardMapper;
use crate::io::rest::mappers::selection_mapper::SelectionMapper;
use crate::AppState;
use shared::{DashboardResponse, FilterSelection};

/// Create a router for the full dashboard view
pub fn router() -> Router<AppState> {
    Router::new().route("/dashboard", get(get_dashboard))
}

/// Everything needed to draw the page for one selection
async fn get_dashboard(
    State(state): State<AppState>,
    Query(selection): Query<FilterSelection>,
) -> Json<DashboardResponse> {
    info!("GET /api/dashboard - selection: {:?}", selection);

    let query = DashboardQuery {
        selection: SelectionMapper::to_domain(selection),
    };
    let service = &state.dashboard_service;
    let view = service.build_dashboard(&state.table, query);

    Json(DashboardMapper::to_dto(view, service.labels(), service.formatter()))
}
