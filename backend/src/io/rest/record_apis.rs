use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use tracing::info;

use crate::domain::commands::dashboard::RecordsQuery;
use crate::io::rest::mappers::record_mapper::RecordMapper;
use crate::io::rest::mappers::selection_mapper::SelectionMapper;
use crate::AppState;
use shared::{FilterSelection, RecordTableResponse};

/// Create a router for the filtered record grid
pub fn router() -> Router<AppState> {
    Router::new().route("/records", get(get_records))
}

async fn get_records(
    State(state): State<AppState>,
    Query(selection): Query<FilterSelection>,
) -> Json<RecordTableResponse> {
    info!("GET /api/records - selection: {:?}", selection);

    let query = RecordsQuery {
        selection: SelectionMapper::to_domain(selection),
    };
    let view = state.dashboard_service.records(&state.table, query);
    Json(RecordMapper::to_table_dto(view))
}
