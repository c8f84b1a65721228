use axum::{
    extract::{Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use tracing::info;

use crate::domain::commands::filters::SelectFilterCommand;
use crate::io::rest::mappers::selection_mapper::SelectionMapper;
use crate::AppState;
use shared::{FilterSelection, FilterStateResponse, SelectFilterRequest};

/// Create a router for the cascading selectors
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/filters", get(get_filters))
        .route("/filters/select", post(select_filter))
}

/// Options and resolved value of every level
async fn get_filters(
    State(state): State<AppState>,
    Query(selection): Query<FilterSelection>,
) -> Json<FilterStateResponse> {
    info!("GET /api/filters - selection: {:?}", selection);

    let service = &state.dashboard_service;
    let resolved = service.filter_state(&state.table, &SelectionMapper::to_domain(selection));
    Json(SelectionMapper::to_filter_state_dto(resolved, service.labels()))
}

/// Change one level; the levels to its right start over from their first option
async fn select_filter(
    State(state): State<AppState>,
    Json(request): Json<SelectFilterRequest>,
) -> Json<FilterStateResponse> {
    info!(
        "POST /api/filters/select - {} = {:?}",
        request.level, request.value
    );

    let command = SelectFilterCommand {
        selection: SelectionMapper::to_domain(request.selection),
        field: SelectionMapper::level_to_domain(request.level),
        value: request.value,
    };
    let service = &state.dashboard_service;
    let resolved = service.select_filter(&state.table, command);
    Json(SelectionMapper::to_filter_state_dto(resolved, service.labels()))
}
