//! backend/src/io/rest/mappers/record_mapper.rs

use crate::domain::dashboard_service::{FormattedRecord, RecordsView};
use crate::io::rest::mappers::selection_mapper::SelectionMapper;
use shared::{RecordRow, RecordTableResponse};

pub struct RecordMapper;

impl RecordMapper {
    pub fn to_row(formatted: FormattedRecord) -> RecordRow {
        let record = formatted.record;
        RecordRow {
            vehicle_count: record.vehicle_count.as_number(),
            tax_principal: record.tax_principal.as_number(),
            region: record.region,
            sub_region: record.sub_region,
            block: record.block,
            tax_principal_formatted: formatted.tax_principal_formatted,
        }
    }

    pub fn to_table_dto(view: RecordsView) -> RecordTableResponse {
        let rows: Vec<RecordRow> = view.rows.into_iter().map(Self::to_row).collect();
        RecordTableResponse {
            selection: SelectionMapper::to_dto(view.selection),
            row_count: rows.len(),
            rows,
            tax_principal_total: view.tax_principal_total,
        }
    }
}
