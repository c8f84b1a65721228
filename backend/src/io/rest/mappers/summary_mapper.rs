//! backend/src/io/rest/mappers/summary_mapper.rs

use crate::domain::dashboard_service::{Chart, GrandTotal};
use crate::domain::CurrencyFormatter;
use crate::io::rest::mappers::selection_mapper::SelectionMapper;
use shared::{ChartSeries, GrandTotalResponse, SeriesPoint};

pub struct SummaryMapper;

impl SummaryMapper {
    /// Converts a chart to a series. Tax series also carry the rupiah text of
    /// every bar.
    pub fn to_series(chart: Chart, formatter: &CurrencyFormatter) -> ChartSeries {
        let currency = chart.summary.measure.is_currency();
        let points = chart
            .summary
            .rows
            .into_iter()
            .map(|row| SeriesPoint {
                formatted_value: currency.then(|| formatter.format_amount(row.value)),
                category: row.key,
                value: row.value,
            })
            .collect();

        ChartSeries {
            id: chart.id,
            title: chart.title,
            subtitle: chart.subtitle,
            level: SelectionMapper::level_to_dto(chart.summary.group_field),
            measure: SelectionMapper::measure_to_dto(chart.summary.measure),
            category_label: chart.category_label,
            value_label: chart.value_label,
            points,
        }
    }

    pub fn to_grand_total_dto(total: GrandTotal) -> GrandTotalResponse {
        GrandTotalResponse {
            label: total.label,
            amount: total.amount,
            formatted: total.formatted,
        }
    }
}
