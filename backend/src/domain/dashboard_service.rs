//! Dashboard assembly.
//!
//! Builds everything the front end draws for one selection: the headline total,
//! the selector states, six charts (both measures at each of the three levels)
//! and the filtered grid. Each call works from the immutable table alone, so
//! repeated calls with the same selection give the same view.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::aggregator::{aggregate, grand_total};
use super::cascading_filter::CascadingFilter;
use super::commands::dashboard::{DashboardQuery, RecordsQuery, SummaryQuery};
use super::commands::filters::SelectFilterCommand;
use super::currency::{CurrencyFormat, CurrencyFormatter};
use super::models::{
    CategoryField, FilterSelection, MeasureField, Record, ResolvedSelection, SummaryTable, Table,
};

/// Display names used in titles and selector labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayLabels {
    pub region: String,
    pub sub_region: String,
    pub block: String,
    pub vehicle_count: String,
    pub tax_principal: String,
    /// Word joining a measure to the area it is restricted to, e.g. "di"
    pub within: String,
    pub grand_total: String,
}

impl Default for DisplayLabels {
    fn default() -> Self {
        Self {
            region: "Kecamatan".to_string(),
            sub_region: "Kelurahan".to_string(),
            block: "RT".to_string(),
            vehicle_count: "Jumlah Kendaraan".to_string(),
            tax_principal: "Pokok PKB".to_string(),
            within: "di".to_string(),
            grand_total: "Total Pokok PKB Keseluruhan".to_string(),
        }
    }
}

impl DisplayLabels {
    pub fn level(&self, field: CategoryField) -> &str {
        match field {
            CategoryField::Region => &self.region,
            CategoryField::SubRegion => &self.sub_region,
            CategoryField::Block => &self.block,
        }
    }

    pub fn measure(&self, measure: MeasureField) -> &str {
        match measure {
            MeasureField::VehicleCount => &self.vehicle_count,
            MeasureField::TaxPrincipal => &self.tax_principal,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSettings {
    pub title: String,
    pub labels: DisplayLabels,
    pub currency: CurrencyFormat,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            title: "Dashboard Analisis PKB".to_string(),
            labels: DisplayLabels::default(),
            currency: CurrencyFormat::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub category_label: String,
    pub value_label: String,
    pub summary: SummaryTable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GrandTotal {
    pub label: String,
    pub amount: f64,
    pub formatted: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormattedRecord {
    pub record: Record,
    pub tax_principal_formatted: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordsView {
    pub selection: FilterSelection,
    pub rows: Vec<FormattedRecord>,
    pub tax_principal_total: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub title: String,
    pub grand_total: GrandTotal,
    pub filters: ResolvedSelection,
    pub charts: Vec<Chart>,
    pub records: RecordsView,
}

#[derive(Debug, Clone, Default)]
pub struct DashboardService {
    settings: DashboardSettings,
    filter: CascadingFilter,
    formatter: CurrencyFormatter,
}

impl DashboardService {
    pub fn new(settings: DashboardSettings) -> Self {
        let formatter = CurrencyFormatter::with_config(settings.currency.clone());
        Self {
            settings,
            filter: CascadingFilter::new(),
            formatter,
        }
    }

    pub fn labels(&self) -> &DisplayLabels {
        &self.settings.labels
    }

    pub fn formatter(&self) -> &CurrencyFormatter {
        &self.formatter
    }

    /// Sum of tax principal over the unfiltered table
    pub fn grand_total(&self, table: &Table) -> GrandTotal {
        let amount = grand_total(table, MeasureField::TaxPrincipal);
        GrandTotal {
            label: self.settings.labels.grand_total.clone(),
            amount,
            formatted: self.formatter.format_amount(amount),
        }
    }

    pub fn filter_state(&self, table: &Table, selection: &FilterSelection) -> ResolvedSelection {
        self.filter.resolve(table, selection)
    }

    /// Apply a selector change, clearing the levels to its right, then resolve
    pub fn select_filter(&self, table: &Table, command: SelectFilterCommand) -> ResolvedSelection {
        let updated = self
            .filter
            .select(&command.selection, command.field, command.value);
        self.filter.resolve(table, &updated)
    }

    pub fn summary(&self, table: &Table, query: SummaryQuery) -> Chart {
        let resolved = self.filter.resolve(table, &query.selection);
        self.chart(table, &resolved.selection, query.field, query.measure)
    }

    pub fn records(&self, table: &Table, query: RecordsQuery) -> RecordsView {
        let resolved = self.filter.resolve(table, &query.selection);
        self.records_for(table, resolved.selection)
    }

    pub fn build_dashboard(&self, table: &Table, query: DashboardQuery) -> DashboardView {
        let filters = self.filter.resolve(table, &query.selection);

        let mut charts = Vec::with_capacity(CategoryField::ALL.len() * MeasureField::ALL.len());
        for field in CategoryField::ALL {
            for measure in MeasureField::ALL {
                charts.push(self.chart(table, &filters.selection, field, measure));
            }
        }

        let records = self.records_for(table, filters.selection.clone());
        debug!(
            charts = charts.len(),
            rows = records.rows.len(),
            "dashboard assembled"
        );

        DashboardView {
            title: self.settings.title.clone(),
            grand_total: self.grand_total(table),
            filters,
            charts,
            records,
        }
    }

    /// Summary of one level: the whole table for regions, otherwise the rows
    /// inside the selected parent area
    fn chart(
        &self,
        table: &Table,
        selection: &FilterSelection,
        field: CategoryField,
        measure: MeasureField,
    ) -> Chart {
        let rows = self.filter.candidates(table, selection, field);
        let summary = aggregate(rows, field, measure);
        let labels = &self.settings.labels;

        let title = if measure.is_currency() {
            format!("Total {} per {}", labels.measure(measure), labels.level(field))
        } else {
            format!("{} per {}", labels.measure(measure), labels.level(field))
        };

        let subtitle = match field.previous() {
            None => format!("{} per {}", labels.measure(measure), labels.level(field)),
            Some(parent) => {
                let scope = match selection.get(parent) {
                    Some(value) => format!("{} {}", labels.level(parent), value),
                    None => labels.level(parent).to_string(),
                };
                format!("{} {} {}", labels.measure(measure), labels.within, scope)
            }
        };

        let value_label = if measure.is_currency() {
            format!("Total {} ({})", labels.measure(measure), self.currency_symbol())
        } else {
            labels.measure(measure).to_string()
        };

        Chart {
            id: format!("{}_{}", field, measure),
            title,
            subtitle,
            category_label: labels.level(field).to_string(),
            value_label,
            summary,
        }
    }

    fn records_for(&self, table: &Table, selection: FilterSelection) -> RecordsView {
        let scope = self.filter.narrow(table, &selection);
        let total = grand_total(scope.iter().copied(), MeasureField::TaxPrincipal);

        let rows = scope
            .into_iter()
            .map(|record| FormattedRecord {
                tax_principal_formatted: self.formatter.format(&record.tax_principal),
                record: record.clone(),
            })
            .collect();

        RecordsView {
            selection,
            rows,
            tax_principal_total: self.formatter.format_amount(total),
        }
    }

    /// "Rp. " -> "Rp"
    fn currency_symbol(&self) -> &str {
        self.formatter
            .config()
            .prefix
            .trim()
            .trim_end_matches('.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::fixtures::{district_table, sample_table};

    fn select(region: &str, sub_region: &str) -> FilterSelection {
        FilterSelection {
            region: Some(region.to_string()),
            sub_region: Some(sub_region.to_string()),
            block: None,
        }
    }

    fn chart<'a>(view: &'a DashboardView, id: &str) -> &'a Chart {
        view.charts
            .iter()
            .find(|chart| chart.id == id)
            .unwrap_or_else(|| panic!("missing chart {}", id))
    }

    #[test]
    fn test_end_to_end_example() {
        let service = DashboardService::default();
        let table = sample_table();
        let view = service.build_dashboard(&table, DashboardQuery { selection: select("A", "X") });

        assert_eq!(view.grand_total.amount, 3500.0);
        assert_eq!(view.grand_total.formatted, "Rp. 3.500");

        let by_region = &chart(&view, "region_tax_principal").summary;
        assert_eq!(by_region.value_of(Some("A")), Some(3000.0));
        assert_eq!(by_region.value_of(Some("B")), Some(500.0));

        let by_block = &chart(&view, "block_tax_principal").summary;
        assert_eq!(by_block.len(), 2);
        assert_eq!(by_block.value_of(Some("1")), Some(1000.0));
        assert_eq!(by_block.value_of(Some("2")), Some(2000.0));

        // Block defaults to the first option, narrowing the grid to one row
        assert_eq!(view.filters.selection.block.as_deref(), Some("1"));
        assert_eq!(view.records.rows.len(), 1);
        assert_eq!(view.records.rows[0].tax_principal_formatted, "Rp. 1.000");
    }

    #[test]
    fn test_sub_region_scope_has_two_rows() {
        let service = DashboardService::default();
        let table = sample_table();
        let filters = service.filter_state(&table, &select("A", "X"));
        let scope = service.filter.scope(&table, &filters.selection, CategoryField::SubRegion);
        assert_eq!(scope.len(), 2);
    }

    #[test]
    fn test_six_charts_in_level_order() {
        let service = DashboardService::default();
        let view = service.build_dashboard(&district_table(), DashboardQuery::default());
        let ids: Vec<&str> = view.charts.iter().map(|chart| chart.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "region_vehicle_count",
                "region_tax_principal",
                "sub_region_vehicle_count",
                "sub_region_tax_principal",
                "block_vehicle_count",
                "block_tax_principal",
            ]
        );
    }

    #[test]
    fn test_chart_titles_name_the_scope() {
        let service = DashboardService::default();
        let view = service.build_dashboard(&district_table(), DashboardQuery { selection: select("Coblong", "Dago") });

        let sub_region = chart(&view, "sub_region_vehicle_count");
        assert_eq!(sub_region.title, "Jumlah Kendaraan per Kelurahan");
        assert_eq!(sub_region.subtitle, "Jumlah Kendaraan di Kecamatan Coblong");

        let block_tax = chart(&view, "block_tax_principal");
        assert_eq!(block_tax.title, "Total Pokok PKB per RT");
        assert_eq!(block_tax.subtitle, "Pokok PKB di Kelurahan Dago");
        assert_eq!(block_tax.value_label, "Total Pokok PKB (Rp)");
    }

    #[test]
    fn test_level_charts_use_only_parent_scope() {
        let service = DashboardService::default();
        let table = district_table();
        let view = service.build_dashboard(&table, DashboardQuery { selection: select("Coblong", "Dago") });

        // Region charts always cover the whole table
        let by_region = &chart(&view, "region_vehicle_count").summary;
        assert_eq!(by_region.total(), 17.0);

        let by_sub_region = &chart(&view, "sub_region_vehicle_count").summary;
        assert_eq!(by_sub_region.len(), 2);
        assert_eq!(by_sub_region.total(), 8.0);

        let by_block = &chart(&view, "block_vehicle_count").summary;
        assert_eq!(by_block.rows.iter().map(|r| r.key.as_deref()).collect::<Vec<_>>(), vec![Some("2"), Some("10")]);
    }

    #[test]
    fn test_empty_scope_gives_empty_charts() {
        let service = DashboardService::default();
        let table = Table::from_records(vec![Record::new(Some("A"), None, None, 1.0, 10.0)]);
        let view = service.build_dashboard(&table, DashboardQuery::default());

        assert!(chart(&view, "block_vehicle_count").summary.is_empty());
        assert!(view.records.rows.is_empty());
        assert_eq!(view.records.tax_principal_total, "Rp. 0");
        // The sub-region chart still shows the region's rows, grouped under "missing"
        let by_sub_region = &chart(&view, "sub_region_vehicle_count").summary;
        assert_eq!(by_sub_region.value_of(None), Some(1.0));
    }

    #[test]
    fn test_select_filter_resets_and_resolves() {
        let service = DashboardService::default();
        let table = district_table();
        let command = SelectFilterCommand {
            selection: FilterSelection {
                region: Some("Coblong".to_string()),
                sub_region: Some("Lebakgede".to_string()),
                block: Some("1".to_string()),
            },
            field: CategoryField::Region,
            value: "Andir".to_string(),
        };

        let resolved = service.select_filter(&table, command);
        assert_eq!(resolved.selection.region.as_deref(), Some("Andir"));
        assert_eq!(resolved.selection.sub_region.as_deref(), Some("Ciroyom"));
        assert_eq!(resolved.selection.block.as_deref(), Some("3"));
    }

    #[test]
    fn test_records_format_unparsable_tax_as_zero() {
        let service = DashboardService::default();
        let table = district_table();
        let view = service.records(
            &table,
            RecordsQuery {
                selection: FilterSelection {
                    region: Some("Andir".to_string()),
                    sub_region: Some("Ciroyom".to_string()),
                    block: Some("3".to_string()),
                },
            },
        );

        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].tax_principal_formatted, "Rp. 3.500.000");
        assert_eq!(view.rows[1].tax_principal_formatted, "Rp. 0");
        assert_eq!(view.tax_principal_total, "Rp. 3.500.000");
    }

    #[test]
    fn test_dashboard_is_repeatable() {
        let service = DashboardService::default();
        let table = district_table();
        let first = service.build_dashboard(&table, DashboardQuery { selection: select("Andir", "Ciroyom") });
        let second = service.build_dashboard(&table, DashboardQuery { selection: select("Andir", "Ciroyom") });
        assert_eq!(first, second);
    }
}
