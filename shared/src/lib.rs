use serde::{Deserialize, Serialize};
use std::fmt;

/// One level of the administrative drill-down, outermost first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterLevel {
    /// Top-level area (Kecamatan)
    Region,
    /// Second-level area (Kelurahan)
    SubRegion,
    /// Third-level area (RT)
    Block,
}

impl FilterLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterLevel::Region => "region",
            FilterLevel::SubRegion => "sub_region",
            FilterLevel::Block => "block",
        }
    }
}

impl fmt::Display for FilterLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric column that summaries are computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasureKind {
    /// Number of vehicles (Jumlah Kendaraan)
    VehicleCount,
    /// Base tax amount (Pokok PKB)
    TaxPrincipal,
}

impl MeasureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasureKind::VehicleCount => "vehicle_count",
            MeasureKind::TaxPrincipal => "tax_principal",
        }
    }
}

impl fmt::Display for MeasureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Drill-down path chosen by the user. Missing values are filled in by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<String>,
}

/// Request to change one level of the current selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectFilterRequest {
    #[serde(default)]
    pub selection: FilterSelection,
    pub level: FilterLevel,
    pub value: String,
}

/// Selector state for a single level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterLevelState {
    pub level: FilterLevel,
    /// Display label for the selector, e.g. "Kecamatan"
    pub label: String,
    /// Sorted distinct values valid under the levels to the left
    pub options: Vec<String>,
    pub selected: Option<String>,
    /// True when the requested value was missing or invalid and got replaced
    pub adjusted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterStateResponse {
    pub selection: FilterSelection,
    pub levels: Vec<FilterLevelState>,
}

/// A single bar in a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Group key; `None` is the group of rows with no value
    pub category: Option<String>,
    pub value: f64,
    /// Currency rendering for tax series, absent for counts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_value: Option<String>,
}

/// One category/value series ready for a bar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub level: FilterLevel,
    pub measure: MeasureKind,
    pub category_label: String,
    pub value_label: String,
    pub points: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrandTotalResponse {
    pub label: String,
    pub amount: f64,
    pub formatted: String,
}

/// A row of the filtered grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordRow {
    pub region: Option<String>,
    pub sub_region: Option<String>,
    pub block: Option<String>,
    pub vehicle_count: Option<f64>,
    pub tax_principal: Option<f64>,
    pub tax_principal_formatted: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordTableResponse {
    pub selection: FilterSelection,
    pub rows: Vec<RecordRow>,
    pub row_count: usize,
    pub tax_principal_total: String,
}

/// Everything the front end needs to draw the dashboard for one selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub title: String,
    pub grand_total: GrandTotalResponse,
    pub filters: FilterStateResponse,
    pub charts: Vec<ChartSeries>,
    pub records: RecordTableResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: String,
    pub message: String,
    #[serde(default)]
    pub component: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    pub success: bool,
}

/// Body returned with every non-2xx response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_level_serializes_snake_case() {
        let json = serde_json::to_string(&FilterLevel::SubRegion).unwrap();
        assert_eq!(json, "\"sub_region\"");
        let level: FilterLevel = serde_json::from_str("\"block\"").unwrap();
        assert_eq!(level, FilterLevel::Block);
    }

    #[test]
    fn test_selection_skips_empty_levels() {
        let selection = FilterSelection {
            region: Some("A".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&selection).unwrap();
        assert_eq!(json, r#"{"region":"A"}"#);

        let parsed: FilterSelection = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, FilterSelection::default());
    }

    #[test]
    fn test_select_request_defaults_selection() {
        let request: SelectFilterRequest =
            serde_json::from_str(r#"{"level":"region","value":"B"}"#).unwrap();
        assert_eq!(request.selection, FilterSelection::default());
        assert_eq!(request.level, FilterLevel::Region);
        assert_eq!(request.value, "B");
    }
}
