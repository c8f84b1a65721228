use super::field::{CategoryField, MeasureField};

/// Raw values that load as "no value", in addition to the empty string
const NA_MARKERS: &[&str] = &[
    "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "null", "NULL", "None", "#N/A", "<NA>",
];

pub fn is_na_marker(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || NA_MARKERS.contains(&trimmed)
}

/// Categorical cell: `None` for missing values, otherwise the text as written
pub fn parse_category(raw: &str) -> Option<String> {
    if is_na_marker(raw) {
        None
    } else {
        Some(raw.to_string())
    }
}

/// A cell of a numeric column. Unparsable text is kept rather than rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn parse(raw: &str) -> Self {
        if is_na_marker(raw) {
            return CellValue::Null;
        }
        match raw.trim().parse::<f64>() {
            Ok(number) => CellValue::Number(number),
            Err(_) => CellValue::Text(raw.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Contribution to a sum; nulls and text count as zero
    pub fn summable(&self) -> f64 {
        self.as_number().filter(|n| n.is_finite()).unwrap_or(0.0)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<Option<f64>> for CellValue {
    fn from(value: Option<f64>) -> Self {
        value.map(CellValue::Number).unwrap_or(CellValue::Null)
    }
}

/// One row of the vehicle tax extract
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub region: Option<String>,
    pub sub_region: Option<String>,
    pub block: Option<String>,
    pub vehicle_count: CellValue,
    pub tax_principal: CellValue,
    /// Values of the table's extra columns, in the table's header order
    pub extra: Vec<Option<String>>,
}

impl Record {
    pub fn new(
        region: Option<&str>,
        sub_region: Option<&str>,
        block: Option<&str>,
        vehicle_count: impl Into<CellValue>,
        tax_principal: impl Into<CellValue>,
    ) -> Self {
        Self {
            region: region.map(str::to_string),
            sub_region: sub_region.map(str::to_string),
            block: block.map(str::to_string),
            vehicle_count: vehicle_count.into(),
            tax_principal: tax_principal.into(),
            extra: Vec::new(),
        }
    }

    pub fn category(&self, field: CategoryField) -> Option<&str> {
        match field {
            CategoryField::Region => self.region.as_deref(),
            CategoryField::SubRegion => self.sub_region.as_deref(),
            CategoryField::Block => self.block.as_deref(),
        }
    }

    pub fn measure(&self, field: MeasureField) -> &CellValue {
        match field {
            MeasureField::VehicleCount => &self.vehicle_count,
            MeasureField::TaxPrincipal => &self.tax_principal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_parsing() {
        assert_eq!(CellValue::parse("1500"), CellValue::Number(1500.0));
        assert_eq!(CellValue::parse(" 2.5 "), CellValue::Number(2.5));
        assert_eq!(CellValue::parse(""), CellValue::Null);
        assert_eq!(CellValue::parse("NaN"), CellValue::Null);
        assert_eq!(CellValue::parse("N/A"), CellValue::Null);
        assert_eq!(CellValue::parse("abc"), CellValue::Text("abc".to_string()));
    }

    #[test]
    fn test_summable_treats_non_numbers_as_zero() {
        assert_eq!(CellValue::Number(3.0).summable(), 3.0);
        assert_eq!(CellValue::Null.summable(), 0.0);
        assert_eq!(CellValue::Text("x".to_string()).summable(), 0.0);
        assert_eq!(CellValue::Number(f64::INFINITY).summable(), 0.0);
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("Cibeunying"), Some("Cibeunying".to_string()));
        assert_eq!(parse_category("  "), None);
        assert_eq!(parse_category("NULL"), None);
    }

    #[test]
    fn test_record_accessors() {
        let record = Record::new(Some("A"), Some("X"), None, 2.0, None::<f64>);
        assert_eq!(record.category(CategoryField::Region), Some("A"));
        assert_eq!(record.category(CategoryField::Block), None);
        assert_eq!(record.measure(MeasureField::VehicleCount), &CellValue::Number(2.0));
        assert!(record.measure(MeasureField::TaxPrincipal).is_null());
    }
}
