use std::fmt;

/// Categorical column of the drill-down hierarchy, in filter order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoryField {
    Region,
    SubRegion,
    Block,
}

impl CategoryField {
    /// Fixed left-to-right filter order
    pub const ALL: [CategoryField; 3] = [
        CategoryField::Region,
        CategoryField::SubRegion,
        CategoryField::Block,
    ];

    pub fn index(self) -> usize {
        match self {
            CategoryField::Region => 0,
            CategoryField::SubRegion => 1,
            CategoryField::Block => 2,
        }
    }

    /// The level immediately to the left, if any
    pub fn previous(self) -> Option<CategoryField> {
        match self {
            CategoryField::Region => None,
            CategoryField::SubRegion => Some(CategoryField::Region),
            CategoryField::Block => Some(CategoryField::SubRegion),
        }
    }

    /// Levels strictly to the right of this one
    pub fn downstream(self) -> &'static [CategoryField] {
        &Self::ALL[self.index() + 1..]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryField::Region => "region",
            CategoryField::SubRegion => "sub_region",
            CategoryField::Block => "block",
        }
    }

    pub fn parse(value: &str) -> Option<CategoryField> {
        match value {
            "region" => Some(CategoryField::Region),
            "sub_region" => Some(CategoryField::SubRegion),
            "block" => Some(CategoryField::Block),
            _ => None,
        }
    }
}

impl fmt::Display for CategoryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric column that gets summed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureField {
    VehicleCount,
    TaxPrincipal,
}

impl MeasureField {
    pub const ALL: [MeasureField; 2] = [MeasureField::VehicleCount, MeasureField::TaxPrincipal];

    pub fn as_str(self) -> &'static str {
        match self {
            MeasureField::VehicleCount => "vehicle_count",
            MeasureField::TaxPrincipal => "tax_principal",
        }
    }

    pub fn parse(value: &str) -> Option<MeasureField> {
        match value {
            "vehicle_count" => Some(MeasureField::VehicleCount),
            "tax_principal" => Some(MeasureField::TaxPrincipal),
            _ => None,
        }
    }

    /// Whether values of this measure are amounts of money
    pub fn is_currency(self) -> bool {
        matches!(self, MeasureField::TaxPrincipal)
    }
}

impl fmt::Display for MeasureField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
