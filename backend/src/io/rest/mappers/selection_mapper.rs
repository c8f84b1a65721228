//! backend/src/io/rest/mappers/selection_mapper.rs

use crate::domain::models::{
    CategoryField, FilterSelection as DomainSelection, LevelOptions, MeasureField, ResolvedSelection,
};
use crate::domain::DisplayLabels;
use crate::io::rest::error::ApiError;
use shared::{FilterLevel, FilterLevelState, FilterSelection as SharedSelection, FilterStateResponse, MeasureKind};

/// Converts selections and levels between the shared DTOs and the domain.
pub struct SelectionMapper;

impl SelectionMapper {
    pub fn to_domain(dto: SharedSelection) -> DomainSelection {
        DomainSelection {
            region: dto.region,
            sub_region: dto.sub_region,
            block: dto.block,
        }
    }

    pub fn to_dto(domain: DomainSelection) -> SharedSelection {
        SharedSelection {
            region: domain.region,
            sub_region: domain.sub_region,
            block: domain.block,
        }
    }

    pub fn level_to_domain(level: FilterLevel) -> CategoryField {
        match level {
            FilterLevel::Region => CategoryField::Region,
            FilterLevel::SubRegion => CategoryField::SubRegion,
            FilterLevel::Block => CategoryField::Block,
        }
    }

    pub fn level_to_dto(field: CategoryField) -> FilterLevel {
        match field {
            CategoryField::Region => FilterLevel::Region,
            CategoryField::SubRegion => FilterLevel::SubRegion,
            CategoryField::Block => FilterLevel::Block,
        }
    }

    pub fn measure_to_domain(measure: MeasureKind) -> MeasureField {
        match measure {
            MeasureKind::VehicleCount => MeasureField::VehicleCount,
            MeasureKind::TaxPrincipal => MeasureField::TaxPrincipal,
        }
    }

    pub fn measure_to_dto(measure: MeasureField) -> MeasureKind {
        match measure {
            MeasureField::VehicleCount => MeasureKind::VehicleCount,
            MeasureField::TaxPrincipal => MeasureKind::TaxPrincipal,
        }
    }

    /// Parse a level path segment such as `sub_region`
    pub fn parse_level(raw: &str) -> Result<CategoryField, ApiError> {
        CategoryField::parse(raw).ok_or_else(|| ApiError::UnknownLevel(raw.to_string()))
    }

    pub fn parse_measure(raw: &str) -> Result<MeasureField, ApiError> {
        MeasureField::parse(raw).ok_or_else(|| ApiError::UnknownMeasure(raw.to_string()))
    }

    pub fn to_level_state(level: LevelOptions, labels: &DisplayLabels) -> FilterLevelState {
        FilterLevelState {
            level: Self::level_to_dto(level.field),
            label: labels.level(level.field).to_string(),
            options: level.options,
            selected: level.selected,
            adjusted: level.adjusted,
        }
    }

    pub fn to_filter_state_dto(resolved: ResolvedSelection, labels: &DisplayLabels) -> FilterStateResponse {
        FilterStateResponse {
            selection: Self::to_dto(resolved.selection),
            levels: resolved
                .levels
                .into_iter()
                .map(|level| Self::to_level_state(level, labels))
                .collect(),
        }
    }
}
