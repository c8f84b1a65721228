//! # CSV Table Repository
//!
//! Reads the vehicle tax extract from a delimited file.
//!
//! ## File Format
//!
//! ```text
//! KECAMATAN,KELURAHAN,RT,JUMLAH_KENDARAAN,POKOK_PKB,...
//! Coblong,Dago,1,12,4500000,...
//! ```
//!
//! Only the header is validated: the five required columns must be present
//! (under their configured names). Rows are never rejected. Empty cells and
//! common "not available" markers load as missing values, short rows are padded
//! with missing values, and any other columns are carried along untouched.

use std::io::Read;

use ::csv::{ReaderBuilder, StringRecord};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::connection::CsvConnection;
use crate::domain::models::record::{parse_category, CellValue, Record};
use crate::domain::models::Table;
use crate::storage::error::{LoadError, SchemaError};
use crate::storage::traits::TableStorage;

/// Header names of the required columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub region: String,
    pub sub_region: String,
    pub block: String,
    pub vehicle_count: String,
    pub tax_principal: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            region: "KECAMATAN".to_string(),
            sub_region: "KELURAHAN".to_string(),
            block: "RT".to_string(),
            vehicle_count: "JUMLAH_KENDARAAN".to_string(),
            tax_principal: "POKOK_PKB".to_string(),
        }
    }
}

impl ColumnNames {
    /// All required names in schema order
    pub fn required(&self) -> [&str; 5] {
        [
            &self.region,
            &self.sub_region,
            &self.block,
            &self.vehicle_count,
            &self.tax_principal,
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CsvLoadOptions {
    pub columns: ColumnNames,
    pub delimiter: u8,
    pub case_insensitive_headers: bool,
}

impl Default for CsvLoadOptions {
    fn default() -> Self {
        Self {
            columns: ColumnNames::default(),
            delimiter: b',',
            case_insensitive_headers: false,
        }
    }
}

/// Positions of the required columns within a header row
#[derive(Debug)]
struct HeaderLayout {
    region: usize,
    sub_region: usize,
    block: usize,
    vehicle_count: usize,
    tax_principal: usize,
    extra: Vec<(usize, String)>,
}

impl HeaderLayout {
    fn resolve(headers: &StringRecord, options: &CsvLoadOptions) -> Result<Self, SchemaError> {
        let names: Vec<&str> = headers.iter().map(str::trim).collect();
        let find = |wanted: &str| {
            names.iter().position(|name| {
                if options.case_insensitive_headers {
                    name.eq_ignore_ascii_case(wanted)
                } else {
                    *name == wanted
                }
            })
        };

        let required = options.columns.required();
        let [region, sub_region, block, vehicle_count, tax_principal] = match required.map(find) {
            [Some(region), Some(sub_region), Some(block), Some(vehicle_count), Some(tax_principal)] => {
                [region, sub_region, block, vehicle_count, tax_principal]
            }
            _ => {
                let missing = required
                    .iter()
                    .filter(|name| find(**name).is_none())
                    .map(|name| name.to_string())
                    .collect();
                return Err(SchemaError { missing });
            }
        };
        let used = [region, sub_region, block, vehicle_count, tax_principal];

        let extra = names
            .iter()
            .enumerate()
            .filter(|(index, _)| !used.contains(index))
            .map(|(index, name)| (index, name.to_string()))
            .collect();

        Ok(Self {
            region,
            sub_region,
            block,
            vehicle_count,
            tax_principal,
            extra,
        })
    }

    fn build(&self, row: &StringRecord) -> Record {
        let cell = |index: usize| row.get(index).unwrap_or("");
        Record {
            region: parse_category(cell(self.region)),
            sub_region: parse_category(cell(self.sub_region)),
            block: parse_category(cell(self.block)),
            vehicle_count: CellValue::parse(cell(self.vehicle_count)),
            tax_principal: CellValue::parse(cell(self.tax_principal)),
            extra: self
                .extra
                .iter()
                .map(|(index, _)| parse_category(cell(*index)))
                .collect(),
        }
    }

    fn extra_names(&self) -> Vec<String> {
        self.extra.iter().map(|(_, name)| name.clone()).collect()
    }
}

/// CSV-backed table source
#[derive(Debug, Clone)]
pub struct CsvTableRepository {
    connection: CsvConnection,
    options: CsvLoadOptions,
}

impl CsvTableRepository {
    pub fn new(connection: CsvConnection, options: CsvLoadOptions) -> Self {
        Self { connection, options }
    }

    /// Parse a table from any reader using this repository's options
    pub fn read_table<R: Read>(&self, reader: R) -> Result<Table, LoadError> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(self.options.delimiter)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let layout = HeaderLayout::resolve(&headers, &self.options)?;
        debug!("Resolved header layout: {:?}", layout);

        let mut records = Vec::new();
        for result in csv_reader.records() {
            let row = result?;
            records.push(layout.build(&row));
        }

        let extra_columns = layout.extra_names();
        info!(
            rows = records.len(),
            extra_columns = ?extra_columns,
            "Loaded vehicle tax table"
        );
        Ok(Table::new(extra_columns, records))
    }

    /// Load the configured data file
    pub fn load(&self) -> Result<Table, LoadError> {
        let reader = self.connection.open()?;
        self.read_table(reader)
    }
}

#[async_trait]
impl TableStorage for CsvTableRepository {
    async fn load_table(&self) -> Result<Table, LoadError> {
        self.load()
    }

    fn describe(&self) -> String {
        format!("csv:{}", self.connection.data_path().display())
    }
}
