//! # Configuration
//!
//! Settings are read from a YAML file and then overridden by environment
//! variables. Every field has a default, so a missing file or an empty file
//! gives a working setup that reads `data_kendaraan.csv` from the working
//! directory.
//!
//! ```yaml
//! data_path: data/data_kendaraan.csv
//! bind_address: 127.0.0.1:3000
//! allowed_origin: http://localhost:8080
//! static_dir: frontend/dist
//! title: Dashboard Analisis PKB
//! columns:
//!   region: KECAMATAN
//!   sub_region: KELURAHAN
//!   block: RT
//!   vehicle_count: JUMLAH_KENDARAAN
//!   tax_principal: POKOK_PKB
//! case_insensitive_headers: false
//! delimiter: ","
//! currency:
//!   prefix: "Rp. "
//!   thousands_separator: "."
//! ```

use std::collections::HashSet;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::{CurrencyFormat, DashboardSettings, DisplayLabels};
use crate::storage::csv::{ColumnNames, CsvLoadOptions};

/// Path of the YAML file
pub const CONFIG_PATH_ENV: &str = "PKB_DASHBOARD_CONFIG";
/// Overrides `data_path`
pub const DATA_PATH_ENV: &str = "PKB_DASHBOARD_DATA";
/// Overrides `bind_address`
pub const BIND_ADDRESS_ENV: &str = "PKB_DASHBOARD_ADDR";

const DEFAULT_CONFIG_FILE: &str = "pkb-dashboard.yaml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid bind address '{0}'")]
    BindAddress(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// CSV extract to load at start-up
    pub data_path: PathBuf,
    pub bind_address: SocketAddr,
    /// Origin the browser front end is served from
    pub allowed_origin: String,
    /// Pre-built front end assets served for non-API paths
    pub static_dir: Option<PathBuf>,
    pub title: String,
    pub columns: ColumnNames,
    pub case_insensitive_headers: bool,
    pub delimiter: char,
    pub labels: DisplayLabels,
    pub currency: CurrencyFormat,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data_kendaraan.csv"),
            bind_address: SocketAddr::from(([127, 0, 0, 1], 3000)),
            allowed_origin: "http://localhost:8080".to_string(),
            static_dir: None,
            title: DashboardSettings::default().title,
            columns: ColumnNames::default(),
            case_insensitive_headers: false,
            delimiter: ',',
            labels: DisplayLabels::default(),
            currency: CurrencyFormat::default(),
        }
    }
}

impl DashboardConfig {
    /// Load from the file named by `PKB_DASHBOARD_CONFIG` (or the default file
    /// name), apply environment overrides and validate
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let config = Self::from_file_or_default(Path::new(&path))?
            .with_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            warn!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let yaml = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded config from {}", path.display());
        Self::from_yaml_str(&yaml)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Apply environment overrides using `lookup` to read variables
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(DATA_PATH_ENV) {
            self.data_path = PathBuf::from(path);
        }
        if let Some(address) = lookup(BIND_ADDRESS_ENV) {
            self.bind_address = address
                .parse()
                .map_err(|_| ConfigError::BindAddress(address.clone()))?;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.delimiter.is_ascii() {
            return Err(ConfigError::Invalid(format!(
                "delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            )));
        }

        let required = self.columns.required();
        if required.iter().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::Invalid("column names must not be empty".to_string()));
        }
        let distinct: HashSet<String> = required
            .iter()
            .map(|name| {
                if self.case_insensitive_headers {
                    name.to_ascii_lowercase()
                } else {
                    name.to_string()
                }
            })
            .collect();
        if distinct.len() != required.len() {
            return Err(ConfigError::Invalid("column names must be distinct".to_string()));
        }

        if self.allowed_origin.parse::<HeaderValue>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "allowed_origin '{}' is not a valid header value",
                self.allowed_origin
            )));
        }
        Ok(())
    }

    pub fn load_options(&self) -> CsvLoadOptions {
        CsvLoadOptions {
            columns: self.columns.clone(),
            // validate() guarantees an ASCII delimiter
            delimiter: self.delimiter as u8,
            case_insensitive_headers: self.case_insensitive_headers,
        }
    }

    pub fn dashboard_settings(&self) -> DashboardSettings {
        DashboardSettings {
            title: self.title.clone(),
            labels: self.labels.clone(),
            currency: self.currency.clone(),
        }
    }
}
