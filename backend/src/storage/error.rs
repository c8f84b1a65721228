use std::path::PathBuf;

use thiserror::Error;

/// Required columns absent from the source header. Fatal: no dashboard is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("required columns not found in data: {}", .missing.join(", "))]
pub struct SchemaError {
    /// Configured names of the absent columns, in required order
    pub missing: Vec<String>,
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("data file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

impl LoadError {
    /// The schema problem, if that is why loading failed
    pub fn schema(&self) -> Option<&SchemaError> {
        match self {
            LoadError::Schema(error) => Some(error),
            _ => None,
        }
    }
}
