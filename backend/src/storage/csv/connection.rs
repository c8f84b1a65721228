use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::storage::error::LoadError;

/// CsvConnection resolves and opens the data file of the dashboard
#[derive(Debug, Clone)]
pub struct CsvConnection {
    data_path: PathBuf,
}

impl CsvConnection {
    pub fn new<P: AsRef<Path>>(data_path: P) -> Self {
        Self {
            data_path: data_path.as_ref().to_path_buf(),
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn exists(&self) -> bool {
        self.data_path.is_file()
    }

    /// Open the data file for buffered reading
    pub fn open(&self) -> Result<BufReader<File>, LoadError> {
        if !self.exists() {
            return Err(LoadError::NotFound(self.data_path.clone()));
        }

        let file = File::open(&self.data_path).map_err(|source| LoadError::Io {
            path: self.data_path.clone(),
            source,
        })?;
        info!("Opened data file {}", self.data_path.display());
        Ok(BufReader::new(file))
    }
}
