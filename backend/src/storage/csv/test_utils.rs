/// Test utilities for CSV-backed tests.
///
/// `TestEnvironment` owns a temporary directory that is removed when it is
/// dropped, even if the test panics.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

/// Header and rows of the three-record example table
pub const SAMPLE_CSV: &str = "\
KECAMATAN,KELURAHAN,RT,JUMLAH_KENDARAAN,POKOK_PKB
A,X,1,2,1000
A,X,2,3,2000
B,Y,1,1,500
";

/// RAII test directory
pub struct TestEnvironment {
    _temp_dir: TempDir,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        Ok(Self {
            _temp_dir: temp_dir,
            base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_path
    }

    /// Path of a file inside the environment (not created)
    pub fn path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    /// Write `contents` to `name` and return its path
    pub fn write_file(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.path(name);
        fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestEnvironment {
    fn drop(&mut self) {
        if std::env::var("PKB_DASHBOARD_DEBUG_TESTS").is_ok() {
            println!("Cleaning up test environment: {:?}", self.base_path);
        }
    }
}
