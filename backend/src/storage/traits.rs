//! # Storage Traits
//!
//! Abstraction over where the table comes from, so the domain and the server
//! start-up code do not depend on the CSV reader.

use async_trait::async_trait;

use super::error::LoadError;
use crate::domain::models::Table;

/// A source the dashboard table can be loaded from
#[async_trait]
pub trait TableStorage: Send + Sync {
    /// Read the whole source into memory, validating the required columns
    async fn load_table(&self) -> Result<Table, LoadError>;

    /// Human-readable description of the source for log lines
    fn describe(&self) -> String;
}
