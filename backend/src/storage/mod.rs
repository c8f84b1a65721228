//! # Storage Module
//!
//! Loads the vehicle tax extract into an in-memory [`Table`](crate::domain::models::Table).
//! The table is read once at start-up; nothing is ever written back.
//!
//! ## Current Implementation
//!
//! - **CSV**: a single delimited file read with the `csv` crate
//! - **Validation**: the five required columns must be present in the header;
//!   individual cells are never rejected

pub mod csv;
pub mod error;
pub mod traits;

pub use self::csv::{ColumnNames, CsvConnection, CsvTableRepository};
pub use error::{LoadError, SchemaError};
pub use traits::TableStorage;
