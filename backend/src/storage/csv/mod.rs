pub mod connection;
pub mod table_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::CsvConnection;
pub use table_repository::{ColumnNames, CsvLoadOptions, CsvTableRepository};
