pub mod field;
pub mod record;
pub mod selection;
pub mod summary;
pub mod table;

pub use field::{CategoryField, MeasureField};
pub use record::{CellValue, Record};
pub use selection::{FilterSelection, LevelOptions, ResolvedSelection};
pub use summary::{GroupKey, SummaryRow, SummaryTable};
pub use table::Table;
