mod clean;
mod table;

pub use clean::{CleanReport, ColumnOutcome};
pub use table::{DataTable, DatasetError};
