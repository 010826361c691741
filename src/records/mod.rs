//! Tabular record I/O: CSV source and sink.

mod loader;
mod writer;

pub use loader::{load_records, Dataset, LAT_COLUMN, LON_COLUMN};
pub use writer::write_records;
