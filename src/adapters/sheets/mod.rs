//! Row source adapters. Implement RowSource for the baby-tracking sheet.

pub mod csv_source;
pub mod memory;
pub mod sheets_api;

pub use csv_source::{CsvLocation, CsvSource};
pub use memory::MemorySource;
pub use sheets_api::{SheetsApiSource, SheetsAuth};
