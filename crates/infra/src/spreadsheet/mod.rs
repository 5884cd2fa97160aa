//! Workbook loading
//!
//! Decodes xlsx, xls, xlsb and ods workbooks into in-memory tables.

mod reader;

pub use reader::{cell_from_data, read_table, table_from_range, SheetSelector};
