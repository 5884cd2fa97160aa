//! Report export
//!
//! JSON summaries for later inspection and CSV sheets for spreadsheet tools.

pub mod csv;
mod exporter;
pub mod json;

pub use exporter::{ExportPaths, ReportExporter};
