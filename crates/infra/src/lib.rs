//! # AutoOptix Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - Spreadsheet loading (xlsx, xls, ods)
//! - The file-backed lookup catalogue
//! - Configuration loading from environment and files
//! - Tracing subscriber setup
//! - Report export (JSON summaries and CSV sheets)
//!
//! ## Architecture
//! - Implements traits defined in `autooptix-core`
//! - Contains all "impure" code (file system, workbook decoding)

pub mod config;
pub mod errors;
pub mod export;
pub mod logging;
pub mod lookup;
pub mod spreadsheet;

// Re-export commonly used items
pub use errors::InfraError;
pub use export::{ExportPaths, ReportExporter};
pub use lookup::FileCatalogue;
pub use spreadsheet::{read_table, SheetSelector};
