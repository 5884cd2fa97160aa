//! Workbook-backed lookup catalogue
//!
//! The catalogue file is re-read on every `load_catalogue` call, so edits
//! between runs are picked up without restarting.

use std::path::{Path, PathBuf};

use autooptix_core::LookupCatalogueSource;
use autooptix_domain::{AutoOptixError, LookupConfig, Result, Table};

use crate::spreadsheet::{read_table, SheetSelector};

/// Lookup catalogue stored in a spreadsheet file
#[derive(Debug, Clone)]
pub struct FileCatalogue {
    path: PathBuf,
    sheet: SheetSelector,
}

impl FileCatalogue {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), sheet: SheetSelector::First }
    }

    pub fn from_config(config: &LookupConfig) -> Self {
        Self {
            path: config.path.clone(),
            sheet: SheetSelector::from_option(config.sheet.as_deref()),
        }
    }

    #[must_use]
    pub fn with_sheet(mut self, sheet: SheetSelector) -> Self {
        self.sheet = sheet;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LookupCatalogueSource for FileCatalogue {
    /// # Errors
    /// A missing file is a configuration error; decoding failures surface
    /// as `Spreadsheet` errors.
    fn load_catalogue(&self) -> Result<Table> {
        if !self.path.is_file() {
            return Err(AutoOptixError::Config(format!(
                "Lookup catalogue not found: {}",
                self.path.display()
            )));
        }
        read_table(&self.path, &self.sheet)
    }

    fn describe(&self) -> String {
        format!("{} [{}]", self.path.display(), self.sheet)
    }
}
