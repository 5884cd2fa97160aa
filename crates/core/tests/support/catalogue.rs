//! In-memory catalogue sources

use std::sync::atomic::{AtomicUsize, Ordering};

use autooptix_core::LookupCatalogueSource;
use autooptix_domain::{AutoOptixError, Result, Table};

/// Serves a fixed lookup table and counts how often it was loaded.
pub struct MockCatalogueSource {
    table: Table,
    loads: AtomicUsize,
}

impl MockCatalogueSource {
    pub fn new(table: Table) -> Self {
        Self { table, loads: AtomicUsize::new(0) }
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl LookupCatalogueSource for MockCatalogueSource {
    fn load_catalogue(&self) -> Result<Table> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.table.clone())
    }

    fn describe(&self) -> String {
        "in-memory catalogue".to_string()
    }
}

/// Always fails as if the catalogue file were missing.
pub struct MissingCatalogueSource;

impl LookupCatalogueSource for MissingCatalogueSource {
    fn load_catalogue(&self) -> Result<Table> {
        Err(AutoOptixError::Config("lookup.xlsx not found".to_string()))
    }
}
