//! Port interfaces for enrichment

use autooptix_domain::{Result, Table};

/// Supplies the raw lookup catalogue sheet at the start of a run
///
/// Implementations must fail with a configuration error when the catalogue
/// is unavailable; enrichment never proceeds without one.
pub trait LookupCatalogueSource: Send + Sync {
    /// Load the catalogue as a fully materialised table
    fn load_catalogue(&self) -> Result<Table>;

    /// Human-readable origin, used in log events
    fn describe(&self) -> String {
        "lookup catalogue".to_string()
    }
}
