//! Ticket enrichment against the subgroup keyword catalogue

pub mod catalogue;
pub mod engine;
pub mod ports;
pub mod reader;

pub use catalogue::Catalogue;
pub use engine::enrich;
pub use ports::LookupCatalogueSource;
pub use reader::read_enriched_table;
