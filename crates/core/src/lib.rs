//! # AutoOptix Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Column resolution and keyword matching
//! - The enrichment engine and its catalogue port
//! - Metrics, resource-load projection, utilization and tool recommendation
//! - The analysis service that runs one full pass
//!
//! ## Architecture Principles
//! - Only depends on `autooptix-domain`
//! - No file, spreadsheet, or platform code
//! - External data arrives through traits
//! - Every engine is a pure function over immutable inputs

pub mod columns;
pub mod enrichment;
pub mod matching;
pub mod metrics;
pub mod non_ticketed;
pub mod service;

// Re-export specific items to avoid ambiguity
pub use columns::{ColumnResolver, ResolveMode, SynonymRule, SynonymTable};
pub use enrichment::{enrich, read_enriched_table, Catalogue, LookupCatalogueSource};
pub use matching::{find_first_match, score_keyword, KeywordMatch};
pub use metrics::{compute_metrics, normalize, project, recommend};
pub use non_ticketed::validate_allocation;
pub use service::{analyze, AnalysisService};
