//! # AutoOptix Domain
//!
//! Business domain types and models for AutoOptix.
//!
//! This crate contains:
//! - Table, enrichment, metrics and projection types
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other AutoOptix crates
//! - No I/O
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::{normalize_value, round_to, safe_divide, value_is};
