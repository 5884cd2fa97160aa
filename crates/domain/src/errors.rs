//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::table::TableKind;

/// Main error type for AutoOptix
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum AutoOptixError {
    /// A logical field required by a computation has no matching header.
    #[error("{table} table is missing required column '{field}'")]
    MissingColumn { table: TableKind, field: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AutoOptixError {
    /// Shorthand for [`AutoOptixError::MissingColumn`].
    pub fn missing_column(table: TableKind, field: impl Into<String>) -> Self {
        Self::MissingColumn { table, field: field.into() }
    }

    /// Configuration errors abort a run before any row is processed.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingColumn { .. } | Self::Config(_))
    }

    /// Stable label suitable for structured logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MissingColumn { .. } => "missing_column",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Spreadsheet(_) => "spreadsheet",
            Self::Serialization(_) => "serialization",
            Self::InvalidInput(_) => "invalid_input",
            Self::Internal(_) => "internal",
        }
    }
}

impl From<std::io::Error> for AutoOptixError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AutoOptixError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for AutoOptix operations
pub type Result<T> = std::result::Result<T, AutoOptixError>;
