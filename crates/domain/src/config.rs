//! Configuration management

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MATCH_SAMPLE_SIZE;
use crate::errors::{AutoOptixError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub lookup: LookupConfig,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Keyword catalogue location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    pub path: PathBuf,
    /// Sheet name; the first sheet is used when unset
    pub sheet: Option<String>,
}

/// Analysis parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub non_ticketed_percent: Option<f64>,
    /// Match decisions retained in the run log
    pub sample_size: usize,
}

/// Report export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub write_json: bool,
    pub write_csv: bool,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self { path: PathBuf::from("lookup.xlsx"), sheet: None }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { non_ticketed_percent: None, sample_size: DEFAULT_MATCH_SAMPLE_SIZE }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { directory: PathBuf::from("."), write_json: true, write_csv: true }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}

impl AppConfig {
    /// Reject values no run could use
    ///
    /// # Errors
    /// Returns `AutoOptixError::Config` for a non-ticketed percentage outside
    /// 0-100 or a zero sample size.
    pub fn validate(&self) -> Result<()> {
        if let Some(pct) = self.analysis.non_ticketed_percent {
            if !(0.0..=100.0).contains(&pct) {
                return Err(AutoOptixError::Config(format!(
                    "Non-ticketed percentage must be between 0 and 100, got {pct}"
                )));
            }
        }
        if self.analysis.sample_size == 0 {
            return Err(AutoOptixError::Config("Sample size must be at least 1".to_string()));
        }
        Ok(())
    }
}
