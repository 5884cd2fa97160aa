//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the lookup path is not set there, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! Every successfully loaded configuration is validated before it is
//! returned.
//!
//! ## Environment Variables
//! - `AUTOOPTIX_LOOKUP_PATH`: Lookup catalogue workbook (required)
//! - `AUTOOPTIX_LOOKUP_SHEET`: Catalogue sheet name
//! - `AUTOOPTIX_NON_TICKETED_PERCENT`: Non-ticketed effort, 0-100
//! - `AUTOOPTIX_SAMPLE_SIZE`: Match decisions kept in the run log
//! - `AUTOOPTIX_OUTPUT_DIR`: Export directory
//! - `AUTOOPTIX_WRITE_JSON`: Whether JSON summaries are written (true/false)
//! - `AUTOOPTIX_WRITE_CSV`: Whether CSV sheets are written (true/false)
//! - `AUTOOPTIX_LOG_LEVEL`: Default tracing level
//! - `AUTOOPTIX_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./autooptix.json` or `./autooptix.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};

use autooptix_domain::{
    AnalysisConfig, AppConfig, AutoOptixError, LoggingConfig, LookupConfig, OutputConfig, Result,
};

use crate::errors::InfraError;

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variable is missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `AutoOptixError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - A value fails validation
pub fn load() -> Result<AppConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// `AUTOOPTIX_LOOKUP_PATH` must be present; every other variable falls back
/// to its default.
///
/// # Errors
/// Returns `AutoOptixError::Config` if the required variable is missing or
/// a value is invalid.
pub fn load_from_env() -> Result<AppConfig> {
    let lookup_path = env_var("AUTOOPTIX_LOOKUP_PATH")?;
    let lookup_sheet = std::env::var("AUTOOPTIX_LOOKUP_SHEET").ok().filter(|s| !s.is_empty());

    let non_ticketed_percent = std::env::var("AUTOOPTIX_NON_TICKETED_PERCENT")
        .ok()
        .map(|s| {
            s.trim().parse::<f64>().map_err(|e| {
                AutoOptixError::Config(format!("Invalid non-ticketed percentage: {}", e))
            })
        })
        .transpose()?;

    let defaults = AppConfig::default();
    let sample_size = match std::env::var("AUTOOPTIX_SAMPLE_SIZE") {
        Ok(s) => s
            .trim()
            .parse::<usize>()
            .map_err(|e| AutoOptixError::Config(format!("Invalid sample size: {}", e)))?,
        Err(_) => defaults.analysis.sample_size,
    };

    let directory = std::env::var("AUTOOPTIX_OUTPUT_DIR")
        .map(PathBuf::from)
        .unwrap_or(defaults.output.directory);
    let level = std::env::var("AUTOOPTIX_LOG_LEVEL").unwrap_or(defaults.logging.level);

    let config = AppConfig {
        lookup: LookupConfig { path: PathBuf::from(lookup_path), sheet: lookup_sheet },
        analysis: AnalysisConfig { non_ticketed_percent, sample_size },
        output: OutputConfig {
            directory,
            write_json: env_bool("AUTOOPTIX_WRITE_JSON", defaults.output.write_json),
            write_csv: env_bool("AUTOOPTIX_WRITE_CSV", defaults.output.write_csv),
        },
        logging: LoggingConfig { level, json: env_bool("AUTOOPTIX_LOG_JSON", defaults.logging.json) },
    };
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `AutoOptixError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - A value fails validation
pub fn load_from_file(path: Option<PathBuf>) -> Result<AppConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(AutoOptixError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            AutoOptixError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| AutoOptixError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<AppConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| InfraError::from(e).into()),
        "json" => serde_json::from_str(contents)
            .map_err(|e| AutoOptixError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(AutoOptixError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches for config files in the following locations (in order):
/// 1. Current working directory (`./config.{json,toml}`,
///    `./autooptix.{json,toml}`)
/// 2. Parent directories (up to 2 levels)
/// 3. Relative to executable location
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("autooptix.json"),
        dir.join("autooptix.toml"),
        dir.join("../config.json"),
        dir.join("../config.toml"),
        dir.join("../../config.json"),
        dir.join("../../config.toml"),
    ]
}

/// Get required environment variable
///
/// # Errors
/// Returns `AutoOptixError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        AutoOptixError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
