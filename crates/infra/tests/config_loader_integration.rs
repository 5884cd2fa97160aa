//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;
use std::path::PathBuf;

use autooptix_domain::AutoOptixError;
use autooptix_infra::config;
use tempfile::NamedTempFile;

fn write_temp(contents: &str, extension: &str) -> PathBuf {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(contents.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension(extension);
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");
    path
}

#[test]
fn test_load_config_from_json_file() {
    let json_content = r#"{
        "lookup": { "path": "/data/lookup.xlsx", "sheet": "Subgroups" },
        "analysis": { "non_ticketed_percent": 25.0, "sample_size": 20 },
        "output": { "directory": "/tmp/autooptix", "write_json": true, "write_csv": false },
        "logging": { "level": "debug", "json": true }
    }"#;
    let path = write_temp(json_content, "json");

    let result = config::load_from_file(Some(path.clone()));
    assert!(result.is_ok(), "Failed to load config from JSON file: {:?}", result.err());

    let config = result.unwrap();

    // Verify lookup configuration
    assert_eq!(config.lookup.path, PathBuf::from("/data/lookup.xlsx"));
    assert_eq!(config.lookup.sheet.as_deref(), Some("Subgroups"));

    // Verify analysis configuration
    assert_eq!(config.analysis.non_ticketed_percent, Some(25.0));
    assert_eq!(config.analysis.sample_size, 20);

    // Verify output and logging configuration
    assert_eq!(config.output.directory, PathBuf::from("/tmp/autooptix"));
    assert!(!config.output.write_csv);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_from_toml_file() {
    let toml_content = r#"
[lookup]
path = "catalogue.ods"

[analysis]
non_ticketed_percent = 12.5

[output]
directory = "reports"
"#;
    let path = write_temp(toml_content, "toml");

    let config = config::load_from_file(Some(path.clone())).expect("TOML config should load");
    assert_eq!(config.lookup.path, PathBuf::from("catalogue.ods"));
    assert_eq!(config.lookup.sheet, None);
    assert_eq!(config.analysis.non_ticketed_percent, Some(12.5));
    assert_eq!(config.analysis.sample_size, 10);
    assert_eq!(config.output.directory, PathBuf::from("reports"));
    assert!(config.output.write_json);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_empty_file_yields_defaults() {
    let path = write_temp("{}", "json");
    let config = config::load_from_file(Some(path.clone())).expect("empty object is valid");
    assert_eq!(config, autooptix_domain::AppConfig::default());
    std::fs::remove_file(path).ok();
}

#[test]
fn test_invalid_values_are_rejected() {
    let path = write_temp(r#"{ "analysis": { "non_ticketed_percent": -5.0 } }"#, "json");
    let err = config::load_from_file(Some(path.clone())).unwrap_err();
    assert!(matches!(err, AutoOptixError::Config(_)));
    std::fs::remove_file(path).ok();
}

#[test]
fn test_malformed_toml_is_config_error() {
    let path = write_temp("[analysis\nsample_size = ", "toml");
    let err = config::load_from_file(Some(path.clone())).unwrap_err();
    assert!(err.is_configuration());
    std::fs::remove_file(path).ok();
}
