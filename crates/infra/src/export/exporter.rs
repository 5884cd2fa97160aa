use std::path::{Path, PathBuf};

use autooptix_domain::{AnalysisReport, OutputConfig, Result};
use tracing::info;

use super::csv::{grade_sheet, summary_table, write_table};
use super::json::{write_json, SummaryOutput};

pub const SUMMARY_JSON: &str = "summary";
pub const SUMMARY_OUTPUT_JSON: &str = "summary_output";
pub const ENRICHED_CSV: &str = "enriched";
pub const UNMATCHED_CSV: &str = "unmatched";
pub const OPTIMIZATION_SUMMARY_CSV: &str = "optimization_summary";
pub const GRADEWISE_RL_CSV: &str = "gradewise_rl";

/// Files written by one export, in write order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportPaths {
    pub files: Vec<PathBuf>,
}

impl ExportPaths {
    /// Written file whose name starts with `stem`
    pub fn find(&self, stem: &str) -> Option<&Path> {
        self.files
            .iter()
            .find(|p| {
                p.file_stem()
                    .and_then(|s| s.to_str())
                    .is_some_and(|s| s == stem || s.starts_with(&format!("{stem}_2")))
            })
            .map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Writes an [`AnalysisReport`] to disk
#[derive(Debug, Clone)]
pub struct ReportExporter {
    directory: PathBuf,
    write_json: bool,
    write_csv: bool,
    timestamped: bool,
}

impl ReportExporter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self { directory: directory.into(), write_json: true, write_csv: true, timestamped: false }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self {
            directory: config.directory.clone(),
            write_json: config.write_json,
            write_csv: config.write_csv,
            timestamped: false,
        }
    }

    /// Suffix every file stem with the report's `%Y%m%d_%H%M%S` timestamp
    #[must_use]
    pub fn with_timestamp(mut self, timestamped: bool) -> Self {
        self.timestamped = timestamped;
        self
    }

    /// Write every enabled output
    ///
    /// # Errors
    /// Fails when the directory cannot be created or a file cannot be
    /// written. Files written before the failure are left in place.
    pub fn export(&self, report: &AnalysisReport) -> Result<ExportPaths> {
        std::fs::create_dir_all(&self.directory)?;

        let suffix = self
            .timestamped
            .then(|| report.generated_at.format("%Y%m%d_%H%M%S").to_string());
        let path_for = |stem: &str, ext: &str| match &suffix {
            Some(ts) => self.directory.join(format!("{stem}_{ts}.{ext}")),
            None => self.directory.join(format!("{stem}.{ext}")),
        };

        let mut paths = ExportPaths::default();

        if self.write_json {
            let summary = path_for(SUMMARY_JSON, "json");
            write_json(&summary, &report.run_summary())?;
            paths.files.push(summary);

            let output = path_for(SUMMARY_OUTPUT_JSON, "json");
            write_json(&output, &SummaryOutput::from_report(report))?;
            paths.files.push(output);
        }

        if self.write_csv {
            let enrichment = &report.enrichment;
            let sheets = [
                (ENRICHED_CSV, enrichment.enriched.to_table()),
                (UNMATCHED_CSV, enrichment.unmatched.to_table()),
                (OPTIMIZATION_SUMMARY_CSV, summary_table(&report.metrics.summary_rows())),
                (GRADEWISE_RL_CSV, grade_sheet(&report.projection.grade_table)),
            ];
            for (stem, table) in sheets {
                let path = path_for(stem, "csv");
                write_table(&path, &table)?;
                paths.files.push(path);
            }
        }

        info!(
            directory = %self.directory.display(),
            files = paths.len(),
            timestamped = self.timestamped,
            "Report exported"
        );
        Ok(paths)
    }
}
