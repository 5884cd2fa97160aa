//! Results of one full analysis pass

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::types::enrichment::EnrichmentOutcome;
use crate::types::metrics::{LeverSummaryRow, MetricsSnapshot};
use crate::types::resource_load::ResourceProjection;
use crate::types::tools::ToolRecommendation;
use crate::types::utilization::UtilizationBreakdown;

/// Immutable output of `AnalysisService::run`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub enrichment: EnrichmentOutcome,
    pub metrics: MetricsSnapshot,
    pub projection: ResourceProjection,
    pub utilization: UtilizationBreakdown,
    /// `None` when the ticket table has no priority column
    pub tools: Option<ToolRecommendation>,
}

impl AnalysisReport {
    pub fn run_summary(&self) -> RunSummary {
        let log = &self.enrichment.log;
        RunSummary {
            generated_at: self.generated_at,
            total_tickets: log.total_rows,
            matched: log.matched_count,
            unmatched: log.unmatched_count,
            match_rate: format!("{:.1}%", log.match_rate()),
            summary: self.metrics.summary_rows(),
        }
    }
}

/// Headline counts plus the optimization summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct RunSummary {
    pub generated_at: DateTime<Utc>,
    pub total_tickets: usize,
    pub matched: usize,
    pub unmatched: usize,
    /// Formatted as `NN.N%`
    pub match_rate: String,
    pub summary: Vec<LeverSummaryRow>,
}
