//! JSON summary documents

use std::path::Path;

use autooptix_domain::{
    round_to, AnalysisReport, LeverSnapshot, ResourceProjection, Result, ToolRecommendation,
    UtilizationBreakdown,
};
use serde::Serialize;

/// `[usecases, volume, fte]` as written to the lever arrays
pub type LeverArray = (usize, f64, f64);

/// Metrics, resource load, utilization and tools in one document
#[derive(Debug, Clone, Serialize)]
pub struct SummaryOutput<'a> {
    #[serde(rename = "total_count_ofL1.5")]
    pub total_count_l1_5: usize,
    #[serde(rename = "total_count_ofL2")]
    pub total_count_l2: usize,
    pub num_months: usize,
    pub l1_5_per_month: f64,
    pub elimination_array: LeverArray,
    pub automation_array: LeverArray,
    pub automation_agent_array: LeverArray,
    pub left_shift_array: LeverArray,
    pub resource_load: &'a ResourceProjection,
    pub utilization: &'a UtilizationBreakdown,
    pub tools: Option<&'a ToolRecommendation>,
}

impl<'a> SummaryOutput<'a> {
    pub fn from_report(report: &'a AnalysisReport) -> Self {
        let metrics = &report.metrics;
        Self {
            total_count_l1_5: metrics.total_l1_5,
            total_count_l2: metrics.total_l2,
            num_months: metrics.num_months,
            l1_5_per_month: metrics.l1_5_per_month,
            elimination_array: lever_array(&metrics.elimination),
            automation_array: lever_array(&metrics.automation_standard),
            automation_agent_array: lever_array(&metrics.automation_agentic),
            left_shift_array: lever_array(&metrics.left_shift),
            resource_load: &report.projection,
            utilization: &report.utilization,
            tools: report.tools.as_ref(),
        }
    }
}

fn lever_array(lever: &LeverSnapshot) -> LeverArray {
    (lever.usecases, round_to(lever.volume, 4), round_to(lever.fte, 4))
}

/// Pretty-printed JSON
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let body = serde_json::to_string_pretty(value)?;
    std::fs::write(path, body)?;
    Ok(())
}
