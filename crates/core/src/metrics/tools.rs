//! Auxiliary tooling recommendations

use autooptix_domain::constants::{
    FLR_PERCENT_THRESHOLD, P1_P2_RATE_THRESHOLD, TIER_L1_5, TIER_L2, TOOL_FLR, TOOL_P1_P2,
    TOOL_QUALITY_AUDIT, TOOL_TRIAGING, TRIAGE_TICKETS_PER_FTE, TRIAGING_EFFORT_THRESHOLD,
};
use autooptix_domain::{
    normalize_value, safe_divide, value_is, AutoOptixError, EnrichedTable, Result, TableKind,
    ToolIndicators, ToolRecommendation,
};
use tracing::info;

use super::engine::count_months;
use crate::columns::ColumnResolver;

const PRIORITY: &[&str] = &["Priority"];

/// Evaluate the three tooling thresholds
///
/// The ticket-quality audit tool is always recommended, after any
/// threshold-driven tools.
///
/// # Errors
/// Returns `AutoOptixError::MissingColumn` when the table has no priority
/// column.
pub fn recommend(enriched: &EnrichedTable) -> Result<ToolRecommendation> {
    let priority_col = ColumnResolver::extended()
        .resolve(&enriched.source_headers, PRIORITY)
        .ok_or_else(|| AutoOptixError::missing_column(TableKind::Enriched, "priority"))?;

    let num_months = count_months(enriched);
    let months = num_months as f64;
    let records = &enriched.records;

    let p1_p2_count = records
        .iter()
        .filter(|r| {
            matches!(normalize_value(&r.field(priority_col).to_text()).as_deref(), Some("p1" | "p2"))
        })
        .count();
    let l1_5_count = records.iter().filter(|r| value_is(&r.attributes.tier, TIER_L1_5)).count();
    let l2_count = records.iter().filter(|r| value_is(&r.attributes.tier, TIER_L2)).count();

    let l1_5_per_month = safe_divide(l1_5_count as f64, months, 0.0);
    let all_per_month = safe_divide(records.len() as f64, months, 0.0);
    let l2_per_month = safe_divide(l2_count as f64, months, 0.0);

    let indicators = ToolIndicators {
        num_months,
        total_tickets: records.len(),
        p1_p2_count,
        l1_5_count,
        l2_count,
        p1_p2_rate: safe_divide(p1_p2_count as f64, months, 0.0),
        flr_percent: safe_divide(l1_5_per_month, all_per_month, 0.0) * 100.0,
        triaging_effort: safe_divide(l2_per_month, TRIAGE_TICKETS_PER_FTE, 0.0),
    };

    let p1_p2_met = indicators.p1_p2_rate >= P1_P2_RATE_THRESHOLD;
    let flr_met = indicators.flr_percent < FLR_PERCENT_THRESHOLD;
    let triaging_met = indicators.triaging_effort > TRIAGING_EFFORT_THRESHOLD;

    let mut tools = Vec::new();
    if p1_p2_met {
        tools.push(TOOL_P1_P2.to_string());
    }
    if flr_met {
        tools.push(TOOL_FLR.to_string());
    }
    if triaging_met {
        tools.push(TOOL_TRIAGING.to_string());
    }
    tools.push(TOOL_QUALITY_AUDIT.to_string());

    info!(
        p1_p2_rate = indicators.p1_p2_rate,
        flr_percent = indicators.flr_percent,
        triaging_effort = indicators.triaging_effort,
        recommended = tools.len(),
        "Tool recommendations evaluated"
    );

    Ok(ToolRecommendation { indicators, p1_p2_met, flr_met, triaging_met, tools })
}
