//! Auxiliary tooling recommendations

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/// Raw figures behind each tooling threshold
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ToolIndicators {
    pub num_months: usize,
    pub total_tickets: usize,
    pub p1_p2_count: usize,
    pub l1_5_count: usize,
    pub l2_count: usize,
    /// P1/P2 tickets per month
    pub p1_p2_rate: f64,
    /// L1.5 share of all tickets, as a percentage
    pub flr_percent: f64,
    /// L2 tickets per month / 1300
    pub triaging_effort: f64,
}

/// Recommendation list plus the conditions that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ToolRecommendation {
    pub indicators: ToolIndicators,
    pub p1_p2_met: bool,
    pub flr_met: bool,
    pub triaging_met: bool,
    /// Ordered tool names; the quality-audit tool is always last
    pub tools: Vec<String>,
}

impl ToolRecommendation {
    pub fn contains(&self, tool: &str) -> bool {
        self.tools.iter().any(|t| t == tool)
    }
}
