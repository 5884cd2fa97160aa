//! Lever shares of the L1.5 baseline

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/// One lever's contribution relative to the base divisor
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct UtilizationShare {
    /// Lever FTE divided by the base divisor
    pub value: f64,
    /// Share of the summed values, 0-100
    pub percentage: f64,
}

/// Proportions of elimination, standard automation and agentic automation
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct UtilizationBreakdown {
    /// L1.5 tickets per month / 140, or 1 when that is zero
    pub base_divisor: f64,
    pub elimination: UtilizationShare,
    pub automation_standard: UtilizationShare,
    pub automation_agentic: UtilizationShare,
    /// Sum of the three values
    pub total: f64,
}

impl UtilizationBreakdown {
    /// Shares keyed by their chart label
    pub fn labelled(&self) -> [(&'static str, UtilizationShare); 3] {
        [
            ("Elimination", self.elimination),
            ("Automation Standard", self.automation_standard),
            ("Automation Agentic AI", self.automation_agentic),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labelled_order() {
        let breakdown = UtilizationBreakdown {
            base_divisor: 1.0,
            elimination: UtilizationShare { value: 1.0, percentage: 50.0 },
            automation_standard: UtilizationShare { value: 0.5, percentage: 25.0 },
            automation_agentic: UtilizationShare { value: 0.5, percentage: 25.0 },
            total: 2.0,
        };
        let labels: Vec<&str> = breakdown.labelled().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["Elimination", "Automation Standard", "Automation Agentic AI"]);
    }
}
