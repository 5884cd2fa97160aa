//! Lever metrics derived from an enriched ticket table

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_label_conversions;
use crate::utils::numeric::round_to;

/// One of the four optimization strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Lever {
    Elimination,
    AutomationStandard,
    AutomationAgentic,
    LeftShift,
}

impl_label_conversions!(Lever {
    Elimination => "Elimination",
    AutomationStandard => "Automation",
    AutomationAgentic => "Agentic AI",
    LeftShift => "Left Shift",
});

/// Aggregate for one lever
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct LeverSnapshot {
    /// Distinct use-case values among qualifying rows
    pub usecases: usize,
    /// Qualifying rows over the whole table
    pub ticket_count: usize,
    /// Qualifying rows per month
    pub volume: f64,
    /// `volume / 140`
    pub fte: f64,
}

/// Full metrics pass over one enriched table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct MetricsSnapshot {
    /// Distinct non-empty closed-month values, at least 1
    pub num_months: usize,
    pub total_rows: usize,
    pub total_l1_5: usize,
    pub total_l2: usize,
    pub l1_5_per_month: f64,
    pub elimination: LeverSnapshot,
    pub automation_standard: LeverSnapshot,
    pub automation_agentic: LeverSnapshot,
    pub left_shift: LeverSnapshot,
}

impl MetricsSnapshot {
    pub fn lever(&self, lever: Lever) -> &LeverSnapshot {
        match lever {
            Lever::Elimination => &self.elimination,
            Lever::AutomationStandard => &self.automation_standard,
            Lever::AutomationAgentic => &self.automation_agentic,
            Lever::LeftShift => &self.left_shift,
        }
    }

    /// Dashboard rows, rounded to two decimals
    pub fn summary_rows(&self) -> Vec<LeverSummaryRow> {
        Lever::ALL
            .iter()
            .map(|lever| {
                let snap = self.lever(*lever);
                LeverSummaryRow {
                    lever: lever.to_string(),
                    usecases: snap.usecases,
                    volume: round_to(snap.volume, 2),
                    fte: round_to(snap.fte, 2),
                }
            })
            .collect()
    }
}

/// Presentation row of the optimization summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct LeverSummaryRow {
    #[serde(rename = "Lever")]
    pub lever: String,
    #[serde(rename = "# of UseCases")]
    pub usecases: usize,
    #[serde(rename = "Volume")]
    pub volume: f64,
    #[serde(rename = "FTE")]
    pub fte: f64,
}
