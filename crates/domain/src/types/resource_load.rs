//! Resource-load projection types
//!
//! Three horizons describe how staffing demand falls as levers mature:
//! H1Y1 (elimination only), H2Y1 (half of automation realised) and H1Y2
//! (all automation realised). Each horizon drives six months of the
//! grade-wise roster.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::constants::{GRADE_TABLE_MONTHS, MONTHS_PER_HORIZON};
use crate::impl_label_conversions;
use crate::types::non_ticketed::NonTicketedNote;

/// Automation-maturity horizon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum Horizon {
    H1Y1,
    H2Y1,
    H1Y2,
}

impl_label_conversions!(Horizon {
    H1Y1 => "H1Y1",
    H2Y1 => "H2Y1",
    H1Y2 => "H1Y2",
});

impl Horizon {
    /// Horizon covering 1-based roster month `month`
    pub fn for_month(month: usize) -> Option<Self> {
        if month == 0 {
            return None;
        }
        Self::ALL.get((month - 1) / MONTHS_PER_HORIZON).copied()
    }
}

/// Near / mid / long-term staffing load
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ResourceLoad {
    #[serde(rename = "H1Y1")]
    pub h1y1: f64,
    #[serde(rename = "H2Y1")]
    pub h2y1: f64,
    #[serde(rename = "H1Y2")]
    pub h1y2: f64,
}

impl ResourceLoad {
    pub fn get(&self, horizon: Horizon) -> f64 {
        match horizon {
            Horizon::H1Y1 => self.h1y1,
            Horizon::H2Y1 => self.h2y1,
            Horizon::H1Y2 => self.h1y2,
        }
    }
}

/// Staffing tier of the grade-wise roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum Grade {
    PatPt,
    PaP,
    A,
    Sa,
    M,
    Sm,
}

impl_label_conversions!(Grade {
    PatPt => "PAT/PT",
    PaP => "PA/P",
    A => "A",
    Sa => "SA",
    M => "M",
    Sm => "SM",
});

/// One roster tier across the eighteen projected months
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct GradeRow {
    pub grade: Grade,
    /// Month M1 at index 0 through M18 at index 17
    pub months: Vec<f64>,
}

/// Six-tier by eighteen-month headcount table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct GradeTable {
    pub rows: Vec<GradeRow>,
}

impl GradeTable {
    /// Column labels `M1` .. `M18`
    pub fn month_labels() -> Vec<String> {
        (1..=GRADE_TABLE_MONTHS).map(|m| format!("M{m}")).collect()
    }

    /// Value for `grade` in 1-based `month`
    pub fn value(&self, grade: Grade, month: usize) -> Option<f64> {
        if month == 0 {
            return None;
        }
        self.rows
            .iter()
            .find(|row| row.grade == grade)
            .and_then(|row| row.months.get(month - 1).copied())
    }
}

/// Result of projecting one metrics snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ResourceProjection {
    /// `L1.5 tickets per month / 140`
    pub base_rl: f64,
    /// Triple before the non-ticketed adjustment
    pub baseline: ResourceLoad,
    /// Triple after the non-ticketed adjustment (equal to `baseline` at or
    /// below the 15% threshold)
    pub load: ResourceLoad,
    pub non_ticketed_pct: Option<f64>,
    /// How `non_ticketed_pct` was applied; `None` when no share was given
    pub note: Option<NonTicketedNote>,
    pub grade_table: GradeTable,
}
