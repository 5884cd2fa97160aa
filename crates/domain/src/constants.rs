//! Application constants
//!
//! Centralized location for the business constants shared by the enrichment
//! and metrics engines.

// Capacity model
/// Tickets one full-time resource handles per month.
pub const TICKETS_PER_FTE_MONTH: f64 = 140.0;
/// Monthly L2 ticket volume that justifies one FTE of triaging effort.
pub const TRIAGE_TICKETS_PER_FTE: f64 = 1300.0;
/// Share of non-ticketed work already absorbed by the baseline load.
pub const NON_TICKETED_BASELINE_PCT: f64 = 15.0;
/// Share of automation benefits realised in the second half of year one.
pub const PARTIAL_AUTOMATION_SHARE: f64 = 0.5;

// Keyword matching
/// Minimum score a candidate keyword must reach to be accepted.
pub const MATCH_ACCEPT_THRESHOLD: f64 = 0.50;
pub const SUBSTRING_MATCH_SCORE: f64 = 1.0;
pub const FULL_TOKEN_MATCH_SCORE: f64 = 0.85;
pub const STRONG_RATIO_FLOOR: f64 = 0.60;
pub const WEAK_RATIO_FLOOR: f64 = 0.33;

/// Tokens ignored when comparing keyword tokens against a description.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "is", "are", "was", "were", "be", "been", "being", "and", "or", "of", "to",
    "for", "in", "on", "at", "by", "with", "from", "not", "no", "can", "could", "should", "would",
    "user", "request", "issue",
];

/// Number of match decisions retained in the run log.
pub const DEFAULT_MATCH_SAMPLE_SIZE: usize = 10;

// Enrichment defaults
pub const UNMATCHED_USE_CASE: &str = "Others";
pub const UNKNOWN_ATTRIBUTE: &str = "Unknown";

// Normalized attribute values
pub const FEASIBLE: &str = "feasible";
pub const TIER_L1_5: &str = "l1.5";
pub const TIER_L2: &str = "l2";
pub const APPROACH_STANDARD: &str = "standard";
pub const APPROACH_STANDARD_OR_AGENTIC: &str = "standard/agentic ai";
pub const APPROACH_AGENTIC: &str = "agentic ai";

// Enriched table columns
pub const COL_MATCHED_KEYWORD: &str = "Matched_Keyword";
pub const COL_MATCH_SCORE: &str = "Match_Score";
pub const COL_USE_CASE: &str = "UseCase";
pub const COL_AUTOMATION_FEASIBILITY: &str = "Automation_Feasibility";
pub const COL_AUTOMATION_APPROACH: &str = "Automation_Approach";
pub const COL_LEFT_SHIFT_FEASIBILITY: &str = "Left_Shift_Feasibility";
pub const COL_ELIMINATION_FEASIBILITY: &str = "Elimination_Feasibility";
pub const COL_TIER: &str = "L1_L2";

/// Columns appended to every enriched row, in output order.
pub const ENRICHMENT_COLUMNS: [&str; 8] = [
    COL_MATCHED_KEYWORD,
    COL_MATCH_SCORE,
    COL_USE_CASE,
    COL_AUTOMATION_FEASIBILITY,
    COL_AUTOMATION_APPROACH,
    COL_LEFT_SHIFT_FEASIBILITY,
    COL_ELIMINATION_FEASIBILITY,
    COL_TIER,
];

// Tool recommender
pub const P1_P2_RATE_THRESHOLD: f64 = 10.0;
pub const FLR_PERCENT_THRESHOLD: f64 = 30.0;
pub const TRIAGING_EFFORT_THRESHOLD: f64 = 1.0;
pub const TOOL_P1_P2: &str = "CRTSIT Assist";
pub const TOOL_FLR: &str = "SOP Genius Recommended";
pub const TOOL_TRIAGING: &str = "Auto Ticket Triaging";
pub const TOOL_QUALITY_AUDIT: &str = "Ticket Quality Audit Tool";

// Grade table
/// Months covered by the grade table; each horizon spans six of them.
pub const GRADE_TABLE_MONTHS: usize = 18;
pub const MONTHS_PER_HORIZON: usize = 6;
