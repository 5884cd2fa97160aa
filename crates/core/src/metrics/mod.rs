//! Derived metrics over an enriched ticket table
//!
//! Everything here is a pure function of its inputs: rerunning on the same
//! enriched table yields identical results.

pub mod engine;
pub mod resource_load;
pub mod tools;
pub mod utilization;

pub use engine::{compute_metrics, count_months};
pub use resource_load::{adjust_for_non_ticketed, baseline_load, grade_table, grade_value, project};
pub use tools::recommend;
pub use utilization::normalize;
