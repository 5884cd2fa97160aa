//! Approximate keyword matching

pub mod keyword_matcher;

pub use keyword_matcher::{find_first_match, score_keyword, KeywordMatch};
