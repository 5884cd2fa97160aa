//! Literal and token-overlap keyword matching
//!
//! A keyword matches a description when it appears verbatim (score 1.0) or
//! when enough of its meaningful tokens occur in the description. Catalogue
//! order decides ties: the first keyword that clears the acceptance
//! threshold wins, even if a later keyword would score higher.

use ahash::AHashSet;
use autooptix_domain::constants::{
    FULL_TOKEN_MATCH_SCORE, MATCH_ACCEPT_THRESHOLD, STOP_WORDS, STRONG_RATIO_FLOOR,
    SUBSTRING_MATCH_SCORE, WEAK_RATIO_FLOOR,
};
use lazy_static::lazy_static;

lazy_static! {
    static ref STOP_WORD_SET: AHashSet<&'static str> = STOP_WORDS.iter().copied().collect();
}

/// Accepted match of a description against a keyword list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeywordMatch {
    /// Position of the keyword in the list that was searched
    pub index: usize,
    pub score: f64,
}

/// Score a single keyword against `text`, or `None` when it does not match
///
/// Comparison is case-insensitive. Scores follow fixed tiers:
/// substring containment scores 1.0, full token coverage 0.85, and partial
/// coverage scales with the share of meaningful keyword tokens found.
pub fn score_keyword(text: &str, keyword: &str) -> Option<f64> {
    if text.is_empty() || keyword.is_empty() {
        return None;
    }

    let text_lower = text.to_lowercase();
    let keyword_lower = keyword.to_lowercase();
    if text_lower.contains(&keyword_lower) {
        return Some(SUBSTRING_MATCH_SCORE);
    }

    let text_tokens: AHashSet<&str> = text_lower.split_whitespace().collect();
    let meaningful: Vec<&str> = keyword_lower
        .split_whitespace()
        .filter(|token| !STOP_WORD_SET.contains(token))
        .collect();
    if meaningful.is_empty() {
        return None;
    }

    let found = meaningful.iter().filter(|token| text_tokens.contains(*token)).count();
    let ratio = found as f64 / meaningful.len() as f64;

    if found == meaningful.len() {
        Some(FULL_TOKEN_MATCH_SCORE)
    } else if ratio >= STRONG_RATIO_FLOOR {
        Some(0.60 + ratio * 0.20)
    } else if ratio >= WEAK_RATIO_FLOOR {
        Some(0.50 + ratio * 0.15)
    } else {
        None
    }
}

/// First keyword, in list order, whose score clears the acceptance threshold
pub fn find_first_match<S: AsRef<str>>(text: &str, keywords: &[S]) -> Option<KeywordMatch> {
    if text.is_empty() {
        return None;
    }
    keywords.iter().enumerate().find_map(|(index, keyword)| {
        score_keyword(text, keyword.as_ref())
            .filter(|score| *score >= MATCH_ACCEPT_THRESHOLD)
            .map(|score| KeywordMatch { index, score })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_never_match() {
        assert_eq!(score_keyword("", "password"), None);
        assert_eq!(score_keyword("password reset", ""), None);
        assert_eq!(find_first_match::<&str>("anything", &[]), None);
    }

    #[test]
    fn test_substring_scores_one() {
        assert_eq!(score_keyword("User cannot do Password Reset today", "password reset"), Some(1.0));
        // containment is on raw text, not on token boundaries
        assert_eq!(score_keyword("passwords", "password"), Some(1.0));
    }

    #[test]
    fn test_full_token_coverage_scores_085() {
        assert_eq!(score_keyword("reset the password please", "password reset"), Some(0.85));
    }

    #[test]
    fn test_stop_words_are_ignored_in_keyword() {
        // "issue" is a stop word, so only "vpn" and "login" count
        assert_eq!(score_keyword("login via vpn failed", "vpn login issue"), Some(0.85));
        assert_eq!(score_keyword("anything at all", "the user issue"), None);
    }

    #[test]
    fn test_strong_ratio_tier() {
        // 2 of 3 meaningful tokens
        let score = score_keyword("disk space alert", "disk space cleanup").unwrap();
        assert!((score - (0.60 + (2.0 / 3.0) * 0.20)).abs() < 1e-12);
    }

    #[test]
    fn test_weak_ratio_tier() {
        // 1 of 3 meaningful tokens: ratio 0.333.. clears the 0.33 floor
        let score = score_keyword("printer jammed", "printer driver install").unwrap();
        assert!((score - (0.50 + (1.0 / 3.0) * 0.15)).abs() < 1e-12);
    }

    #[test]
    fn test_low_ratio_is_rejected() {
        assert_eq!(score_keyword("printer offline", "printer driver install reinstall"), None);
    }

    #[test]
    fn test_tokens_split_on_whitespace_only() {
        // punctuation stays attached, so "reset," does not count as "reset"
        let score = score_keyword("reset, password", "password reset").unwrap();
        assert!((score - (0.50 + 0.5 * 0.15)).abs() < 1e-12);
    }

    #[test]
    fn test_first_qualifying_keyword_wins() {
        let keywords = ["network issue", "network"];
        let found = find_first_match("network issue reported", &keywords).unwrap();
        assert_eq!(found.index, 0);
        assert_eq!(found.score, 1.0);

        let keywords = ["outlook crash", "outlook crash on startup"];
        let found = find_first_match("outlook crash on startup", &keywords).unwrap();
        assert_eq!(found.index, 0);
    }

    #[test]
    fn test_first_match_not_best_match() {
        // the first keyword qualifies with a partial score even though the
        // second is a verbatim substring
        let keywords = ["vpn tunnel down", "vpn"];
        let found = find_first_match("vpn tunnel flapping", &keywords).unwrap();
        assert_eq!(found.index, 0);
        assert!(found.score < 1.0);
    }
}
