//! Cell-value normalization

/// Trimmed, lower-cased text, or `None` for blank input
///
/// `None` acts as the null sentinel when comparing attributes: it never
/// equals any expected value.
pub fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// True when `value` normalizes to exactly `expected` (already lower-case)
pub fn value_is(value: &str, expected: &str) -> bool {
    normalize_value(value).as_deref() == Some(expected)
}
