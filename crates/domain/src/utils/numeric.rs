//! Guarded arithmetic
//!
//! Every ratio in the metrics pipeline goes through [`safe_divide`] so the
//! zero-substitution policy lives in one place.

/// Divide `numerator` by `denominator`, returning `fallback` when the
/// denominator is zero or the quotient is not finite.
///
/// # Examples
///
/// ```
/// use autooptix_domain::utils::safe_divide;
///
/// assert_eq!(safe_divide(10.0, 4.0, 0.0), 2.5);
/// assert_eq!(safe_divide(10.0, 0.0, 0.0), 0.0);
/// ```
pub fn safe_divide(numerator: f64, denominator: f64, fallback: f64) -> f64 {
    if denominator == 0.0 {
        return fallback;
    }
    let quotient = numerator / denominator;
    if quotient.is_finite() {
        quotient
    } else {
        fallback
    }
}

/// Round half away from zero to `places` decimal places
pub fn round_to(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
