//! # Rounding Module
//!
//! This module provides the symmetric rounding rule used when publishing grades.
//! Host runtimes differ in how they break ties (Rust's `f64::round` goes away from
//! zero, Python 3 and IEEE default go to even), so grading uses one fixed, explicit
//! rule instead of whatever the ambient runtime happens to do.

/// Rounds `value` to `digits` decimal places, breaking ties away from zero.
///
/// Values exactly halfway between two representable results round outward from
/// zero for both signs, as opposed to the "half to even" (banker's) strategy.
/// Grades stay stable and sign-symmetric no matter which runtime computed them.
///
/// # Arguments
///
/// * `value` - The number to round.
/// * `digits` - Decimal places to keep. Negative digits round into integer
///   positions (tens, hundreds, ...).
///
/// # Returns
///
/// The rounded value.
///
/// # Example
///
/// ```
/// use marker::rounding::round_away_from_zero;
///
/// assert_eq!(round_away_from_zero(0.5, 0), 1.0);
/// assert_eq!(round_away_from_zero(-0.5, 0), -1.0);
/// assert_eq!(round_away_from_zero(2.345, 2), 2.35);
/// ```
pub fn round_away_from_zero(value: f64, digits: i32) -> f64 {
    let p = 10f64.powi(digits);

    if value >= 0.0 {
        ((value * p) + 0.5).floor() / p
    } else {
        ((value * p) - 0.5).ceil() / p
    }
}
