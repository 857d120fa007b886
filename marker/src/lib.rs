//! # Numeric Marker Library
//!
//! This crate provides the numeric-answer verification kernel for automated
//! assessment: deciding whether a student-submitted numeric (real or complex)
//! value matches an instructor-supplied reference value under a configurable
//! tolerance, plus the deterministic rounding rule used when publishing grades.
//!
//! ## Key Concepts
//! - **NumericComparator**: The entry point. Resolves the tolerance, classifies the
//!   operands and applies the matching equality rule.
//! - **ToleranceSpec**: Tagged tolerance specification (default / literal /
//!   expression / percentage), classified once at the ingestion boundary.
//! - **ExpressionEvaluator**: Pluggable collaborator that turns expression strings
//!   into numbers; an `evalexpr`-backed adapter is the default.
//! - **Rounding**: Symmetric "half away from zero" rounding, independent of the
//!   host runtime's tie-breaking.
//!
//! Pure-real operands are compared on exact base-10 decimals rebuilt from their
//! canonical string forms, because binary subtraction of two decimally-close
//! values can leave a spurious residue and flip a verdict. Complex operands are
//! compared by Euclidean distance.

pub mod comparators;
pub mod error;
pub mod evaluators;
pub mod rounding;
pub mod tolerance;
pub mod traits;
pub mod types;

pub use comparators::numeric_comparator::NumericComparator;
pub use error::MarkerError;
pub use evaluators::expr_evaluator::ExprEvaluator;
pub use rounding::round_away_from_zero;
pub use tolerance::resolve_tolerance;
pub use traits::evaluator::ExpressionEvaluator;
pub use types::{DEFAULT_TOLERANCE, NumericValue, ToleranceSpec};

/// Compare two answers with a one-shot, default-configured comparator.
///
/// Convenience wrapper over [`NumericComparator::compare`] for callers that do not
/// hold a comparator. `student` and `instructor` accept anything convertible to a
/// [`NumericValue`] (an `f64` or a `(re, im)` pair).
///
/// # Example
///
/// ```
/// use marker::{ToleranceSpec, compare_with_tolerance};
///
/// let spec = ToleranceSpec::parse("10%");
/// assert!(compare_with_tolerance(11.0, 10.0, &spec, false).unwrap());
/// assert!(!compare_with_tolerance(12.0, 10.0, &spec, false).unwrap());
/// ```
pub fn compare_with_tolerance(
    student: impl Into<NumericValue>,
    instructor: impl Into<NumericValue>,
    tolerance: &ToleranceSpec,
    relative: bool,
) -> Result<bool, MarkerError> {
    NumericComparator::new().compare(student.into(), instructor.into(), tolerance, relative)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_compare_accepts_plain_floats() {
        assert!(compare_with_tolerance(10.0, 10.0, &ToleranceSpec::parse("10%"), false).unwrap());
    }

    #[test]
    fn test_one_shot_compare_accepts_complex_pairs() {
        assert!(
            compare_with_tolerance((3.0, 4.0), 0.0, &ToleranceSpec::Literal(5.0), false).unwrap()
        );
    }
}
