//! Tolerance-based comparison of numeric answers.
//!
//! `NumericComparator` is the public entry point of the marker: it resolves the
//! tolerance specification, classifies the operands (finite/infinite/NaN,
//! real/complex) and applies the matching equality rule. Pure-real operands are
//! compared on exact base-10 decimals reconstructed from their canonical string
//! forms; complex operands are compared by Euclidean distance in the complex plane.

use crate::error::MarkerError;
use crate::evaluators::expr_evaluator::ExprEvaluator;
use crate::tolerance::resolve_tolerance;
use crate::traits::evaluator::ExpressionEvaluator;
use crate::types::{NumericValue, ToleranceSpec};
use bigdecimal::BigDecimal;
use common::config::Config;
use std::str::FromStr;

/// Compares student answers against instructor reference values under a tolerance.
///
/// The comparator owns its expression-evaluator collaborator and a fallback
/// tolerance specification for questions that do not supply one. Construction
/// follows a builder shape:
///
/// - `new`: `evalexpr`-backed evaluator, engine default tolerance.
/// - `with_evaluator`: swap in a different expression engine.
/// - `with_default_tolerance`: swap the fallback specification.
/// - `from_config`: fallback specification taken from the process configuration.
///
/// All methods are pure and synchronous; a single comparator can serve any number
/// of parallel grading workers.
pub struct NumericComparator<'a> {
    evaluator: Box<dyn ExpressionEvaluator + Send + Sync + 'a>,
    default_tolerance: ToleranceSpec,
}

impl<'a> NumericComparator<'a> {
    /// Create a comparator with the default expression evaluator and the
    /// engine-wide default tolerance as fallback.
    pub fn new() -> Self {
        Self {
            evaluator: Box::new(ExprEvaluator),
            default_tolerance: ToleranceSpec::Default,
        }
    }

    /// Create a comparator whose fallback tolerance comes from
    /// [`common::config::Config`]. Panics if the configuration has not been
    /// initialized, mirroring `Config::get`.
    pub fn from_config() -> Self {
        Self::new().with_default_tolerance(ToleranceSpec::parse(&Config::get().default_tolerance))
    }

    /// Set a custom expression evaluator for this comparator.
    ///
    /// # Arguments
    /// * `evaluator` - An implementation of the `ExpressionEvaluator` trait.
    pub fn with_evaluator<E: ExpressionEvaluator + Send + Sync + 'a>(
        mut self,
        evaluator: E,
    ) -> Self {
        self.evaluator = Box::new(evaluator);
        self
    }

    /// Set the fallback tolerance used by [`NumericComparator::compare_default`].
    pub fn with_default_tolerance(mut self, tolerance: ToleranceSpec) -> Self {
        self.default_tolerance = tolerance;
        self
    }

    /// Compare a student answer against the instructor reference value.
    ///
    /// # Arguments
    ///
    /// * `student` / `instructor` - The two answers, real or complex.
    /// * `tolerance` - The tolerance specification for this question.
    /// * `relative` - Whether the tolerance scales with the larger operand
    ///   magnitude. [`ToleranceSpec::Default`] forces this on by itself.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` / `Ok(false)`: the match verdict. Not-a-number operands never
    ///   match, themselves included; infinite operands match only by exact
    ///   equality.
    /// * `Err(MarkerError)`: tolerance resolution failed. Classification and
    ///   comparison of well-typed numeric input never fail.
    pub fn compare(
        &self,
        student: NumericValue,
        instructor: NumericValue,
        tolerance: &ToleranceSpec,
        relative: bool,
    ) -> Result<bool, MarkerError> {
        let tolerance = resolve_tolerance(
            tolerance,
            relative,
            student,
            instructor,
            self.evaluator.as_ref(),
        )?;

        // With an infinite operand both the difference and the bound can resolve
        // to infinity, and `inf <= inf` would report a match even when the signs
        // disagree after the arithmetic. Exact equality is the only sound rule.
        if student.is_infinite() || instructor.is_infinite() {
            return Ok(student == instructor);
        }

        if student.is_real() && instructor.is_real() {
            // NaN never matches anything, itself included.
            if student.re.is_nan() || instructor.re.is_nan() {
                return Ok(false);
            }
            // Decimal reconstruction is undefined for a non-finite bound: an
            // infinite bound accepts every finite pair, a NaN bound none.
            if !tolerance.is_finite() {
                return Ok(tolerance.is_infinite());
            }
            let student = decimal(student.re)?;
            let instructor = decimal(instructor.re)?;
            let bound = decimal(tolerance)?;
            Ok((student - instructor).abs() <= bound)
        } else {
            // Complex branch: the bound is a radius in the complex plane. NaN
            // components propagate into the distance and compare false.
            Ok((student - instructor).magnitude() <= tolerance)
        }
    }

    /// Compare using the comparator's fallback tolerance specification.
    ///
    /// Relative scaling is not requested explicitly; the fallback forces it only
    /// when the specification itself does (as [`ToleranceSpec::Default`] does).
    pub fn compare_default(
        &self,
        student: NumericValue,
        instructor: NumericValue,
    ) -> Result<bool, MarkerError> {
        self.compare(student, instructor, &self.default_tolerance, false)
    }
}

impl Default for NumericComparator<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Exact base-10 value of `x`, reconstructed from its shortest round-trip decimal
/// form rather than from its binary expansion. Subtracting two decimally-close
/// values in binary can leave a spurious residue; reconstruction avoids it and
/// matches a grader's decimal intuition.
fn decimal(x: f64) -> Result<BigDecimal, MarkerError> {
    BigDecimal::from_str(&x.to_string())
        .map_err(|e| MarkerError::InvalidDecimal(format!("{x}: {e}")))
}
