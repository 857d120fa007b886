//! # Tolerance Resolution
//!
//! This module turns a [`ToleranceSpec`] plus a relative/absolute mode flag into a
//! single non-negative absolute bound, consulting the expression evaluator for
//! textual specifications. The two operand values participate only through their
//! magnitudes, and only when the resolution is relative.

use crate::error::MarkerError;
use crate::traits::evaluator::ExpressionEvaluator;
use crate::types::{NumericValue, ToleranceSpec};
use std::collections::HashMap;
use tracing::error;

/// Fraction expression backing [`ToleranceSpec::Default`]: the canonical default
/// tolerance less its percent marker.
const DEFAULT_PERCENT_EXPR: &str = "0.001";

/// Resolves a tolerance specification into an absolute bound.
///
/// # Arguments
///
/// * `spec` - The tolerance specification, already classified at the boundary.
/// * `relative` - Whether the bound scales with the larger operand magnitude.
///   [`ToleranceSpec::Default`] forces this on regardless of the caller's flag.
/// * `student` / `instructor` - The operands being compared, pre-coercion. Only
///   their magnitudes are consulted: the instructor's in absolute percentage
///   mode, the larger of the two in relative mode.
/// * `evaluator` - The expression collaborator used for textual specifications.
///
/// # Returns
///
/// * `Ok(f64)`: the resolved bound, clamped so it is never negative.
/// * `Err(MarkerError)`: the specification's expression could not be evaluated;
///   the evaluator's message is passed through verbatim.
pub fn resolve_tolerance(
    spec: &ToleranceSpec,
    relative: bool,
    student: NumericValue,
    instructor: NumericValue,
    evaluator: &dyn ExpressionEvaluator,
) -> Result<f64, MarkerError> {
    // The default spec is always relative, whatever the caller asked for.
    let relative = relative || matches!(spec, ToleranceSpec::Default);

    let bound = match spec {
        ToleranceSpec::Literal(value) => *value,
        ToleranceSpec::Expression(expr) => evaluate(evaluator, expr)?,
        ToleranceSpec::Default | ToleranceSpec::Percentage(_) => {
            let expr = match spec {
                ToleranceSpec::Percentage(expr) => expr.as_str(),
                _ => DEFAULT_PERCENT_EXPR,
            };
            let fraction = evaluate(evaluator, expr)? * 0.01;
            if relative {
                // Scaling against the larger operand happens below.
                fraction
            } else {
                fraction * instructor.magnitude()
            }
        }
    };

    let bound = if relative {
        bound * student.magnitude().max(instructor.magnitude())
    } else {
        bound
    };

    // A negative bound would match nothing, including equal values; clamping keeps
    // the resolved tolerance non-negative. NaN falls through untouched.
    Ok(if bound < 0.0 { 0.0 } else { bound })
}

fn evaluate(evaluator: &dyn ExpressionEvaluator, expression: &str) -> Result<f64, MarkerError> {
    evaluator
        .evaluate(&HashMap::new(), &HashMap::new(), expression)
        .inspect_err(|e| {
            error!("Failed to evaluate tolerance expression {expression:?}: {e:?}");
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluators::expr_evaluator::ExprEvaluator;

    fn resolve(
        spec: &ToleranceSpec,
        relative: bool,
        student: f64,
        instructor: f64,
    ) -> Result<f64, MarkerError> {
        resolve_tolerance(
            spec,
            relative,
            NumericValue::real(student),
            NumericValue::real(instructor),
            &ExprEvaluator,
        )
    }

    #[test]
    fn test_literal_passes_through() {
        let bound = resolve(&ToleranceSpec::Literal(0.25), false, 1.0, 2.0).unwrap();
        assert_eq!(bound, 0.25);
    }

    #[test]
    fn test_expression_is_evaluated() {
        let bound = resolve(&ToleranceSpec::parse("5*2"), false, 1.0, 2.0).unwrap();
        assert_eq!(bound, 10.0);
    }

    #[test]
    fn test_percentage_scales_by_instructor_when_absolute() {
        // 10% of |instructor| = 1.0; the student magnitude is ignored.
        let bound = resolve(&ToleranceSpec::parse("10%"), false, 50.0, 10.0).unwrap();
        assert_eq!(bound, 1.0);
    }

    #[test]
    fn test_percentage_scales_by_larger_operand_when_relative() {
        let bound = resolve(&ToleranceSpec::parse("10%"), true, 20.0, 10.0).unwrap();
        assert_eq!(bound, 2.0);
    }

    #[test]
    fn test_relative_literal_scales_by_larger_operand() {
        let bound = resolve(&ToleranceSpec::Literal(0.5), true, 4.0, 10.0).unwrap();
        assert_eq!(bound, 5.0);
    }

    #[test]
    fn test_default_forces_relative_mode() {
        // 0.001% of max(|student|, |instructor|), even though relative=false.
        let bound = resolve(&ToleranceSpec::Default, false, 100.0, 10.0).unwrap();
        assert_eq!(bound, 1e-5 * 100.0);
    }

    #[test]
    fn test_relative_uses_complex_magnitude() {
        let bound = resolve_tolerance(
            &ToleranceSpec::Literal(0.1),
            true,
            NumericValue::new(3.0, 4.0),
            NumericValue::real(1.0),
            &ExprEvaluator,
        )
        .unwrap();
        assert_eq!(bound, 0.5);
    }

    #[test]
    fn test_negative_bound_clamps_to_zero() {
        let bound = resolve(&ToleranceSpec::Literal(-2.0), false, 1.0, 1.0).unwrap();
        assert_eq!(bound, 0.0);
    }

    #[test]
    fn test_unparsable_expression_propagates_verbatim() {
        struct FailingEvaluator;
        impl ExpressionEvaluator for FailingEvaluator {
            fn evaluate(
                &self,
                _: &HashMap<String, f64>,
                _: &HashMap<String, fn(f64) -> f64>,
                _: &str,
            ) -> Result<f64, MarkerError> {
                Err(MarkerError::ExpressionError("boom".to_string()))
            }
        }

        let result = resolve_tolerance(
            &ToleranceSpec::parse("garbage"),
            false,
            NumericValue::real(1.0),
            NumericValue::real(1.0),
            &FailingEvaluator,
        );
        match result {
            Err(MarkerError::ExpressionError(message)) => assert_eq!(message, "boom"),
            other => panic!("Expected ExpressionError, got: {other:?}"),
        }
    }
}
