//! The default expression evaluator, backed by the `evalexpr` engine.
//!
//! `ExprEvaluator` adapts `evalexpr` to the [`ExpressionEvaluator`] seam: variable
//! and function contexts are injected into an `evalexpr` context, the expression is
//! evaluated, and any failure is surfaced verbatim as an expression error.

use crate::error::MarkerError;
use crate::traits::evaluator::ExpressionEvaluator;
use evalexpr::{
    ContextWithMutableFunctions, ContextWithMutableVariables, Function, HashMapContext, Value,
    eval_with_context,
};
use std::collections::HashMap;

/// Evaluates tolerance and answer expressions through `evalexpr`.
///
/// Stateless; a fresh evaluation context is built per call, so a single instance is
/// safe to share across parallel grading workers.
pub struct ExprEvaluator;

impl ExpressionEvaluator for ExprEvaluator {
    fn evaluate(
        &self,
        variables: &HashMap<String, f64>,
        functions: &HashMap<String, fn(f64) -> f64>,
        expression: &str,
    ) -> Result<f64, MarkerError> {
        let mut context = HashMapContext::new();

        for (name, value) in variables {
            context
                .set_value(name.clone(), Value::Float(*value))
                .map_err(|e| MarkerError::ExpressionError(e.to_string()))?;
        }

        for (name, function) in functions {
            let function = *function;
            context
                .set_function(
                    name.clone(),
                    Function::new(move |argument| {
                        let x = argument.as_number()?;
                        Ok(Value::Float(function(x)))
                    }),
                )
                .map_err(|e| MarkerError::ExpressionError(e.to_string()))?;
        }

        eval_with_context(expression, &context)
            .and_then(|value| value.as_number())
            .map_err(|e| MarkerError::ExpressionError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(expression: &str) -> Result<f64, MarkerError> {
        ExprEvaluator.evaluate(&HashMap::new(), &HashMap::new(), expression)
    }

    #[test]
    fn test_evaluates_numeric_literal() {
        assert_eq!(evaluate("10").unwrap(), 10.0);
        assert_eq!(evaluate("0.001").unwrap(), 0.001);
    }

    #[test]
    fn test_evaluates_arithmetic() {
        assert_eq!(evaluate("5*2").unwrap(), 10.0);
        // evalexpr keeps integer/integer division integral, so spell the float out.
        assert_eq!(evaluate("1.0/2").unwrap(), 0.5);
    }

    #[test]
    fn test_evaluates_with_variables() {
        let variables = HashMap::from([("x".to_string(), 4.0)]);
        let result = ExprEvaluator
            .evaluate(&variables, &HashMap::new(), "x * 2.5")
            .unwrap();
        assert_eq!(result, 10.0);
    }

    #[test]
    fn test_evaluates_with_functions() {
        fn double(x: f64) -> f64 {
            x * 2.0
        }
        let functions: HashMap<String, fn(f64) -> f64> =
            HashMap::from([("double".to_string(), double as fn(f64) -> f64)]);
        let result = ExprEvaluator
            .evaluate(&HashMap::new(), &functions, "double(21)")
            .unwrap();
        assert_eq!(result, 42.0);
    }

    #[test]
    fn test_malformed_expression_is_an_error() {
        match evaluate("abc") {
            Err(MarkerError::ExpressionError(message)) => {
                assert!(!message.is_empty(), "evaluator message should pass through");
            }
            other => panic!("Expected ExpressionError, got: {other:?}"),
        }
    }
}
