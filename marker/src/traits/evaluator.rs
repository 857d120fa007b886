use crate::error::MarkerError;
use std::collections::HashMap;

/// ExpressionEvaluator is the marker's seam to the external expression-evaluation
/// capability. Tolerance specifications may arrive as textual expressions
/// ("1/2", "5*2"); the marker never interprets that text itself, it hands the
/// string to an implementation of this trait.
pub trait ExpressionEvaluator: Send + Sync {
    /// Evaluate `expression` to a single number.
    ///
    /// - `variables`: named values the expression may reference.
    /// - `functions`: named single-argument functions the expression may call.
    /// - `expression`: the text to evaluate.
    ///
    /// Tolerance resolution always passes empty contexts; the maps exist so the
    /// same collaborator can serve answer-formula evaluation elsewhere in the
    /// grading engine. A malformed expression surfaces as
    /// [`MarkerError::ExpressionError`] carrying the evaluator's own message.
    fn evaluate(
        &self,
        variables: &HashMap<String, f64>,
        functions: &HashMap<String, fn(f64) -> f64>,
        expression: &str,
    ) -> Result<f64, MarkerError>;
}
