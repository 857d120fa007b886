//! Marker Error Types
//!
//! This module defines the [`MarkerError`] enum, which encapsulates the error types that can
//! occur while resolving a tolerance and comparing numeric answers in the marker system.
//! Each variant provides a descriptive error message for robust error handling and debugging.
//!
//! Not-a-number and infinite inputs are deliberately absent here: both are normal verdicts
//! (never-matches and exact-equality respectively), not failures.

/// Represents all error types that can occur in the numeric marker.
#[derive(Debug)]
pub enum MarkerError {
    /// The textual tolerance expression could not be evaluated. The payload is the
    /// evaluator's own message, passed through verbatim. Fatal for the current
    /// comparison; the caller must treat the submission as ungradable rather than
    /// defaulting to a verdict.
    ExpressionError(String),
    /// A canonical numeric string failed decimal reconstruction. Unreachable for
    /// finite inputs; kept as an explicit variant instead of a panic path.
    InvalidDecimal(String),
}
