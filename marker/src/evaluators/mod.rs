//! # Evaluators
//!
//! This module provides implementations of the [`crate::traits::evaluator::ExpressionEvaluator`]
//! trait. The marker treats expression evaluation as an external capability; the
//! implementations here only adapt existing expression engines to that seam.
//!
//! The available evaluators are:
//! - [`expr_evaluator`]: Adapts the `evalexpr` expression engine.

pub mod expr_evaluator;
