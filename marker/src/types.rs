//! # Types Module
//!
//! This module defines the core data structures used throughout the numeric marker:
//! the uniform complex representation of submitted values and the tagged tolerance
//! specification resolved once at the ingestion boundary.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::ops::Sub;

pub use common::config::DEFAULT_TOLERANCE;

/// A scalar answer value, real or complex, held uniformly as a (real, imaginary) pair.
///
/// Real inputs carry a zero imaginary part. Either component may be infinite or
/// not-a-number; classification of those states is the comparator's job, so the
/// constructors accept them as-is.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NumericValue {
    /// Real component.
    pub re: f64,
    /// Imaginary component; zero for real inputs.
    pub im: f64,
}

impl NumericValue {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// A pure-real value.
    pub fn real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// Euclidean magnitude in the complex plane.
    pub fn magnitude(&self) -> f64 {
        self.re.hypot(self.im)
    }

    /// True when the imaginary part is exactly zero. A NaN imaginary part is not
    /// real: such values route through the complex-distance comparison.
    pub fn is_real(&self) -> bool {
        self.im == 0.0
    }

    /// True when either component has infinite magnitude.
    pub fn is_infinite(&self) -> bool {
        self.re.is_infinite() || self.im.is_infinite()
    }

    /// True when either component is not-a-number.
    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }
}

impl From<f64> for NumericValue {
    fn from(re: f64) -> Self {
        Self::real(re)
    }
}

impl From<(f64, f64)> for NumericValue {
    fn from((re, im): (f64, f64)) -> Self {
        Self::new(re, im)
    }
}

impl Sub for NumericValue {
    type Output = NumericValue;

    fn sub(self, other: NumericValue) -> NumericValue {
        NumericValue::new(self.re - other.re, self.im - other.im)
    }
}

/// A tolerance specification as supplied by the question author.
///
/// Dynamically shaped input (a bare number, an expression string, a percentage
/// string, or the engine default) is classified into one of these variants exactly
/// once, at the boundary; all later logic branches on the variant and never on the
/// raw text again.
#[derive(Debug, Clone, PartialEq)]
pub enum ToleranceSpec {
    /// The engine-wide default tolerance. Always resolved in relative mode,
    /// regardless of the caller's flag.
    Default,
    /// A numeric literal used as the bound directly.
    Literal(f64),
    /// A plain numeric expression, handed to the expression evaluator.
    Expression(String),
    /// A percentage expression with the trailing `%` marker already stripped.
    Percentage(String),
}

impl ToleranceSpec {
    /// Classifies the textual form of a tolerance.
    ///
    /// The canonical default string maps to [`ToleranceSpec::Default`]; this is the
    /// only place the sentinel text is ever compared. A trailing `%` marks a
    /// percentage expression; anything else is a plain expression.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed == DEFAULT_TOLERANCE {
            return ToleranceSpec::Default;
        }
        match trimmed.strip_suffix('%') {
            Some(expr) => ToleranceSpec::Percentage(expr.trim_end().to_string()),
            None => ToleranceSpec::Expression(trimmed.to_string()),
        }
    }
}

impl Default for ToleranceSpec {
    fn default() -> Self {
        ToleranceSpec::Default
    }
}

impl From<f64> for ToleranceSpec {
    fn from(value: f64) -> Self {
        ToleranceSpec::Literal(value)
    }
}

impl fmt::Display for ToleranceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToleranceSpec::Default => f.write_str(DEFAULT_TOLERANCE),
            ToleranceSpec::Literal(value) => write!(f, "{value}"),
            ToleranceSpec::Expression(expr) => f.write_str(expr),
            ToleranceSpec::Percentage(expr) => write!(f, "{expr}%"),
        }
    }
}

impl Serialize for ToleranceSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ToleranceSpec::Literal(value) => serializer.serialize_f64(*value),
            other => serializer.collect_str(other),
        }
    }
}

/// Assessment config files carry tolerances as either a JSON number or a string.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawTolerance {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for ToleranceSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawTolerance::deserialize(deserializer)? {
            RawTolerance::Number(value) => Ok(ToleranceSpec::Literal(value)),
            RawTolerance::Text(text) => Ok(ToleranceSpec::parse(&text)),
        }
    }
}
