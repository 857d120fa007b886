//! # Comparators
//!
//! This module provides the comparison side of the numeric marker: deciding whether
//! a student's numeric answer matches the instructor's reference value under a
//! resolved tolerance.
//!
//! The available comparators are:
//! - [`numeric_comparator`]: Tolerance-based comparison of real and complex answers,
//!   with decimal-exact arithmetic on the pure-real path.

pub mod numeric_comparator;
