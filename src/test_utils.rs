// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_utils::{assert_abs_diff_eq, F64_EPSILON};
//!
//! assert_abs_diff_eq!(decode("1/1 30/1 0/6000"), 1.5, epsilon = F64_EPSILON);
//! ```

pub use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_relative_ne};

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;

/// Default epsilon for f64 comparisons; well below one EXIF second unit
/// (1/6000 s, about 4.6e-8 degrees).
pub const F64_EPSILON: f64 = 1e-10;
