//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

pub const EPSILON: f64 = 1e-10;

/// Sample lengths covering the degenerate and small cases
pub fn edge_case_lengths() -> Vec<usize> {
    vec![1, 2, 3, 4, 5, 7, 16, 17, 100]
}

/// Deterministic, unsorted test data of the given length
pub fn scrambled(n: usize) -> Vec<f64> {
    (0..n).map(|i| ((i * 37 + 11) % 101) as f64 * 0.5 - 10.0).collect()
}
