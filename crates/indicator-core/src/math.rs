//! Basic numeric helpers shared across the workspace
//!
//! Means, variances and the linear-interpolation quantile used both by
//! the bootstrap interval methods and by table summaries.

use crate::{Error, Result};
use std::cmp::Ordering;

/// Arithmetic mean
///
/// Returns `NaN` for an empty slice; callers validate non-emptiness.
pub fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

/// Population variance (divisor `n`)
pub fn population_variance(data: &[f64]) -> f64 {
    let m = mean(data);
    data.iter()
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum::<f64>()
        / data.len() as f64
}

/// Sample variance (divisor `n - 1`)
///
/// Returns `NaN` for slices with fewer than two elements.
pub fn sample_variance(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return f64::NAN;
    }
    let m = mean(data);
    data.iter()
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum::<f64>()
        / (data.len() - 1) as f64
}

/// Sort data into a new vector
///
/// NaN values are placed at the end.
///
/// # Examples
///
/// ```rust
/// use indicator_core::math::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sort_nan_last(&mut sorted);
    sorted
}

/// Sort in place with NaN values after every number
pub fn sort_nan_last(data: &mut [f64]) {
    data.sort_by(|a, b| match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    });
}

/// Quantile of already sorted data with linear interpolation between
/// order statistics (`h = (n - 1) p`, the "type 7" definition).
///
/// # Examples
///
/// ```rust
/// use indicator_core::math::quantile_sorted;
///
/// let data = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(quantile_sorted(&data, 0.5).unwrap(), 2.5);
/// ```
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Result<f64> {
    if sorted.is_empty() {
        return Err(Error::empty_input("quantile"));
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::invalid_quantile(p));
    }

    let n = sorted.len();
    if n == 1 {
        return Ok(sorted[0]);
    }

    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    if lo >= n - 1 {
        return Ok(sorted[n - 1]);
    }
    let frac = h - lo as f64;
    if frac == 0.0 {
        return Ok(sorted[lo]);
    }

    Ok(sorted[lo] + frac * (sorted[lo + 1] - sorted[lo]))
}

/// Quantile of unsorted data
///
/// Sorts a copy first; if any value is NaN the result is NaN.
pub fn quantile(data: &[f64], p: f64) -> Result<f64> {
    if data.iter().any(|x| x.is_nan()) {
        // Validate arguments even when the answer is NaN
        quantile_sorted(&[0.0], p)?;
        return Ok(f64::NAN);
    }
    quantile_sorted(&sorted(data), p)
}
