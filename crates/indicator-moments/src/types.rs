//! Shared types for moment statistics

use serde::{Deserialize, Serialize};
use std::fmt;

/// What to do when a sample has zero standard deviation
///
/// Standardized moments divide by the standard deviation, so they are
/// undefined for constant samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroVariancePolicy {
    /// Fail with [`indicator_core::Error::Domain`]
    #[default]
    Error,
    /// Return `NaN`, as IEEE-754 division would
    Propagate,
}

/// First four moments of a sample
///
/// `std_dev` is the population standard deviation (divisor `n`) and
/// `kurtosis` is excess kurtosis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    pub n: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub skewness: f64,
    pub kurtosis: f64,
}

impl fmt::Display for Moments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={}, mean={:.4}, std={:.4}, skewness={:.4}, kurtosis={:.4}",
            self.n, self.mean, self.std_dev, self.skewness, self.kurtosis
        )
    }
}
