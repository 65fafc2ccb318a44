//! Common types for confidence intervals

use indicator_core::{Error, Result};
use std::fmt;

/// A confidence interval with lower and upper bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// The point estimate on the original sample
    pub estimate: f64,
    /// Confidence level (e.g., 0.90 for 90% CI)
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    /// Create a new confidence interval
    pub fn new(lower: f64, upper: f64, estimate: f64, confidence_level: f64) -> Self {
        Self {
            lower,
            upper,
            estimate,
            confidence_level,
        }
    }

    /// The `(lower, upper)` pair
    pub fn bounds(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Margin of error (half-width)
    pub fn margin_of_error(&self) -> f64 {
        self.width() / 2.0
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// True when either bound is NaN
    pub fn is_undefined(&self) -> bool {
        self.lower.is_nan() || self.upper.is_nan()
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% CI: [{:.4}, {:.4}], estimate: {:.4}",
            self.confidence_level * 100.0,
            self.lower,
            self.upper,
            self.estimate
        )
    }
}

/// Confidence level type with validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Create a new confidence level
    ///
    /// Fails with [`Error::InvalidParameter`] unless `0 < level < 1`.
    pub fn new(level: f64) -> Result<Self> {
        if !(level > 0.0 && level < 1.0) {
            return Err(Error::InvalidParameter(format!(
                "Confidence level {level} must be in (0, 1)"
            )));
        }
        Ok(Self(level))
    }

    /// Get the confidence level value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Probability of the lower bound quantile, `0.5 - level / 2`
    pub fn lower_probability(&self) -> f64 {
        0.5 - self.0 / 2.0
    }

    /// Probability of the upper bound quantile, `0.5 + level / 2`
    pub fn upper_probability(&self) -> f64 {
        0.5 + self.0 / 2.0
    }

    /// The default 90% level
    pub const NINETY: Self = Self(0.90);

}

impl Default for ConfidenceLevel {
    fn default() -> Self {
        Self::NINETY
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}
