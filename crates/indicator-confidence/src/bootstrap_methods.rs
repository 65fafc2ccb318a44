//! Bootstrap method implementations
//!
//! This module provides the methods that turn a bootstrap distribution
//! into a confidence interval. Quantiles use linear interpolation between
//! order statistics.

use crate::{types::ConfidenceLevel, ConfidenceInterval};
use indicator_core::{math, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Bootstrap method for calculating confidence intervals
pub trait BootstrapMethod: Clone + Send + Sync {
    /// Calculate confidence interval from bootstrap distribution
    fn calculate_interval(
        &self,
        bootstrap_estimates: &[f64],
        original_estimate: f64,
        confidence_level: f64,
    ) -> Result<ConfidenceInterval>;

    /// Method name for documentation
    fn name(&self) -> &'static str;
}

/// Lower and upper quantiles of the bootstrap distribution
///
/// A distribution containing NaN (from statistics that propagate NaN on
/// degenerate resamples) has no defined quantiles; both bounds are NaN.
fn percentile_bounds(bootstrap_estimates: &[f64], confidence_level: f64) -> Result<(f64, f64)> {
    if bootstrap_estimates.is_empty() {
        return Err(Error::InvalidInput("No bootstrap estimates".to_string()));
    }
    let level = ConfidenceLevel::new(confidence_level)?;

    let nan_count = bootstrap_estimates.iter().filter(|x| x.is_nan()).count();
    if nan_count > 0 {
        warn!(
            nan_count,
            total = bootstrap_estimates.len(),
            "Bootstrap distribution contains NaN, interval is undefined"
        );
        return Ok((f64::NAN, f64::NAN));
    }

    let sorted = math::sorted(bootstrap_estimates);
    let lower = math::quantile_sorted(&sorted, level.lower_probability())?;
    let upper = math::quantile_sorted(&sorted, level.upper_probability())?;

    debug!(
        p_lower = level.lower_probability(),
        p_upper = level.upper_probability(),
        lower,
        upper,
        "Percentile bounds"
    );

    Ok((lower, upper))
}

/// Percentile bootstrap method
///
/// The interval is the `0.5 - c/2` and `0.5 + c/2` quantiles of the
/// bootstrap distribution.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentileBootstrap;

impl BootstrapMethod for PercentileBootstrap {
    fn calculate_interval(
        &self,
        bootstrap_estimates: &[f64],
        original_estimate: f64,
        confidence_level: f64,
    ) -> Result<ConfidenceInterval> {
        let (lower, upper) = percentile_bounds(bootstrap_estimates, confidence_level)?;
        Ok(ConfidenceInterval::new(
            lower,
            upper,
            original_estimate,
            confidence_level,
        ))
    }

    fn name(&self) -> &'static str {
        "Percentile Bootstrap"
    }
}

/// Basic bootstrap method
///
/// Uses the reflection principle: if θ̂* is the bootstrap estimate and θ̂ is the
/// original estimate, then the interval is [2θ̂ - q_{1-α/2}, 2θ̂ - q_{α/2}]
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicBootstrap;

impl BootstrapMethod for BasicBootstrap {
    fn calculate_interval(
        &self,
        bootstrap_estimates: &[f64],
        original_estimate: f64,
        confidence_level: f64,
    ) -> Result<ConfidenceInterval> {
        let (q_lower, q_upper) = percentile_bounds(bootstrap_estimates, confidence_level)?;

        Ok(ConfidenceInterval::new(
            2.0 * original_estimate - q_upper,
            2.0 * original_estimate - q_lower,
            original_estimate,
            confidence_level,
        ))
    }

    fn name(&self) -> &'static str {
        "Basic Bootstrap"
    }
}

/// Runtime-selectable interval method, used by configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalMethod {
    #[default]
    Percentile,
    Basic,
}

impl BootstrapMethod for IntervalMethod {
    fn calculate_interval(
        &self,
        bootstrap_estimates: &[f64],
        original_estimate: f64,
        confidence_level: f64,
    ) -> Result<ConfidenceInterval> {
        match self {
            Self::Percentile => PercentileBootstrap.calculate_interval(
                bootstrap_estimates,
                original_estimate,
                confidence_level,
            ),
            Self::Basic => BasicBootstrap.calculate_interval(
                bootstrap_estimates,
                original_estimate,
                confidence_level,
            ),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Percentile => PercentileBootstrap.name(),
            Self::Basic => BasicBootstrap.name(),
        }
    }
}
