//! [`Statistic`] implementations for the moment estimators
//!
//! These let the estimators be passed straight into a bootstrap.

use crate::moments;
use crate::types::ZeroVariancePolicy;
use indicator_core::{Result, Statistic};

/// Arithmetic mean
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

impl Statistic for Mean {
    fn evaluate(&self, sample: &[f64]) -> Result<f64> {
        moments::mean(sample)
    }

    fn name(&self) -> &str {
        "mean"
    }
}

/// Population standard deviation
#[derive(Debug, Clone, Copy, Default)]
pub struct PopulationStd;

impl Statistic for PopulationStd {
    fn evaluate(&self, sample: &[f64]) -> Result<f64> {
        moments::population_std(sample)
    }

    fn name(&self) -> &str {
        "std"
    }
}

/// Skewness with a configurable zero-variance policy
#[derive(Debug, Clone, Copy, Default)]
pub struct Skewness {
    policy: ZeroVariancePolicy,
}

impl Skewness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ZeroVariancePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ZeroVariancePolicy {
        self.policy
    }
}

impl Statistic for Skewness {
    fn evaluate(&self, sample: &[f64]) -> Result<f64> {
        moments::skewness_with_policy(sample, self.policy)
    }

    fn name(&self) -> &str {
        "skewness"
    }
}

/// Excess kurtosis with a configurable zero-variance policy
#[derive(Debug, Clone, Copy, Default)]
pub struct Kurtosis {
    policy: ZeroVariancePolicy,
}

impl Kurtosis {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ZeroVariancePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ZeroVariancePolicy {
        self.policy
    }
}

impl Statistic for Kurtosis {
    fn evaluate(&self, sample: &[f64]) -> Result<f64> {
        moments::kurtosis_with_policy(sample, self.policy)
    }

    fn name(&self) -> &str {
        "kurtosis"
    }
}
