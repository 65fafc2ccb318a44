//! Serializable bootstrap configuration

use crate::{
    api::{DEFAULT_CONFIDENCE_LEVEL, DEFAULT_RESAMPLES},
    bootstrap::Bootstrap,
    bootstrap_methods::IntervalMethod,
    types::ConfidenceLevel,
};
use indicator_core::{Error, ExecutionEngine, Result};
use serde::{Deserialize, Serialize};

/// Bootstrap settings, loadable from JSON or any serde format
///
/// Missing fields take their defaults: 90% confidence, 10000 resamples,
/// no fixed seed, percentile intervals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    pub confidence_level: f64,
    pub n_resamples: usize,
    pub seed: Option<u64>,
    pub method: IntervalMethod,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            n_resamples: DEFAULT_RESAMPLES,
            seed: None,
            method: IntervalMethod::Percentile,
        }
    }
}

impl BootstrapConfig {
    /// Check the confidence level and resample count
    pub fn validate(&self) -> Result<()> {
        ConfidenceLevel::new(self.confidence_level)?;
        if self.n_resamples == 0 {
            return Err(Error::InvalidParameter(
                "Number of resamples must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Build a validated [`Bootstrap`] on the given engine
    pub fn build<E: ExecutionEngine>(&self, engine: E) -> Result<Bootstrap<E, IntervalMethod>> {
        let bootstrap = Bootstrap::new(engine, self.method)
            .with_resamples(self.n_resamples)?
            .with_confidence_level(self.confidence_level)?;
        Ok(match self.seed {
            Some(seed) => bootstrap.with_seed(seed),
            None => bootstrap,
        })
    }
}
