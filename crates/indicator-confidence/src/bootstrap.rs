//! Bootstrap engine for single-sample statistics
//!
//! Resamples the input with replacement, evaluates a [`Statistic`] on
//! every resample and turns the resulting distribution into a confidence
//! interval with a [`BootstrapMethod`].
//!
//! The random source is always explicit: either an RNG passed by the
//! caller or a seed configured on the builder. On a sequential engine
//! all resamples come from one RNG stream in order. On a parallel engine
//! a base seed is drawn from that stream and each resample gets its own
//! derived generator, so results are reproducible per engine type.

use crate::{
    bootstrap_methods::BootstrapMethod,
    bootstrap_workspace::{resample_seed, BootstrapWorkspace},
    types::ConfidenceLevel,
    ConfidenceInterval,
};
use indicator_core::{Error, ExecutionEngine, Result, Statistic};
use rand::{rngs::StdRng, thread_rng, Rng, SeedableRng};
use std::time::Instant;
use tracing::{debug, instrument};

/// Result of bootstrap confidence interval estimation
#[derive(Debug, Clone)]
pub struct BootstrapResult {
    /// The confidence interval
    pub interval: ConfidenceInterval,
    /// Number of bootstrap resamples performed
    pub n_resamples: usize,
    /// Statistic evaluated on the original sample
    pub estimate: f64,
    /// Name of the interval method
    pub method: &'static str,
    /// Time taken for bootstrap (if measured)
    pub bootstrap_time_ms: Option<u64>,
}

impl BootstrapResult {
    /// The `(lower, upper)` bounds
    pub fn bounds(&self) -> (f64, f64) {
        self.interval.bounds()
    }
}

/// Main bootstrap engine
///
/// # Example
///
/// ```rust
/// use indicator_confidence::{Bootstrap, PercentileBootstrap};
/// use indicator_core::{math, sequential, statistic_fn};
///
/// let sample = [1.0, 1.0, 1.0, 1.0, 1.0, 100.0];
/// let mean = statistic_fn(math::mean);
///
/// let result = Bootstrap::new(sequential(), PercentileBootstrap)
///     .with_resamples(2000)?
///     .with_confidence_level(0.90)?
///     .with_seed(42)
///     .confidence_interval(&sample, &mean)?;
///
/// let (lower, upper) = result.bounds();
/// assert!(lower < upper);
/// # Ok::<(), indicator_core::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Bootstrap<E, M> {
    engine: E,
    method: M,
    n_resamples: usize,
    confidence_level: ConfidenceLevel,
    seed: Option<u64>,
}

impl<E, M> Bootstrap<E, M>
where
    E: ExecutionEngine,
    M: BootstrapMethod,
{
    /// Create a new bootstrap engine with 10000 resamples at 90% confidence
    pub fn new(engine: E, method: M) -> Self {
        Self {
            engine,
            method,
            n_resamples: crate::api::DEFAULT_RESAMPLES,
            confidence_level: ConfidenceLevel::NINETY,
            seed: None,
        }
    }

    /// Set the number of bootstrap resamples
    pub fn with_resamples(mut self, n_resamples: usize) -> Result<Self> {
        if n_resamples == 0 {
            return Err(Error::InvalidParameter(
                "Number of resamples must be positive".to_string(),
            ));
        }
        self.n_resamples = n_resamples;
        Ok(self)
    }

    /// Set the confidence level, which must lie in (0, 1)
    pub fn with_confidence_level(mut self, confidence_level: f64) -> Result<Self> {
        self.confidence_level = ConfidenceLevel::new(confidence_level)?;
        Ok(self)
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn n_resamples(&self) -> usize {
        self.n_resamples
    }

    pub fn confidence_level(&self) -> f64 {
        self.confidence_level.value()
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Compute a confidence interval using the configured seed
    ///
    /// Without a seed the generator is seeded from the thread-local RNG.
    pub fn confidence_interval<S>(&self, sample: &[f64], statistic: &S) -> Result<BootstrapResult>
    where
        S: Statistic + ?Sized,
    {
        let seed = self.seed.unwrap_or_else(|| thread_rng().gen());
        let mut rng = StdRng::seed_from_u64(seed);
        self.confidence_interval_with_rng(sample, statistic, &mut rng)
    }

    /// Compute a confidence interval drawing randomness from `rng`
    #[instrument(
        skip(self, sample, statistic, rng),
        fields(n = sample.len(), n_resamples = self.n_resamples, statistic = statistic.name())
    )]
    pub fn confidence_interval_with_rng<S, R>(
        &self,
        sample: &[f64],
        statistic: &S,
        rng: &mut R,
    ) -> Result<BootstrapResult>
    where
        S: Statistic + ?Sized,
        R: Rng,
    {
        let start_time = Instant::now();

        let bootstrap_estimates = self.distribution_with_rng(sample, statistic, rng)?;
        let estimate = statistic.evaluate(sample)?;

        debug!("Bootstrap completed, calculating confidence interval");

        let interval = self.method.calculate_interval(
            &bootstrap_estimates,
            estimate,
            self.confidence_level.value(),
        )?;

        Ok(BootstrapResult {
            interval,
            n_resamples: self.n_resamples,
            estimate,
            method: self.method.name(),
            bootstrap_time_ms: Some(start_time.elapsed().as_millis() as u64),
        })
    }

    /// The bootstrap distribution: the statistic on each of the resamples
    ///
    /// The first error returned by the statistic aborts the run.
    pub fn distribution_with_rng<S, R>(
        &self,
        sample: &[f64],
        statistic: &S,
        rng: &mut R,
    ) -> Result<Vec<f64>>
    where
        S: Statistic + ?Sized,
        R: Rng,
    {
        if sample.is_empty() {
            return Err(Error::empty_input("bootstrap"));
        }

        if E::IS_SEQUENTIAL {
            debug!("Running sequential bootstrap with {} resamples", self.n_resamples);

            let mut workspace = BootstrapWorkspace::with_capacity(sample.len());
            let mut estimates = Vec::with_capacity(self.n_resamples);
            for _ in 0..self.n_resamples {
                let resampled = workspace.resample(sample, rng);
                estimates.push(statistic.evaluate(resampled)?);
            }
            Ok(estimates)
        } else {
            let base_seed: u64 = rng.gen();
            debug!(
                "Running parallel bootstrap with {} resamples on {} threads",
                self.n_resamples,
                self.engine.num_threads()
            );

            self.engine.try_execute_batch(self.n_resamples, |i| {
                let mut task_rng = StdRng::seed_from_u64(resample_seed(base_seed, i as u64));
                let mut workspace = BootstrapWorkspace::with_capacity(sample.len());
                statistic.evaluate(workspace.resample(sample, &mut task_rng))
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap_methods::PercentileBootstrap;
    use indicator_core::{math, sequential, statistic_fn};

    fn mean_stat() -> impl Statistic {
        statistic_fn(math::mean).named("mean")
    }

    #[test]
    fn test_bootstrap_construction() {
        let bootstrap = Bootstrap::new(sequential(), PercentileBootstrap)
            .with_resamples(1000)
            .unwrap()
            .with_confidence_level(0.95)
            .unwrap()
            .with_seed(42);

        assert_eq!(bootstrap.n_resamples(), 1000);
        assert_eq!(bootstrap.confidence_level(), 0.95);
        assert_eq!(bootstrap.seed(), Some(42));
    }

    #[test]
    fn test_defaults() {
        let bootstrap = Bootstrap::new(sequential(), PercentileBootstrap);
        assert_eq!(bootstrap.n_resamples(), 10_000);
        assert_eq!(bootstrap.confidence_level(), 0.90);
        assert_eq!(bootstrap.seed(), None);
    }

    #[test]
    fn test_invalid_inputs() {
        let base = Bootstrap::new(sequential(), PercentileBootstrap);
        assert!(matches!(
            base.clone().with_confidence_level(1.5),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            base.clone().with_confidence_level(0.0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            base.with_resamples(0),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_empty_sample_rejected_before_resampling() {
        let calls = std::sync::atomic::AtomicUsize::new(0);
        let counting = |s: &[f64]| -> Result<f64> {
            calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            Ok(s.len() as f64)
        };
        let result = Bootstrap::new(sequential(), PercentileBootstrap)
            .with_seed(1)
            .confidence_interval(&[], &counting);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
        assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 0);
    }

    #[test]
    fn test_distribution_length_and_support() {
        let bootstrap = Bootstrap::new(sequential(), PercentileBootstrap)
            .with_resamples(200)
            .unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let sample = [2.0, 4.0, 6.0];
        let dist = bootstrap
            .distribution_with_rng(&sample, &mean_stat(), &mut rng)
            .unwrap();
        assert_eq!(dist.len(), 200);
        assert!(dist.iter().all(|&m| (2.0..=6.0).contains(&m)));
    }

    #[test]
    fn test_statistic_error_propagates() {
        let calls = std::sync::atomic::AtomicUsize::new(0);
        let failing = |_: &[f64]| -> Result<f64> {
            if calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst) == 3 {
                Err(Error::Computation("statistic failed".to_string()))
            } else {
                Ok(1.0)
            }
        };
        let result = Bootstrap::new(sequential(), PercentileBootstrap)
            .with_resamples(100)
            .unwrap()
            .with_seed(9)
            .confidence_interval(&[1.0, 2.0, 3.0], &failing);
        assert!(matches!(result, Err(Error::Computation(_))));
        assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 4);
    }

    #[test]
    fn test_result_metadata() {
        let result = Bootstrap::new(sequential(), PercentileBootstrap)
            .with_resamples(500)
            .unwrap()
            .with_seed(3)
            .confidence_interval(&[1.0, 2.0, 3.0, 4.0], &mean_stat())
            .unwrap();
        assert_eq!(result.n_resamples, 500);
        assert_eq!(result.estimate, 2.5);
        assert_eq!(result.interval.estimate, 2.5);
        assert_eq!(result.method, "Percentile Bootstrap");
        assert!(result.bootstrap_time_ms.is_some());
        assert_eq!(result.bounds(), result.interval.bounds());
    }
}
