//! High-level API for bootstrap confidence intervals
//!
//! Function-style entry points over [`Bootstrap`] for the common case of a
//! percentile interval computed sequentially.

use crate::{
    bootstrap::{Bootstrap, BootstrapResult},
    bootstrap_methods::PercentileBootstrap,
    config::BootstrapConfig,
};
use indicator_core::{sequential, ExecutionEngine, Result, Statistic};
use rand::Rng;

/// Default confidence level
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.90;

/// Default number of bootstrap resamples
pub const DEFAULT_RESAMPLES: usize = 10_000;

/// Percentile bootstrap confidence interval of `statistic` over `sample`
///
/// Draws `n_resamples` same-size resamples with replacement from
/// `sample` using `rng`, and returns the `0.5 - c/2` and `0.5 + c/2`
/// quantiles of the statistic's bootstrap distribution.
///
/// Arguments are validated before any resampling: an empty sample is
/// [`indicator_core::Error::InvalidInput`], a confidence level outside
/// (0, 1) or zero resamples is [`indicator_core::Error::InvalidParameter`].
///
/// # Example
/// ```rust
/// use indicator_confidence::api::bootstrap;
/// use indicator_core::{math, statistic_fn};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let sample = [1.0, 1.0, 1.0, 1.0, 1.0, 100.0];
/// let mut rng = StdRng::seed_from_u64(42);
/// let (lower, upper) =
///     bootstrap(&sample, &statistic_fn(math::mean), 0.90, 5000, &mut rng).unwrap();
/// assert!(lower < upper);
/// ```
pub fn bootstrap<S, R>(
    sample: &[f64],
    statistic: &S,
    confidence_level: f64,
    n_resamples: usize,
    rng: &mut R,
) -> Result<(f64, f64)>
where
    S: Statistic + ?Sized,
    R: Rng,
{
    let result = Bootstrap::new(sequential(), PercentileBootstrap)
        .with_confidence_level(confidence_level)?
        .with_resamples(n_resamples)?
        .confidence_interval_with_rng(sample, statistic, rng)?;
    Ok(result.bounds())
}

/// [`bootstrap`] with a fixed seed
pub fn bootstrap_seeded<S>(
    sample: &[f64],
    statistic: &S,
    confidence_level: f64,
    n_resamples: usize,
    seed: u64,
) -> Result<(f64, f64)>
where
    S: Statistic + ?Sized,
{
    let result = Bootstrap::new(sequential(), PercentileBootstrap)
        .with_confidence_level(confidence_level)?
        .with_resamples(n_resamples)?
        .with_seed(seed)
        .confidence_interval(sample, statistic)?;
    Ok(result.bounds())
}

/// Run a bootstrap described by a [`BootstrapConfig`] on `engine`
pub fn bootstrap_with_config<S, E>(
    sample: &[f64],
    statistic: &S,
    config: &BootstrapConfig,
    engine: E,
) -> Result<BootstrapResult>
where
    S: Statistic + ?Sized,
    E: ExecutionEngine,
{
    config.build(engine)?.confidence_interval(sample, statistic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indicator_core::{math, statistic_fn, Error};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_invalid_arguments_checked_first() {
        let mean = statistic_fn(math::mean);
        let mut rng = StdRng::seed_from_u64(1);
        let sample = [1.0, 2.0, 3.0];

        assert!(matches!(
            bootstrap(&sample, &mean, 1.0, 100, &mut rng),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            bootstrap(&sample, &mean, 0.9, 0, &mut rng),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            bootstrap(&[], &mean, 0.9, 100, &mut rng),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let mean = statistic_fn(math::mean);
        let sample = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        let a = bootstrap_seeded(&sample, &mean, 0.9, 1000, 42).unwrap();
        let b = bootstrap_seeded(&sample, &mean, 0.9, 1000, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_seeded_matches_explicit_rng() {
        let mean = statistic_fn(math::mean);
        let sample = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        let mut rng = StdRng::seed_from_u64(42);
        let explicit = bootstrap(&sample, &mean, 0.9, 1000, &mut rng).unwrap();
        let seeded = bootstrap_seeded(&sample, &mean, 0.9, 1000, 42).unwrap();
        assert_eq!(explicit, seeded);
    }

    #[test]
    fn test_with_config() {
        let config = BootstrapConfig {
            n_resamples: 500,
            seed: Some(11),
            ..Default::default()
        };
        let mean = statistic_fn(math::mean);
        let result =
            bootstrap_with_config(&[1.0, 2.0, 3.0, 4.0], &mean, &config, sequential()).unwrap();
        assert_eq!(result.n_resamples, 500);
        assert!(result.interval.lower <= result.interval.upper);
    }
}
