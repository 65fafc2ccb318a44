//! The statistic abstraction
//!
//! A statistic reduces a sample to a single number. Anything that can be
//! bootstrapped implements [`Statistic`]: the named estimators in
//! `indicator-moments`, closures returning `Result<f64>`, and plain
//! `f64`-returning closures wrapped with [`statistic_fn`].

use crate::Result;

/// A pure function from a sample to a single real number
///
/// Implementations must be deterministic and free of side effects. An
/// error returned from [`Statistic::evaluate`] aborts any enclosing
/// resampling loop.
pub trait Statistic: Send + Sync {
    /// Evaluate the statistic on a sample
    fn evaluate(&self, sample: &[f64]) -> Result<f64>;

    /// Short name used in logs and summaries
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> Statistic for F
where
    F: Fn(&[f64]) -> Result<f64> + Send + Sync,
{
    fn evaluate(&self, sample: &[f64]) -> Result<f64> {
        self(sample)
    }
}

/// Adapter for infallible closures
///
/// Created by [`statistic_fn`].
#[derive(Clone)]
pub struct FnStatistic<F> {
    f: F,
    name: &'static str,
}

impl<F> FnStatistic<F> {
    /// Attach a display name to the statistic
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

impl<F> Statistic for FnStatistic<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    fn evaluate(&self, sample: &[f64]) -> Result<f64> {
        Ok((self.f)(sample))
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// Wrap an `f64`-returning closure as a [`Statistic`]
///
/// # Examples
///
/// ```rust
/// use indicator_core::{statistic_fn, Statistic};
///
/// let max = statistic_fn(|s: &[f64]| s.iter().copied().fold(f64::MIN, f64::max)).named("max");
/// assert_eq!(max.evaluate(&[1.0, 4.0, 2.0]).unwrap(), 4.0);
/// assert_eq!(max.name(), "max");
/// ```
pub fn statistic_fn<F>(f: F) -> FnStatistic<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    FnStatistic { f, name: "custom" }
}
