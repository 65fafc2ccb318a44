//! Classical standardized moments: skewness and excess kurtosis
//!
//! Both statistics standardize by the population standard deviation
//! (divisor `n`), so `skewness` is the mean of `((x - mean) / std)^3`
//! and `kurtosis` is the mean of `((x - mean) / std)^4` minus 3.

use crate::types::{Moments, ZeroVariancePolicy};
use indicator_core::{math, Error, Result};

/// Arithmetic mean of a non-empty sample
pub fn mean(sample: &[f64]) -> Result<f64> {
    ensure_non_empty(sample, "mean")?;
    Ok(math::mean(sample))
}

/// Population standard deviation (divisor `n`) of a non-empty sample
pub fn population_std(sample: &[f64]) -> Result<f64> {
    ensure_non_empty(sample, "standard deviation")?;
    Ok(math::population_variance(sample).sqrt())
}

/// Skewness of a sample
///
/// Fails with [`Error::InvalidInput`] for an empty sample and with
/// [`Error::Domain`] when all values are equal.
///
/// # Examples
///
/// ```rust
/// use indicator_moments::skewness;
///
/// let s = skewness(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert!(s.abs() < 1e-12);
/// ```
pub fn skewness(sample: &[f64]) -> Result<f64> {
    skewness_with_policy(sample, ZeroVariancePolicy::Error)
}

/// Excess kurtosis of a sample
///
/// Same preconditions as [`skewness`]. A normal distribution yields
/// approximately zero.
pub fn kurtosis(sample: &[f64]) -> Result<f64> {
    kurtosis_with_policy(sample, ZeroVariancePolicy::Error)
}

/// Skewness with an explicit zero-variance policy
pub fn skewness_with_policy(sample: &[f64], policy: ZeroVariancePolicy) -> Result<f64> {
    standardized_moment(sample, 3, policy, "skewness")
}

/// Excess kurtosis with an explicit zero-variance policy
pub fn kurtosis_with_policy(sample: &[f64], policy: ZeroVariancePolicy) -> Result<f64> {
    Ok(standardized_moment(sample, 4, policy, "kurtosis")? - 3.0)
}

/// Mean of `((x - mean) / std)^order` over the sample
fn standardized_moment(
    sample: &[f64],
    order: i32,
    policy: ZeroVariancePolicy,
    operation: &str,
) -> Result<f64> {
    ensure_non_empty(sample, operation)?;

    let n = sample.len() as f64;
    let m = math::mean(sample);
    let std_dev = math::population_variance(sample).sqrt();

    if is_degenerate(sample, std_dev) {
        return match policy {
            ZeroVariancePolicy::Error => Err(Error::zero_variance(operation)),
            ZeroVariancePolicy::Propagate => Ok(f64::NAN),
        };
    }

    Ok(sample
        .iter()
        .map(|&x| ((x - m) / std_dev).powi(order))
        .sum::<f64>()
        / n)
}

impl Moments {
    /// Compute mean, standard deviation, skewness and excess kurtosis
    ///
    /// With [`ZeroVariancePolicy::Propagate`] a constant sample yields
    /// `std_dev == 0` and `NaN` for the two standardized moments.
    pub fn compute(sample: &[f64], policy: ZeroVariancePolicy) -> Result<Self> {
        ensure_non_empty(sample, "moments")?;

        let n = sample.len();
        let mean = math::mean(sample);
        let std_dev = math::population_variance(sample).sqrt();

        if is_degenerate(sample, std_dev) {
            return match policy {
                ZeroVariancePolicy::Error => Err(Error::zero_variance("moments")),
                ZeroVariancePolicy::Propagate => Ok(Self {
                    n,
                    mean,
                    std_dev,
                    skewness: f64::NAN,
                    kurtosis: f64::NAN,
                }),
            };
        }

        let (m3, m4) = sample.iter().fold((0.0, 0.0), |(m3, m4), &x| {
            let z = (x - mean) / std_dev;
            let z2 = z * z;
            (m3 + z2 * z, m4 + z2 * z2)
        });

        Ok(Self {
            n,
            mean,
            std_dev,
            skewness: m3 / n as f64,
            kurtosis: m4 / n as f64 - 3.0,
        })
    }
}

fn ensure_non_empty(sample: &[f64], operation: &str) -> Result<()> {
    if sample.is_empty() {
        return Err(Error::empty_input(operation));
    }
    Ok(())
}

/// A sample without two distinct values, or whose spread underflowed
fn is_degenerate(sample: &[f64], std_dev: f64) -> bool {
    std_dev == 0.0 || sample.iter().all(|&x| x == sample[0])
}
