//! Moment statistics
//!
//! Mean, population standard deviation, skewness and excess kurtosis of
//! a numeric sample, as free functions and as [`indicator_core::Statistic`]
//! implementations that can be handed to a bootstrap.
//!
//! # Zero variance
//!
//! Standardized moments are undefined when every value in the sample is
//! the same. The free functions [`skewness`] and [`kurtosis`] fail with
//! [`indicator_core::Error::Domain`]; [`ZeroVariancePolicy::Propagate`]
//! returns `NaN` instead.
//!
//! # Example
//!
//! ```rust
//! use indicator_moments::{kurtosis, skewness, Moments, ZeroVariancePolicy};
//!
//! let sample = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! let m = Moments::compute(&sample, ZeroVariancePolicy::Error).unwrap();
//! assert_eq!(m.mean, 5.0);
//! assert_eq!(m.std_dev, 2.0);
//! assert!((m.skewness - skewness(&sample).unwrap()).abs() < 1e-12);
//! assert!((m.kurtosis - kurtosis(&sample).unwrap()).abs() < 1e-12);
//! ```

mod moments;
mod statistics;
mod types;

pub use moments::{
    kurtosis, kurtosis_with_policy, mean, population_std, skewness, skewness_with_policy,
};
pub use statistics::{Kurtosis, Mean, PopulationStd, Skewness};
pub use types::{Moments, ZeroVariancePolicy};
