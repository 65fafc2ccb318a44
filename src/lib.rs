//! Skewness, kurtosis and bootstrap confidence intervals for country
//! indicator data
//!
//! This crate re-exports the workspace:
//!
//! - [`indicator_core`]: errors, the [`Statistic`] trait and execution engines
//! - [`indicator_moments`]: mean, population standard deviation, skewness, excess kurtosis
//! - [`indicator_confidence`]: bootstrap confidence intervals
//! - [`indicator_frame`]: World Bank-style CSV loading and reshaping
//!
//! # Example
//!
//! ```rust
//! use indicator_stats::{bootstrap, kurtosis, skewness, Skewness, ZeroVariancePolicy};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let sample = [1.0, 2.0, 3.0, 4.0, 5.0];
//! assert!(skewness(&sample).unwrap().abs() < 1e-12);
//! assert!((kurtosis(&sample).unwrap() + 1.3).abs() < 1e-12);
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let sample = [2.1, 3.4, 1.9, 5.6, 2.2, 8.0, 3.3, 2.7, 4.1, 2.9];
//! let skew = Skewness::with_policy(ZeroVariancePolicy::Propagate);
//! let (lower, upper) = bootstrap(&sample, &skew, 0.90, 1000, &mut rng).unwrap();
//! assert!(lower <= upper);
//! ```

pub use indicator_confidence;
pub use indicator_core;
pub use indicator_frame;
pub use indicator_moments;

pub use indicator_confidence::{
    api::{bootstrap, bootstrap_seeded, bootstrap_with_config},
    Bootstrap, BootstrapConfig, BootstrapResult, ConfidenceInterval, IntervalMethod,
};
pub use indicator_core::{Error, Result, Statistic};
pub use indicator_moments::{kurtosis, skewness, Kurtosis, Moments, Skewness, ZeroVariancePolicy};
