//! Bootstrap confidence intervals
//!
//! This crate estimates the uncertainty of any sample statistic by
//! bootstrap resampling:
//!
//! - **[`Bootstrap`]**: builder-style engine over an execution engine and
//!   an interval method, with an explicit seed or RNG
//! - **Interval methods**: [`PercentileBootstrap`] (default) and
//!   [`BasicBootstrap`]
//! - **[`api`]**: function-style entry points such as [`bootstrap`]
//! - **[`BootstrapConfig`]**: serializable settings
//!
//! # Example
//!
//! ```rust
//! use indicator_confidence::bootstrap;
//! use indicator_moments::Skewness;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let sample = [2.1, 3.4, 1.9, 8.7, 2.2, 3.0, 4.4, 2.8, 12.5, 3.3];
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! // Resamples of a small sample can be constant, so this may fail with a
//! // domain error under the default zero-variance policy.
//! match bootstrap(&sample, &Skewness::new(), 0.90, 2000, &mut rng) {
//!     Ok((lower, upper)) => assert!(lower <= upper),
//!     Err(e) => println!("{e}"),
//! }
//! ```

pub mod api;
mod bootstrap;
mod bootstrap_methods;
pub mod bootstrap_workspace;
mod config;
mod types;

// Re-exports
pub use api::{
    bootstrap, bootstrap_seeded, bootstrap_with_config, DEFAULT_CONFIDENCE_LEVEL,
    DEFAULT_RESAMPLES,
};
pub use bootstrap::{Bootstrap, BootstrapResult};
pub use bootstrap_methods::{BasicBootstrap, BootstrapMethod, IntervalMethod, PercentileBootstrap};
pub use config::BootstrapConfig;
pub use types::{ConfidenceInterval, ConfidenceLevel};
