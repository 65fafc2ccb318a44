//! Core traits and types for indicator statistics
//!
//! This crate holds the pieces shared by the rest of the workspace:
//!
//! - [`Error`] / [`Result`]: the unified error type
//! - [`Statistic`]: a typed sample-to-number function, the unit of work
//!   for resampling
//! - [`execution`]: sequential and Rayon-backed engines for independent
//!   batches of work
//! - [`math`]: means, variances and the linear-interpolation quantile
//!
//! # Example
//!
//! ```rust
//! use indicator_core::{math, statistic_fn, Statistic};
//!
//! let median = statistic_fn(|s: &[f64]| math::quantile(s, 0.5).unwrap_or(f64::NAN));
//! assert_eq!(median.evaluate(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
//! ```

pub mod error;
pub mod execution;
pub mod math;
pub mod traits;

pub use error::{Error, Result};

pub use execution::{
    sequential, ExecutionEngine, ExecutionMode, ExecutionStrategy, SequentialEngine,
};
#[cfg(feature = "parallel")]
pub use execution::ParallelEngine;

pub use traits::{statistic_fn, FnStatistic, Statistic};
