//! Error types for indicator statistics
//!
//! Provides a unified error type for all indicator-stats crates.

use thiserror::Error;

/// Core error type for statistical operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// The statistic is undefined for this sample (e.g. zero variance)
    #[error("Domain error: {0}")]
    Domain(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for an empty sample
    pub fn empty_input(operation: &str) -> Self {
        Self::InvalidInput(format!("{operation} requires a non-empty sample"))
    }

    /// Create an error for a sample whose standard deviation is zero
    pub fn zero_variance(operation: &str) -> Self {
        Self::Domain(format!(
            "{operation} is undefined for a sample with zero standard deviation"
        ))
    }

    /// Create an error for invalid quantile
    pub fn invalid_quantile(p: f64) -> Self {
        Self::InvalidParameter(format!("Quantile {p} must be in [0, 1]"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("confidence level must be in (0, 1)".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid parameter: confidence level must be in (0, 1)"
        );

        let err = Error::InvalidInput("empty".to_string());
        assert_eq!(err.to_string(), "Invalid input: empty");

        let err = Error::InsufficientData { expected: 10, actual: 5 };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 10 samples, got 5"
        );

        let err = Error::Domain("sigma is zero".to_string());
        assert_eq!(err.to_string(), "Domain error: sigma is zero");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::empty_input("skewness");
        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(
            err.to_string(),
            "Invalid input: skewness requires a non-empty sample"
        );

        let err = Error::zero_variance("kurtosis");
        assert!(matches!(err, Error::Domain(_)));
        assert!(err.to_string().contains("zero standard deviation"));

        let err = Error::invalid_quantile(1.5);
        assert_eq!(
            err.to_string(),
            "Invalid parameter: Quantile 1.5 must be in [0, 1]"
        );
    }

    #[test]
    fn test_error_from_io_error() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => assert!(err.to_string().contains("file not found")),
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: Error = anyhow::anyhow!("custom error message").into();
        assert!(matches!(err, Error::Other(_)));
        assert!(err.to_string().contains("custom error message"));
    }

    #[test]
    fn test_error_chaining() {
        fn inner() -> Result<()> {
            Err(Error::Computation("inner error".to_string()))
        }

        fn outer() -> Result<()> {
            inner().map_err(|e| Error::Execution(format!("outer error: {e}")))
        }

        let err = outer().unwrap_err();
        assert!(err.to_string().contains("outer error"));
        assert!(err.to_string().contains("inner error"));
    }
}
