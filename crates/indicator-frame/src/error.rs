//! Error types for indicator-frame

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Indicator core error: {0}")]
    Core(#[from] indicator_core::Error),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("No values match {0}")]
    EmptySample(String),

    #[error("Row {row} has {actual} values for {expected} year columns")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
