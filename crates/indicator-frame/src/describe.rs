//! Per-column summary statistics

use crate::{error::Result, table::WideTable};
use indicator_core::math;
use std::fmt;

/// Count, location and spread of one column's present values
///
/// `std` uses the `n - 1` divisor. Quartiles use linear interpolation
/// between order statistics. Every field except `count` is `NaN` for a
/// column with no values; `std` is also `NaN` for a single value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

impl Summary {
    /// Summarize the present values of a column
    pub fn from_values(values: &[Option<f64>]) -> Result<Self> {
        let present: Vec<f64> = values.iter().flatten().copied().collect();
        if present.is_empty() {
            return Ok(Self {
                count: 0,
                mean: f64::NAN,
                std: f64::NAN,
                min: f64::NAN,
                q25: f64::NAN,
                q50: f64::NAN,
                q75: f64::NAN,
                max: f64::NAN,
            });
        }

        let sorted = math::sorted(&present);
        Ok(Self {
            count: sorted.len(),
            mean: math::mean(&sorted),
            std: math::sample_variance(&sorted).sqrt(),
            min: sorted[0],
            q25: math::quantile_sorted(&sorted, 0.25)?,
            q50: math::quantile_sorted(&sorted, 0.50)?,
            q75: math::quantile_sorted(&sorted, 0.75)?,
            max: sorted[sorted.len() - 1],
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "count={} mean={:.4} std={:.4} min={:.4} 25%={:.4} 50%={:.4} 75%={:.4} max={:.4}",
            self.count, self.mean, self.std, self.min, self.q25, self.q50, self.q75, self.max
        )
    }
}

/// Present and missing cell counts of one year column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub label: String,
    pub present: usize,
    pub missing: usize,
}

impl fmt::Display for ColumnInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} non-null, {} missing",
            self.label, self.present, self.missing
        )
    }
}

impl WideTable {
    /// Per year column, how many cells hold a value
    pub fn info(&self) -> Vec<ColumnInfo> {
        self.year_columns()
            .iter()
            .enumerate()
            .map(|(col, label)| {
                let present = self
                    .records()
                    .iter()
                    .filter(|r| r.values[col].is_some())
                    .count();
                ColumnInfo {
                    label: label.clone(),
                    present,
                    missing: self.len() - present,
                }
            })
            .collect()
    }

    /// One `(column label, summary)` pair per year column, in file order
    pub fn describe(&self) -> Result<Vec<(String, Summary)>> {
        self.year_columns()
            .iter()
            .enumerate()
            .map(|(col, label)| {
                let values: Vec<Option<f64>> =
                    self.records().iter().map(|r| r.values[col]).collect();
                Ok((label.clone(), Summary::from_values(&values)?))
            })
            .collect()
    }
}
