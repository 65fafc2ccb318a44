//! Extracting numeric samples from long tables

use crate::{
    error::{Error, Result},
    reshape::{LongRecord, LongTable},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Selects long records by country, indicator and year range
///
/// Unset fields match everything. Year bounds are inclusive; records whose
/// year could not be parsed never match a bounded range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleFilter {
    pub country_code: Option<String>,
    pub indicator_code: Option<String>,
    pub from_year: Option<i32>,
    pub to_year: Option<i32>,
}

impl SampleFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_country_code(mut self, code: impl Into<String>) -> Self {
        self.country_code = Some(code.into());
        self
    }

    pub fn with_indicator_code(mut self, code: impl Into<String>) -> Self {
        self.indicator_code = Some(code.into());
        self
    }

    /// Restrict to years in `from..=to`
    pub fn with_years(mut self, from: i32, to: i32) -> Self {
        self.from_year = Some(from);
        self.to_year = Some(to);
        self
    }

    pub fn matches(&self, record: &LongRecord) -> bool {
        if let Some(code) = &self.country_code {
            if record.country_code != *code {
                return false;
            }
        }
        if let Some(code) = &self.indicator_code {
            if record.indicator_code != *code {
                return false;
            }
        }
        if self.from_year.is_none() && self.to_year.is_none() {
            return true;
        }
        match record.year {
            Some(year) => {
                self.from_year.map_or(true, |from| year >= from)
                    && self.to_year.map_or(true, |to| year <= to)
            }
            None => false,
        }
    }
}

impl fmt::Display for SampleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "country={} indicator={}",
            self.country_code.as_deref().unwrap_or("*"),
            self.indicator_code.as_deref().unwrap_or("*"),
        )?;
        match (self.from_year, self.to_year) {
            (None, None) => Ok(()),
            (from, to) => write!(
                f,
                " years={}..={}",
                from.map_or_else(|| "*".to_string(), |y| y.to_string()),
                to.map_or_else(|| "*".to_string(), |y| y.to_string()),
            ),
        }
    }
}

impl LongTable {
    /// Present values of the records matching `filter`, in table order
    pub fn sample(&self, filter: &SampleFilter) -> Result<Vec<f64>> {
        let values: Vec<f64> = self
            .records()
            .iter()
            .filter(|r| filter.matches(r))
            .filter_map(|r| r.value)
            .collect();

        if values.is_empty() {
            return Err(Error::EmptySample(filter.to_string()));
        }

        debug!(n = values.len(), filter = %filter, "Extracted sample");
        Ok(values)
    }
}
