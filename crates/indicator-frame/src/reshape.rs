//! Wide-to-long reshaping

use crate::table::WideTable;
use std::cmp::Ordering;
use tracing::debug;

/// One `(identifiers, year, value)` observation
#[derive(Debug, Clone, PartialEq)]
pub struct LongRecord {
    pub country_name: String,
    pub country_code: String,
    pub indicator_name: String,
    pub indicator_code: String,
    /// Year parsed from the column label; `None` if the label is not a number
    pub year: Option<i32>,
    pub value: Option<f64>,
}

/// Long-format observations sorted by country name, then year
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LongTable {
    records: Vec<LongRecord>,
}

impl LongTable {
    pub fn records(&self) -> &[LongRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct country names in table order
    pub fn countries(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .records
            .iter()
            .map(|r| r.country_name.as_str())
            .collect();
        names.dedup();
        names
    }
}

impl WideTable {
    /// Unpivot the year columns into one record per `(row, year column)`
    ///
    /// Records are emitted column by column, then stably sorted by country
    /// name and year with unparsable years last. Missing values are kept.
    pub fn melt(&self) -> LongTable {
        let years: Vec<Option<i32>> = self
            .year_columns()
            .iter()
            .map(|label| parse_year(label))
            .collect();

        let mut records = Vec::with_capacity(self.len() * years.len());
        for (col, &year) in years.iter().enumerate() {
            for row in self.records() {
                records.push(LongRecord {
                    country_name: row.country_name.clone(),
                    country_code: row.country_code.clone(),
                    indicator_name: row.indicator_name.clone(),
                    indicator_code: row.indicator_code.clone(),
                    year,
                    value: row.values[col],
                });
            }
        }

        records.sort_by(|a, b| {
            a.country_name
                .cmp(&b.country_name)
                .then_with(|| compare_years(a.year, b.year))
        });

        debug!(records = records.len(), "Melted indicator table");

        LongTable { records }
    }
}

fn parse_year(label: &str) -> Option<i32> {
    let label = label.trim();
    label.parse::<i32>().ok().or_else(|| {
        label
            .parse::<f64>()
            .ok()
            .filter(|y| y.fract() == 0.0 && y.abs() <= i32::MAX as f64)
            .map(|y| y as i32)
    })
}

fn compare_years(a: Option<i32>, b: Option<i32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
