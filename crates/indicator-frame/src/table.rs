//! Wide-format indicator tables and CSV loading
//!
//! A World Bank-style export has four identifier columns followed by one
//! column per year. Cells that are empty or not numeric are kept as
//! missing values.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

pub const COUNTRY_NAME: &str = "Country Name";
pub const COUNTRY_CODE: &str = "Country Code";
pub const INDICATOR_NAME: &str = "Indicator Name";
pub const INDICATOR_CODE: &str = "Indicator Code";

/// Identifier columns, in output order
pub const ID_COLUMNS: [&str; 4] = [COUNTRY_NAME, COUNTRY_CODE, INDICATOR_NAME, INDICATOR_CODE];

/// Options for reading a wide CSV file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Physical lines to drop before the header row (WDI exports carry
    /// four lines of metadata)
    pub skip_rows: usize,
}

impl LoadOptions {
    pub fn with_skip_rows(mut self, skip_rows: usize) -> Self {
        self.skip_rows = skip_rows;
        self
    }
}

/// One country/indicator row with a value per year column
#[derive(Debug, Clone, PartialEq)]
pub struct WideRecord {
    pub country_name: String,
    pub country_code: String,
    pub indicator_name: String,
    pub indicator_code: String,
    /// Aligned with [`WideTable::year_columns`]
    pub values: Vec<Option<f64>>,
}

/// A wide-format table: identifiers plus one column per year
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WideTable {
    year_columns: Vec<String>,
    records: Vec<WideRecord>,
}

impl WideTable {
    /// Build a table, checking every record has one value per year column
    pub fn new(year_columns: Vec<String>, records: Vec<WideRecord>) -> Result<Self> {
        if let Some((row, record)) = records
            .iter()
            .enumerate()
            .find(|(_, r)| r.values.len() != year_columns.len())
        {
            return Err(Error::RaggedRow {
                row,
                expected: year_columns.len(),
                actual: record.values.len(),
            });
        }
        Ok(Self {
            year_columns,
            records,
        })
    }

    /// Labels of the non-identifier columns, in file order
    pub fn year_columns(&self) -> &[String] {
        &self.year_columns
    }

    pub fn records(&self) -> &[WideRecord] {
        &self.records
    }

    /// The first `n` records
    pub fn head(&self, n: usize) -> &[WideRecord] {
        &self.records[..n.min(self.records.len())]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Values of one year column, missing cells included
    pub fn column(&self, label: &str) -> Result<Vec<Option<f64>>> {
        let idx = self
            .year_columns
            .iter()
            .position(|c| c == label)
            .ok_or_else(|| Error::MissingColumn(label.to_string()))?;
        Ok(self.records.iter().map(|r| r.values[idx]).collect())
    }
}

/// Read a wide CSV file from disk
pub fn read_wide_csv<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<WideTable> {
    let path = path.as_ref();
    info!(path = %path.display(), skip_rows = options.skip_rows, "Loading indicator table");
    let file = File::open(path)?;
    read_wide_csv_from_reader(file, options)
}

/// Read a wide CSV from any reader
pub fn read_wide_csv_from_reader<R: Read>(reader: R, options: &LoadOptions) -> Result<WideTable> {
    let mut reader = BufReader::new(reader);
    // Skipped lines are never decoded, so metadata need not be UTF-8
    let mut discarded = Vec::new();
    for _ in 0..options.skip_rows {
        discarded.clear();
        if reader.read_until(b'\n', &mut discarded)? == 0 {
            break;
        }
    }

    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let id_indices = ID_COLUMNS
        .iter()
        .map(|name| {
            headers
                .iter()
                .position(|h| h == *name)
                .ok_or_else(|| Error::MissingColumn((*name).to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    let year_indices: Vec<usize> = (0..headers.len())
        .filter(|i| !id_indices.contains(i))
        .collect();
    let year_columns: Vec<String> = year_indices
        .iter()
        .map(|&i| headers.get(i).unwrap_or_default().to_string())
        .collect();

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let field = |i: usize| row.get(i).unwrap_or_default().to_string();
        records.push(WideRecord {
            country_name: field(id_indices[0]),
            country_code: field(id_indices[1]),
            indicator_name: field(id_indices[2]),
            indicator_code: field(id_indices[3]),
            values: year_indices
                .iter()
                .map(|&i| parse_value(row.get(i).unwrap_or_default()))
                .collect(),
        });
    }

    debug!(
        rows = records.len(),
        year_columns = year_columns.len(),
        "Indicator table loaded"
    );

    WideTable::new(year_columns, records)
}

/// Numeric cell value; empty or non-numeric cells are missing
fn parse_value(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}
