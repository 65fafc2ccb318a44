//! World Bank-style indicator tables
//!
//! Loads a wide CSV (identifier columns plus one column per year),
//! reshapes it into long `(country, indicator, year, value)` records and
//! extracts plain numeric samples for the statistics crates.
//!
//! # Example
//!
//! ```rust
//! use indicator_frame::{read_wide_csv_from_reader, LoadOptions, SampleFilter};
//!
//! let csv = "\
//! Country Name,Country Code,Indicator Name,Indicator Code,2000,2001
//! Aruba,ABW,Population,SP.POP.TOTL,90853,92898
//! ";
//! let table = read_wide_csv_from_reader(csv.as_bytes(), &LoadOptions::default())?;
//! let long = table.melt();
//! let sample = long.sample(&SampleFilter::new().with_country_code("ABW"))?;
//! assert_eq!(sample, vec![90853.0, 92898.0]);
//! # Ok::<(), indicator_frame::Error>(())
//! ```

mod describe;
mod error;
mod reshape;
mod sample;
mod table;

pub use describe::{ColumnInfo, Summary};
pub use error::{Error, Result};
pub use reshape::{LongRecord, LongTable};
pub use sample::SampleFilter;
pub use table::{
    read_wide_csv, read_wide_csv_from_reader, LoadOptions, WideRecord, WideTable, COUNTRY_CODE,
    COUNTRY_NAME, ID_COLUMNS, INDICATOR_CODE, INDICATOR_NAME,
};
