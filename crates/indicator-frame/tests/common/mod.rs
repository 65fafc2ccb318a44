//! Shared fixtures for indicator-frame integration tests

#![allow(dead_code)]

use indicator_frame::{read_wide_csv, LoadOptions, WideTable};
use std::path::PathBuf;

pub const INFLATION: &str = "FP.CPI.TOTL.ZG";
pub const POPULATION: &str = "SP.POP.TOTL";

/// Path of a file under `tests/data`
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

/// The World Bank-style fixture, metadata lines skipped
pub fn load_fixture() -> WideTable {
    read_wide_csv(
        fixture_path("wdi_sample.csv"),
        &LoadOptions::default().with_skip_rows(4),
    )
    .unwrap()
}
