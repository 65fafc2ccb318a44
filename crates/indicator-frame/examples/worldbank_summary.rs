//! Summarize one indicator series from a World Bank CSV export
//!
//! ```text
//! cargo run -p indicator-frame --example worldbank_summary -- \
//!     API_SP.POP.TOTL.csv SP.POP.TOTL [bootstrap.json]
//! ```
//!
//! Set `RUST_LOG=debug` to see loading and bootstrap progress.

use anyhow::Context;
use indicator_confidence::{api::bootstrap_with_config, BootstrapConfig, ConfidenceLevel};
use indicator_core::sequential;
use indicator_frame::{read_wide_csv, LoadOptions, SampleFilter};
use indicator_moments::{Kurtosis, Moments, Skewness, ZeroVariancePolicy};
use tracing_subscriber::EnvFilter;

// World Bank downloads start with four lines of metadata
const WDI_METADATA_ROWS: usize = 4;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .context("usage: worldbank_summary <csv> <indicator code> [config.json]")?;
    let indicator = args.next().context("missing indicator code")?;
    let config = match args.next() {
        Some(config_path) => {
            let text = std::fs::read_to_string(&config_path)
                .with_context(|| format!("reading {config_path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {config_path}"))?
        }
        None => BootstrapConfig::default(),
    };
    config.validate()?;

    let table = read_wide_csv(&path, &LoadOptions::default().with_skip_rows(WDI_METADATA_ROWS))?;

    println!("=== Head ===");
    for record in table.head(5) {
        println!(
            "  {:<30} {:<5} {:<20} {} values",
            record.country_name,
            record.country_code,
            record.indicator_code,
            record.values.iter().flatten().count()
        );
    }

    println!("\n=== Info ===");
    println!("  {} rows, {} year columns", table.len(), table.year_columns().len());
    for column in table.info() {
        println!("  {column}");
    }

    println!("\n=== Describe ===");
    for (label, summary) in table.describe()? {
        if summary.count > 0 {
            println!("  {label:>6}: {summary}");
        }
    }

    let long = table.melt();
    let sample = long.sample(&SampleFilter::new().with_indicator_code(indicator.as_str()))?;

    println!("\n=== {indicator} ({} observations) ===", sample.len());
    let moments = Moments::compute(&sample, ZeroVariancePolicy::Propagate)?;
    println!("  {moments}");

    let skewness = Skewness::with_policy(ZeroVariancePolicy::Propagate);
    let kurtosis = Kurtosis::with_policy(ZeroVariancePolicy::Propagate);

    let level = ConfidenceLevel::new(config.confidence_level)?;
    for (name, result) in [
        ("skewness", bootstrap_with_config(&sample, &skewness, &config, sequential())?),
        ("kurtosis", bootstrap_with_config(&sample, &kurtosis, &config, sequential())?),
    ] {
        let interval = result.interval;
        if interval.is_undefined() {
            println!("  {name} {:.4}, {level} CI undefined (constant resamples)", result.estimate);
            continue;
        }
        println!(
            "  {name} {interval} (+/- {:.4}, {} resamples)",
            interval.margin_of_error(),
            result.n_resamples
        );
    }

    Ok(())
}
