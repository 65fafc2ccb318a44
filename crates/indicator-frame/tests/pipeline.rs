//! End-to-end tests: CSV file to bootstrap interval

mod common;

use approx::assert_relative_eq;
use common::{fixture_path, load_fixture, INFLATION, POPULATION};
use indicator_confidence::{api::bootstrap_seeded, api::bootstrap_with_config, BootstrapConfig};
use indicator_core::sequential;
use indicator_frame::{read_wide_csv, Error, LoadOptions, SampleFilter};
use indicator_moments::{kurtosis, skewness, Kurtosis, Skewness};

#[test]
fn test_load_fixture() {
    let table = load_fixture();
    assert_eq!(table.len(), 8);
    assert_eq!(
        table.year_columns(),
        &["2015", "2016", "2017", "2018", "2019", ""]
    );
    assert_eq!(table.head(2)[1].country_code, "AFG");
    assert!(table.records()[7].values.iter().all(Option::is_none));
}

#[test]
fn test_metadata_rows_must_be_skipped() {
    let result = read_wide_csv(fixture_path("wdi_sample.csv"), &LoadOptions::default());
    assert!(matches!(result, Err(Error::MissingColumn(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let result = read_wide_csv(fixture_path("does_not_exist.csv"), &LoadOptions::default());
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_melt_fixture() {
    let long = load_fixture().melt();
    // 8 rows x 6 non-identifier columns
    assert_eq!(long.len(), 48);
    assert_eq!(
        long.countries(),
        vec!["Afghanistan", "Albania", "Angola", "Aruba"]
    );

    let first = &long.records()[0];
    assert_eq!(first.country_name, "Afghanistan");
    assert_eq!(first.year, Some(2015));
    assert_eq!(first.indicator_code, INFLATION);

    // Years ascend within each country, the unnamed column last
    for pair in long.records().windows(2) {
        if pair[0].country_name == pair[1].country_name {
            match (pair[0].year, pair[1].year) {
                (Some(a), Some(b)) => assert!(a <= b),
                (None, Some(_)) => panic!("missing year sorted before a real year"),
                _ => {}
            }
        }
    }
}

#[test]
fn test_info_fixture() {
    let info = load_fixture().info();
    assert_eq!(info.len(), 6);
    // Angola's population row is empty
    assert_eq!((info[0].label.as_str(), info[0].present, info[0].missing), ("2015", 7, 1));
    // The trailing unnamed column holds no values at all
    assert_eq!((info[5].present, info[5].missing), (0, 8));
}

#[test]
fn test_describe_fixture() {
    let summaries = load_fixture().describe().unwrap();
    assert_eq!(summaries.len(), 6);

    let (label, s2015) = &summaries[0];
    assert_eq!(label, "2015");
    // Four inflation values and three populations; Angola's population is missing
    assert_eq!(s2015.count, 7);
    assert_eq!(s2015.min, -0.662);
    assert_eq!(s2015.max, 33753499.0);
    assert_relative_eq!(s2015.q50, 9.159);

    assert_eq!(summaries[5].1.count, 0);
}

#[test]
fn test_inflation_sample() {
    let long = load_fixture().melt();
    let sample = long
        .sample(&SampleFilter::new().with_indicator_code(INFLATION))
        .unwrap();
    assert_eq!(sample.len(), 20);

    let angola = long
        .sample(
            &SampleFilter::new()
                .with_country_code("AGO")
                .with_indicator_code(INFLATION)
                .with_years(2016, 2017),
        )
        .unwrap();
    assert_eq!(angola, vec![30.695, 29.844]);

    assert!(matches!(
        long.sample(
            &SampleFilter::new()
                .with_country_code("AGO")
                .with_indicator_code(POPULATION)
        ),
        Err(Error::EmptySample(_))
    ));
}

#[test]
fn test_bootstrap_moments_of_indicator() {
    let long = load_fixture().melt();
    let sample = long
        .sample(&SampleFilter::new().with_indicator_code(INFLATION))
        .unwrap();

    let skew = skewness(&sample).unwrap();
    // Angola's double-digit inflation drags the distribution to the right
    assert!(skew > 0.0);
    assert!(kurtosis(&sample).unwrap().is_finite());

    let (lower, upper) = bootstrap_seeded(&sample, &Skewness::new(), 0.90, 2000, 7).unwrap();
    assert!(lower <= upper);
    assert_eq!(
        (lower, upper),
        bootstrap_seeded(&sample, &Skewness::new(), 0.90, 2000, 7).unwrap()
    );

    let config: BootstrapConfig =
        serde_json::from_str(r#"{"n_resamples": 1000, "seed": 3, "confidence_level": 0.95}"#)
            .unwrap();
    let kurt =
        bootstrap_with_config(&sample, &Kurtosis::new(), &config, sequential()).unwrap();
    assert_eq!(kurt.n_resamples, 1000);
    assert_eq!(kurt.interval.confidence_level, 0.95);
    assert!(kurt.interval.lower <= kurt.interval.upper);
}
