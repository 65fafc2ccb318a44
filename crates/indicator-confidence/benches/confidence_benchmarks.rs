use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use indicator_confidence::{Bootstrap, PercentileBootstrap};
use indicator_core::sequential;
use indicator_moments::{Kurtosis, Mean, Skewness, ZeroVariancePolicy};
use rand::prelude::*;
use rand_distr::Normal;

/// Generate normal data
fn generate_normal_data(size: usize, mean: f64, std: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(mean, std).unwrap();
    (0..size).map(|_| normal.sample(&mut rng)).collect()
}

fn bench_bootstrap_mean(c: &mut Criterion) {
    let mut group = c.benchmark_group("BootstrapMean");
    let bootstrap = Bootstrap::new(sequential(), PercentileBootstrap)
        .with_resamples(1000)
        .unwrap()
        .with_seed(42);

    for size in [50, 500, 5000] {
        let data = generate_normal_data(size, 100.0, 15.0, 42);
        group.bench_with_input(BenchmarkId::new("sequential", size), &data, |b, data| {
            b.iter(|| bootstrap.confidence_interval(black_box(data), &Mean))
        });
    }

    group.finish();
}

fn bench_bootstrap_moments(c: &mut Criterion) {
    let mut group = c.benchmark_group("BootstrapMoments");
    let data = generate_normal_data(500, 0.0, 1.0, 7);
    let bootstrap = Bootstrap::new(sequential(), PercentileBootstrap)
        .with_resamples(1000)
        .unwrap()
        .with_seed(7);

    let skewness = Skewness::with_policy(ZeroVariancePolicy::Propagate);
    let kurtosis = Kurtosis::with_policy(ZeroVariancePolicy::Propagate);

    group.bench_function("skewness", |b| {
        b.iter(|| bootstrap.confidence_interval(black_box(&data), &skewness))
    });
    group.bench_function("kurtosis", |b| {
        b.iter(|| bootstrap.confidence_interval(black_box(&data), &kurtosis))
    });

    group.finish();
}

#[cfg(feature = "parallel")]
fn bench_bootstrap_parallel(c: &mut Criterion) {
    use indicator_core::ParallelEngine;

    let mut group = c.benchmark_group("BootstrapParallel");
    let data = generate_normal_data(5000, 100.0, 15.0, 42);
    let bootstrap = Bootstrap::new(ParallelEngine::new(), PercentileBootstrap)
        .with_resamples(1000)
        .unwrap()
        .with_seed(42);

    group.bench_function("mean_5000", |b| {
        b.iter(|| bootstrap.confidence_interval(black_box(&data), &Mean))
    });

    group.finish();
}

#[cfg(feature = "parallel")]
criterion_group!(
    benches,
    bench_bootstrap_mean,
    bench_bootstrap_moments,
    bench_bootstrap_parallel
);
#[cfg(not(feature = "parallel"))]
criterion_group!(benches, bench_bootstrap_mean, bench_bootstrap_moments);
criterion_main!(benches);
