/// Benchmark module for dataset generation and style resolution.
/// Measures generator throughput at demo and stress sizes, and the cost of
/// resolving partial style overrides against the defaults.
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chartkit::{ChartStyleOverrides, DatasetSpec, PaddingOverrides};

fn benchmark_generate_dataset(c: &mut Criterion) {
    c.bench_function("generate_dataset_10", |b| {
        let spec = DatasetSpec::default();
        b.iter(|| black_box(spec.generate()));
    });

    c.bench_function("generate_dataset_10k", |b| {
        let spec = DatasetSpec {
            size: 10_000,
            min: 0.0,
            max: 100.0,
        };
        b.iter(|| black_box(spec.generate()));
    });
}

fn benchmark_resolve_overrides(c: &mut Criterion) {
    let overrides = ChartStyleOverrides {
        width: Some(800),
        container_padding: PaddingOverrides {
            top: Some(0),
            ..Default::default()
        },
        ..Default::default()
    };

    c.bench_function("resolve_chart_overrides", |b| {
        b.iter(|| black_box(overrides.resolve()));
    });
}

criterion_group!(
    benches,
    benchmark_generate_dataset,
    benchmark_resolve_overrides
);
criterion_main!(benches);
