//! Scene construction benchmarks
//!
//! Scenes are rebuilt from scratch on load and on every selection change,
//! so construction cost bounds the worst-case frame hitch.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use maskviz::chart::{build_bars, build_scatter, ScatterMetric};
use maskviz::config::ChartConfig;
use maskviz::types::{Dataset, StateRecord};

fn synthetic_dataset(records: usize) -> Dataset {
    let regions = ["West", "South", "Northeast", "Midwest"];
    let records = (0..records)
        .map(|i| StateRecord {
            state: format!("State {i}"),
            state_code: format!("S{i}"),
            region: regions[i % regions.len()].to_string(),
            cases: 6_000.0 + i as f64 * 40_000.0,
            deaths: 100.0 + i as f64 * 600.0,
            mask_use: 5_000.0 + i as f64 * 12_000.0,
            population: 600_000.0 + i as f64 * 700_000.0,
            mask_shares: [0.5, 0.2, 0.15, 0.1, 0.05],
        })
        .collect();
    Dataset::new(records)
}

fn bench_build_scatter(c: &mut Criterion) {
    let dataset = synthetic_dataset(50);
    let config = ChartConfig::default();

    c.bench_function("build_scatter_deaths_50", |b| {
        b.iter(|| build_scatter(black_box(&dataset), ScatterMetric::Deaths, &config))
    });
    c.bench_function("build_scatter_mask_use_50", |b| {
        b.iter(|| build_scatter(black_box(&dataset), ScatterMetric::MaskUse, &config))
    });
}

fn bench_build_bars(c: &mut Criterion) {
    let dataset = synthetic_dataset(50);
    let config = ChartConfig::default();
    let record = &dataset.records()[0];

    c.bench_function("build_bars", |b| {
        b.iter(|| build_bars(black_box(record), &config))
    });
}

criterion_group!(benches, bench_build_scatter, bench_build_bars);
criterion_main!(benches);
