//! Benchmarks for the parameter-efficiency arithmetic

#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, Criterion};
use lora_primer::{DemoConfig, ParameterReport};

fn benchmark_report(c: &mut Criterion) {
    let config = DemoConfig::builtin();

    let mut group = c.benchmark_group("report");
    group.bench_function("compute_builtin_128_layers", |b| {
        b.iter(|| ParameterReport::compute(&config.layers, &config.lora).unwrap());
    });
    group.bench_function("render", |b| {
        let report = ParameterReport::compute(&config.layers, &config.lora).unwrap();
        b.iter(|| report.render());
    });
    group.finish();
}

criterion_group!(benches, benchmark_report);
criterion_main!(benches);
