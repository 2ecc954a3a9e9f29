#![allow(missing_docs, reason = "benchmark harness")]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lodestone_core::config::WorldConfig;
use lodestone_core::worldgen::{CollectingBuilder, ColumnSampler, WorldGenerator};
use std::hint::black_box;
use tokio_util::sync::CancellationToken;

fn bench_single_column(c: &mut Criterion) {
    let sampler = ColumnSampler::new(&WorldConfig::default());

    c.bench_function("sample_single_column", |b| {
        b.iter(|| black_box(sampler.sample(black_box(64), black_box(-32))));
    });
}

fn bench_generation_radii(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_diamond");
    for radius in [16i32, 32, 64] {
        let columns = (2 * radius * radius + 2 * radius + 1) as u64;
        group.throughput(criterion::Throughput::Elements(columns));
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, &r| {
            let config = WorldConfig {
                seed: 12_345_678,
                max_load_radius: r,
                ..WorldConfig::default()
            };
            let generator = WorldGenerator::new(config).expect("valid config");
            b.iter(|| {
                let mut builder = CollectingBuilder::default();
                generator
                    .generate(&mut builder, &CancellationToken::new())
                    .expect("generation");
                black_box(builder.placements.len())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_column, bench_generation_radii);
criterion_main!(benches);
