//! Criterion benchmarks for the hull engines.
//! Sizes: n in {1e3, 1e4, 1e5, 1e6} per dataset; each iteration hulls a fresh copy.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p hull2d

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use hull2d::prelude::*;
use hull2d::sample::PointSampler;

fn cloud(dataset: Dataset, n: usize, seed: u64) -> Vec<Point> {
    let mut pts = vec![Point::default(); n];
    PointSampler::new(dataset, seed).fill(&mut pts);
    pts
}

fn bench_engines(c: &mut Criterion) {
    for dataset in Dataset::ALL {
        let mut group = c.benchmark_group(format!("hull_{dataset}"));
        group.sample_size(10);
        for &n in &[1_000usize, 10_000, 100_000, 1_000_000] {
            let base = cloud(dataset, n, 42);
            group.throughput(Throughput::Elements(n as u64));
            for engine in Engine::ALL {
                let mut imp = engine.instantiate(n);
                group.bench_with_input(BenchmarkId::new(engine.as_str(), n), &base, |b, base| {
                    b.iter_batched_ref(
                        || base.clone(),
                        |buf| imp.hull(buf),
                        BatchSize::LargeInput,
                    )
                });
            }
        }
        group.finish();
    }
}

criterion_group!(benches, bench_engines);
criterion_main!(benches);
