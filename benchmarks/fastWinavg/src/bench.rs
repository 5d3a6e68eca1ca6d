//! Windowed averaging benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (10K to 1M samples)
//! - Window radius
//! - Boundary policies and chained passes
//! - Streaming chunk sizes
//!
//! For serial execution, use `FASTWINAVG_MODE=serial cargo bench`.
//! For parallel execution (default), use `FASTWINAVG_MODE=parallel cargo bench`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fastWinavg::prelude::*;
use fastWinavg_bench::{box_window, gaussian_window, noisy_sine, random_walk, spiky};
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FASTWINAVG_MODE").ok().as_deref() {
        Some("serial") => (false, "serial"),
        _ => (true, "parallel"),
    }
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("scalability_{}", mode_name));
    group.sample_size(50);

    let (window, sum) = gaussian_window(3.0);

    for size in [10_000, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(size as u64));

        let y = noisy_sine(size, 42);
        let model = Winavg::new()
            .window(&window)
            .normalization(sum)
            .boundary_policy(Reflect)
            .adapter(Batch)
            .parallel(use_parallel)
            .build()
            .unwrap();

        group.bench_with_input(BenchmarkId::new("batch", size), &size, |b, _| {
            b.iter(|| model.smooth(black_box(&y)).unwrap())
        });
    }
    group.finish();
}

fn bench_radius(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("radius_{}", mode_name));
    group.sample_size(50);

    let y = noisy_sine(100_000, 42);

    for w in [1, 4, 16, 64, 256] {
        let (window, sum) = box_window(w);
        let model = Winavg::new()
            .window(&window)
            .normalization(sum)
            .adapter(Batch)
            .parallel(use_parallel)
            .build()
            .unwrap();

        group.bench_with_input(BenchmarkId::new("box", w), &w, |b, _| {
            b.iter(|| model.smooth(black_box(&y)).unwrap())
        });
    }
    group.finish();
}

fn bench_policies(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("policies_{}", mode_name));
    group.sample_size(50);

    let y = random_walk(100_000, 7);
    let (window, sum) = gaussian_window(8.0);

    for policy in [Zero, Extend, Reflect, Renormalize] {
        let model = Winavg::new()
            .window(&window)
            .normalization(sum)
            .boundary_policy(policy)
            .adapter(Batch)
            .parallel(use_parallel)
            .build()
            .unwrap();

        group.bench_function(policy.name(), |b| {
            b.iter(|| model.smooth(black_box(&y)).unwrap())
        });
    }
    group.finish();
}

fn bench_passes(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("passes_{}", mode_name));
    group.sample_size(30);

    let y = spiky(100_000, 11);
    let (window, sum) = box_window(2);

    for passes in [1, 2, 4, 8] {
        let model = Winavg::new()
            .window(&window)
            .normalization(sum)
            .boundary_policy(Extend)
            .passes(passes)
            .adapter(Batch)
            .parallel(use_parallel)
            .build()
            .unwrap();

        group.bench_with_input(BenchmarkId::new("box2", passes), &passes, |b, _| {
            b.iter(|| model.smooth(black_box(&y)).unwrap())
        });
    }
    group.finish();
}

fn bench_streaming(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("streaming_{}", mode_name));
    group.sample_size(30);

    let size = 200_000;
    let y = noisy_sine(size, 3);
    let (window, sum) = gaussian_window(4.0);
    group.throughput(Throughput::Elements(size as u64));

    for chunk_size in [256, 4_096, 65_536] {
        group.bench_with_input(
            BenchmarkId::new("chunked", chunk_size),
            &chunk_size,
            |b, &chunk_size| {
                b.iter(|| {
                    let mut processor = Winavg::new()
                        .window(&window)
                        .normalization(sum)
                        .boundary_policy(Reflect)
                        .chunk_size(chunk_size)
                        .adapter(Streaming)
                        .parallel(use_parallel)
                        .build()
                        .unwrap();

                    let mut emitted = 0;
                    for chunk in y.chunks(chunk_size) {
                        emitted += processor.process_chunk(black_box(chunk)).unwrap().len();
                    }
                    emitted + processor.finalize().unwrap().len()
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_radius,
    bench_policies,
    bench_passes,
    bench_streaming,
);
criterion_main!(benches);
