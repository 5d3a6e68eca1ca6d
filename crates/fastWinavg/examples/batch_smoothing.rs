//! fastWinavg Smoothing Examples
//!
//! This example demonstrates:
//! - Building a Gaussian window on the caller side
//! - Parallel batch averaging and the sequential fallback
//! - Chunked streaming that reproduces the batch result
//! - `ndarray` integration

use fastWinavg::prelude::*;
use ndarray::Array1;
use std::time::Instant;

fn main() -> Result<(), WinavgError> {
    println!("{}", "=".repeat(80));
    println!("fastWinavg Smoothing Examples");
    println!("{}", "=".repeat(80));
    println!();

    let (window, sum) = gaussian_window(2.0);
    let n = 200_000;
    let signal: Vec<f64> = (0..n)
        .map(|i| {
            let t = i as f64 * 0.001;
            (t * 3.0).sin() + 0.3 * (t * 97.0).sin()
        })
        .collect();

    example_1_parallel_batch(&signal, &window, sum)?;
    example_2_sequential_fallback(&signal, &window, sum)?;
    example_3_streaming(&signal, &window, sum)?;
    example_4_ndarray(&window, sum)?;

    Ok(())
}

/// Truncated Gaussian with radius `ceil(3 * sigma)` and its weight sum.
fn gaussian_window(sigma: f64) -> (Vec<f64>, f64) {
    let radius = (3.0 * sigma).ceil() as i64;
    let weights: Vec<f64> = (-radius..=radius)
        .map(|k| (-((k * k) as f64) / (2.0 * sigma * sigma)).exp())
        .collect();
    let sum = weights.iter().sum();
    (weights, sum)
}

/// Example 1: Parallel Batch
fn example_1_parallel_batch(signal: &[f64], window: &[f64], sum: f64) -> Result<(), WinavgError> {
    println!("Example 1: Parallel Batch");
    println!("{}", "-".repeat(80));

    let start = Instant::now();
    let model = Winavg::new()
        .window(window)
        .normalization(sum)
        .boundary_policy(Reflect)
        .passes(3) // Three chained passes
        .adapter(Batch)
        .build()?;

    let result = model.smooth(signal)?;
    println!("Processed {} points in {:?}", signal.len(), start.elapsed());
    println!("First value: {:.6}", result.y[0]);
    println!();
    Ok(())
}

/// Example 2: Sequential Fallback
fn example_2_sequential_fallback(
    signal: &[f64],
    window: &[f64],
    sum: f64,
) -> Result<(), WinavgError> {
    println!("Example 2: Sequential Fallback");
    println!("{}", "-".repeat(80));

    let build = |parallel: bool| {
        Winavg::new()
            .window(window)
            .normalization(sum)
            .boundary_policy(Reflect)
            .adapter(Batch)
            .parallel(parallel)
            .build()
    };

    let start = Instant::now();
    let sequential = build(false)?.smooth(signal)?;
    println!("Sequential: {:?}", start.elapsed());

    let start = Instant::now();
    let parallel = build(true)?.smooth(signal)?;
    println!("Parallel:   {:?}", start.elapsed());

    println!("Identical:  {}", sequential.y == parallel.y);
    println!();
    Ok(())
}

/// Example 3: Chunked Streaming
fn example_3_streaming(signal: &[f64], window: &[f64], sum: f64) -> Result<(), WinavgError> {
    println!("Example 3: Chunked Streaming");
    println!("{}", "-".repeat(80));

    let mut processor = Winavg::new()
        .window(window)
        .normalization(sum)
        .boundary_policy(Extend)
        .chunk_size(4096)
        .adapter(Streaming)
        .build()?;

    let mut streamed = Vec::with_capacity(signal.len());
    for chunk in signal.chunks(4096) {
        let out = processor.process_chunk(chunk)?;
        streamed.extend_from_slice(&out.y);
    }
    streamed.extend_from_slice(&processor.finalize()?.y);

    let batch = Winavg::new()
        .window(window)
        .normalization(sum)
        .boundary_policy(Extend)
        .adapter(Batch)
        .build()?
        .smooth(signal)?;

    println!("Streamed {} values", streamed.len());
    println!("Matches batch: {}", streamed == batch.y);
    println!();
    Ok(())
}

/// Example 4: ndarray Integration
fn example_4_ndarray(window: &[f64], sum: f64) -> Result<(), WinavgError> {
    println!("Example 4: ndarray Integration");
    println!("{}", "-".repeat(80));

    let input = Array1::from_vec((0..20).map(|i| if i == 10 { 1.0 } else { 0.0 }).collect());

    let model = Winavg::new()
        .window(window)
        .normalization(sum)
        .adapter(Batch)
        .build()?;

    // An impulse reproduces the normalized window
    let result = model.smooth(&input)?;
    println!("{}", result);
    Ok(())
}
