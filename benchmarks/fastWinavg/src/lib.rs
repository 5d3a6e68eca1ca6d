//! Reproducible signals and windows for the fastWinavg benchmarks.

use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::f64::consts::PI;

// ============================================================================
// Windows
// ============================================================================

/// Truncated Gaussian window with radius `ceil(3 * sigma)` and its weight sum.
pub fn gaussian_window(sigma: f64) -> (Vec<f64>, f64) {
    let radius = (3.0 * sigma).ceil() as i64;
    let weights: Vec<f64> = (-radius..=radius)
        .map(|k| (-((k * k) as f64) / (2.0 * sigma * sigma)).exp())
        .collect();
    let sum = weights.iter().sum();
    (weights, sum)
}

/// Uniform (box) window of radius `w`.
pub fn box_window(w: usize) -> (Vec<f64>, f64) {
    let len = 2 * w + 1;
    (vec![1.0; len], len as f64)
}

// ============================================================================
// Signals
// ============================================================================

/// Sine wave with Gaussian noise.
pub fn noisy_sine(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 0.2).unwrap();

    (0..size)
        .map(|i| {
            let t = i as f64 * 10.0 / size as f64;
            (2.0 * PI * t).sin() + noise.sample(&mut rng)
        })
        .collect()
}

/// Random walk (price-like series).
pub fn random_walk(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let steps = Normal::new(0.0005, 0.02).unwrap();

    let mut level = 100.0;
    (0..size)
        .map(|_| {
            level *= 1.0 + steps.sample(&mut rng);
            level
        })
        .collect()
}

/// Smooth baseline with sparse spikes (5% of samples).
pub fn spiky(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let spike = Uniform::new(-50.0, 50.0).unwrap();

    let mut y: Vec<f64> = (0..size).map(|i| (i as f64 * 0.01).cos()).collect();
    for _ in 0..size / 20 {
        let idx = rng.random_range(0..size);
        y[idx] += spike.sample(&mut rng);
    }
    y
}
