#![cfg(feature = "cpu")]
//! Consistency tests for parallel execution.
//!
//! Output positions are independent, so the parallel pass, the sequential
//! pass, and any other evaluation order must produce bit-identical arrays.
//!
//! ## Test Organization
//!
//! 1. **Parallel vs Sequential** - Batch results for every policy
//! 2. **Evaluation Order** - Shuffled per-index evaluation
//! 3. **Thread Counts** - Results independent of pool size
//! 4. **Streaming and Inputs** - Parallel streaming, ndarray

use approx::assert_relative_eq;
use ndarray::{Array1, s};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use fastWinavg::prelude::*;
use winavg::internals::algorithms::convolution::ConvolutionContext;
use winavg::internals::primitives::window::ConvWindow as CoreWindow;

const ALL_POLICIES: [BoundaryPolicy; 4] = [Zero, Extend, Reflect, Renormalize];

fn random_signal(seed: u64, n: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(-100.0..100.0)).collect()
}

fn gaussian_window(sigma: f64) -> (Vec<f64>, f64) {
    let radius = (3.0 * sigma).ceil() as i64;
    let weights: Vec<f64> = (-radius..=radius)
        .map(|k| (-((k * k) as f64) / (2.0 * sigma * sigma)).exp())
        .collect();
    let sum = weights.iter().sum();
    (weights, sum)
}

fn smooth(
    input: &[f64],
    window: &[f64],
    sum: f64,
    policy: BoundaryPolicy,
    parallel: bool,
    passes: usize,
) -> Vec<f64> {
    Winavg::new()
        .window(window)
        .normalization(sum)
        .boundary_policy(policy)
        .passes(passes)
        .adapter(Batch)
        .parallel(parallel)
        .build()
        .unwrap()
        .smooth(input)
        .unwrap()
        .y
}

// ============================================================================
// Parallel vs Sequential Tests
// ============================================================================

#[test]
fn test_parallel_matches_sequential() {
    let input = random_signal(7, 20_000);
    let (window, sum) = gaussian_window(3.0);

    for policy in ALL_POLICIES {
        let sequential = smooth(&input, &window, sum, policy, false, 1);
        let parallel = smooth(&input, &window, sum, policy, true, 1);
        assert_eq!(parallel, sequential, "policy {:?}", policy);
    }
}

#[test]
fn test_parallel_multi_pass_matches_sequential() {
    let input = random_signal(11, 8_192);
    let window = [1.0, 4.0, 6.0, 4.0, 1.0];

    for policy in ALL_POLICIES {
        let sequential = smooth(&input, &window, 16.0, policy, false, 4);
        let parallel = smooth(&input, &window, 16.0, policy, true, 4);
        assert_eq!(parallel, sequential, "policy {:?}", policy);
    }
}

#[test]
fn test_parallel_is_default() {
    let input = random_signal(3, 5_000);
    let window = [1.0, 2.0, 1.0];

    let default = Winavg::new()
        .window(&window)
        .normalization(4.0)
        .adapter(Batch)
        .build()
        .unwrap()
        .smooth(&input)
        .unwrap();

    assert_eq!(default.y, smooth(&input, &window, 4.0, Zero, false, 1));
}

// ============================================================================
// Evaluation Order Tests
// ============================================================================

/// Computing positions in a shuffled order yields the sequential array.
#[test]
fn test_shuffled_evaluation_order() {
    let mut rng = StdRng::seed_from_u64(2024);
    let input = random_signal(5, 500);
    let window = CoreWindow::new(vec![0.5, 1.0, 3.0, 1.0, 0.5, 0.25, 0.75]).unwrap();

    for policy in ALL_POLICIES {
        let ctx = ConvolutionContext::new(&input, &window, 7.0, policy);

        let mut reference = vec![0.0; input.len()];
        ctx.convolve_range(0, &mut reference);

        let mut order: Vec<usize> = (0..input.len()).collect();
        order.shuffle(&mut rng);

        let mut shuffled = vec![f64::NAN; input.len()];
        for &i in &order {
            shuffled[i] = ctx.value_at(i);
        }

        assert_eq!(shuffled, reference, "policy {:?}", policy);
    }
}

// ============================================================================
// Thread Count Tests
// ============================================================================

#[test]
fn test_thread_count_independence() {
    let input = random_signal(13, 30_000);
    let (window, sum) = gaussian_window(2.0);
    let reference = smooth(&input, &window, sum, Reflect, false, 2);

    for threads in [1, 2, 3, 8] {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .unwrap();
        let out = pool.install(|| smooth(&input, &window, sum, Reflect, true, 2));
        assert_eq!(out, reference, "threads {}", threads);
    }
}

// ============================================================================
// Streaming and Input Tests
// ============================================================================

#[test]
fn test_parallel_streaming_matches_batch() {
    let input = random_signal(17, 12_345);
    let (window, sum) = gaussian_window(4.0);

    for policy in ALL_POLICIES {
        let mut processor = Winavg::new()
            .window(&window)
            .normalization(sum)
            .boundary_policy(policy)
            .adapter(Streaming)
            .build()
            .unwrap();

        let mut streamed = Vec::with_capacity(input.len());
        for chunk in input.chunks(3_000) {
            streamed.extend(processor.process_chunk(chunk).unwrap().y);
        }
        streamed.extend(processor.finalize().unwrap().y);

        let expected = smooth(&input, &window, sum, policy, false, 1);
        assert_eq!(streamed, expected, "policy {:?}", policy);
    }
}

#[test]
fn test_parallel_streaming_rejects_multiple_passes() {
    let err = Winavg::new()
        .window(&[1.0])
        .normalization(1.0)
        .passes(3)
        .adapter(Streaming)
        .build()
        .unwrap_err();

    assert!(matches!(err, WinavgError::UnsupportedFeature { .. }));
}

#[test]
fn test_prelude_names_processor_types() {
    let batch: ParallelBatchWinavg<f64> = Winavg::new()
        .window(&[1.0, 2.0, 1.0])
        .normalization(4.0)
        .adapter(Batch)
        .build()
        .unwrap();

    let mut streaming: ParallelStreamingWinavg<f64> = Winavg::new()
        .window(&[1.0, 2.0, 1.0])
        .normalization(4.0)
        .adapter(Streaming)
        .build()
        .unwrap();

    let input = random_signal(23, 64);
    let mut streamed = streaming.process_chunk(&input).unwrap().y;
    streamed.extend(streaming.finalize().unwrap().y);
    assert_eq!(streamed, batch.smooth(&input).unwrap().y);
}

#[test]
fn test_ndarray_input() {
    let data = random_signal(19, 2_000);
    let array = Array1::from_vec(data.clone());
    let window = [1.0, 1.0, 1.0];

    let model = Winavg::new()
        .window(&window)
        .normalization(3.0)
        .boundary_policy(Renormalize)
        .adapter(Batch)
        .build()
        .unwrap();

    let from_array = model.smooth(&array).unwrap();
    let from_vec = model.smooth(&data).unwrap();
    let from_slice = model.smooth(data.as_slice()).unwrap();
    assert_eq!(from_array.y, from_vec.y);
    assert_eq!(from_slice.y, from_vec.y);

    // Strided views are not contiguous.
    let strided = array.slice(s![..;2]);
    assert!(matches!(
        model.smooth(&strided),
        Err(WinavgError::InvalidInput(_))
    ));
}

#[test]
fn test_parallel_constant_signal() {
    let input = vec![42.0; 10_000];
    let (window, sum) = gaussian_window(5.0);

    for policy in [Extend, Reflect, Renormalize] {
        for v in smooth(&input, &window, sum, policy, true, 1) {
            assert_relative_eq!(v, 42.0, epsilon = 1e-9);
        }
    }
}
