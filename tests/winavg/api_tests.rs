//! Tests for the public API.
//!
//! These tests only use the prelude, exactly as a downstream crate would.
//!
//! ## Test Organization
//!
//! 1. **Core Properties** - Interior sums, identity, moving average
//! 2. **Passes** - Chained passes
//! 3. **Outputs** - Residuals, metadata, Display
//! 4. **Precision** - f32 support

use approx::{assert_abs_diff_eq, assert_relative_eq};
use winavg::prelude::*;

fn ramp_sin(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 0.1 * i as f64 + (i as f64 * 0.9).sin())
        .collect()
}

// ============================================================================
// Core Property Tests
// ============================================================================

/// Interior positions equal the direct weighted sum divided by the normalization.
#[test]
fn test_interior_matches_weighted_sum() {
    let input = ramp_sin(40);
    let window = [0.1, 0.4, 1.0, 2.0, 1.0, 0.4, 0.1];
    let sum = 5.0;
    let w = 3;

    let result = Winavg::new()
        .window(&window)
        .normalization(sum)
        .adapter(Batch)
        .build()
        .unwrap()
        .smooth(&input)
        .unwrap();

    for i in w..input.len() - w {
        let expected: f64 = window
            .iter()
            .enumerate()
            .map(|(k, &wk)| wk * input[i + k - w])
            .sum::<f64>()
            / sum;
        assert_relative_eq!(result.y[i], expected, epsilon = 1e-12);
    }
}

/// Re-running the same invocation gives bit-identical output.
#[test]
fn test_rerun_is_bit_identical() {
    let input = ramp_sin(257);
    let model = Winavg::new()
        .window(&[1.0, 4.0, 6.0, 4.0, 1.0])
        .normalization(16.0)
        .boundary_policy(Reflect)
        .passes(3)
        .adapter(Batch)
        .build()
        .unwrap();

    let first = model.smooth(&input).unwrap();
    let second = model.smooth(&input).unwrap();
    assert_eq!(first, second);
}

/// A single unit weight with normalization 1 is the identity, for every policy.
#[test]
fn test_unit_window_is_identity() {
    let input = ramp_sin(17);

    for policy in [Zero, Extend, Reflect, Renormalize] {
        let result = Winavg::new()
            .window(&[1.0])
            .normalization(1.0)
            .boundary_policy(policy)
            .adapter(Batch)
            .build()
            .unwrap()
            .smooth(&input)
            .unwrap();

        assert_eq!(result.y, input, "policy {:?}", policy);
    }
}

/// A uniform window is the simple moving average.
#[test]
fn test_uniform_window_is_moving_average() {
    let input = ramp_sin(64);
    let w = 4;
    let len = 2 * w + 1;

    let result = Winavg::new()
        .window(&vec![1.0; len])
        .normalization(len as f64)
        .adapter(Batch)
        .build()
        .unwrap()
        .smooth(&input)
        .unwrap();

    for i in w..input.len() - w {
        let mut acc = 0.0;
        for j in i - w..=i + w {
            acc += input[j];
        }
        assert_relative_eq!(result.y[i], acc / len as f64, epsilon = 1e-12);
    }
}

#[test]
fn test_default_policy_is_zero() {
    let input = vec![5.0; 6];

    let result = Winavg::new()
        .window(&[1.0, 1.0, 1.0])
        .normalization(3.0)
        .adapter(Batch)
        .build()
        .unwrap()
        .smooth(&input)
        .unwrap();

    assert_eq!(result.boundary_policy, Zero);
    assert_relative_eq!(result.y[0], 10.0 / 3.0);
    assert_relative_eq!(result.y[5], 10.0 / 3.0);
    assert_relative_eq!(result.y[2], 5.0);
}

#[test]
fn test_single_sample_signal() {
    for policy in [Zero, Extend, Reflect, Renormalize] {
        let result = Winavg::new()
            .window(&[1.0, 2.0, 1.0])
            .normalization(4.0)
            .boundary_policy(policy)
            .adapter(Batch)
            .build()
            .unwrap()
            .smooth(&[8.0])
            .unwrap();

        let expected = match policy {
            Zero => 4.0,
            _ => 8.0,
        };
        assert_relative_eq!(result.y[0], expected, epsilon = 1e-12);
    }
}

// ============================================================================
// Pass Tests
// ============================================================================

#[test]
fn test_two_passes_equal_repeated_smoothing() {
    let input = ramp_sin(50);
    let build = |passes: usize| {
        Winavg::new()
            .window(&[1.0, 2.0, 1.0])
            .normalization(4.0)
            .boundary_policy(Extend)
            .passes(passes)
            .adapter(Batch)
            .build()
            .unwrap()
    };

    let once = build(1);
    let twice = build(2).smooth(&input).unwrap();
    let manual = once.smooth(&once.smooth(&input).unwrap().y).unwrap();

    assert_eq!(twice.passes_used, 2);
    assert_eq!(twice.y, manual.y);
}

#[test]
fn test_passes_preserve_constant_signal() {
    let input = vec![3.0; 30];

    let result = Winavg::new()
        .window(&[1.0, 2.0, 3.0, 2.0, 1.0])
        .normalization(9.0)
        .boundary_policy(Extend)
        .passes(10)
        .adapter(Batch)
        .build()
        .unwrap()
        .smooth(&input)
        .unwrap();

    for v in result.y {
        assert_abs_diff_eq!(v, 3.0, epsilon = 1e-12);
    }
}

// ============================================================================
// Output Tests
// ============================================================================

#[test]
fn test_residuals_and_metadata() {
    let input = vec![1.0, 5.0, 2.0, 8.0, 3.0];

    let result = Winavg::new()
        .window(&[1.0, 1.0, 1.0])
        .normalization(3.0)
        .boundary_policy(Renormalize)
        .return_residuals()
        .adapter(Batch)
        .build()
        .unwrap()
        .smooth(&input)
        .unwrap();

    let residuals = result.residuals.as_ref().unwrap();
    for i in 0..input.len() {
        assert_eq!(residuals[i], input[i] - result.y[i]);
    }

    assert_eq!(result.start_index, 0);
    assert_eq!(result.window_radius, 1);
    assert_eq!(result.normalization, 3.0);
    assert_eq!(result.boundary_policy, Renormalize);
    assert_eq!(result.passes_used, 1);
    assert_eq!(result.indices(), 0..5);
}

#[test]
fn test_residuals_absent_by_default() {
    let result = Winavg::new()
        .window(&[1.0])
        .normalization(1.0)
        .adapter(Batch)
        .build()
        .unwrap()
        .smooth(&[1.0, 2.0])
        .unwrap();

    assert!(!result.has_residuals());
}

#[test]
fn test_display_output() {
    let result = Winavg::new()
        .window(&[1.0, 2.0, 1.0])
        .normalization(4.0)
        .boundary_policy(Reflect)
        .return_residuals()
        .adapter(Batch)
        .build()
        .unwrap()
        .smooth(&[1.0, 2.0, 3.0])
        .unwrap();

    let text = format!("{}", result);
    assert!(text.contains("Data points: 3"));
    assert!(text.contains("Boundary:    Reflect"));
    assert!(text.contains("Residual"));
}

#[test]
fn test_processor_exposes_window() {
    let model = Winavg::new()
        .window(&[1.0, 2.0, 3.0, 2.0, 1.0])
        .normalization(9.0)
        .adapter(Batch)
        .build()
        .unwrap();

    let window: &ConvWindow<f64> = model.window();
    assert_eq!(window.radius(), 2);
    assert_eq!(window.len(), 5);
    assert_eq!(window.total_weight(), 9.0);
}

#[test]
fn test_prelude_names_processor_types() {
    let model: BatchWinavg<f64> = Winavg::new()
        .window(&[1.0])
        .normalization(1.0)
        .adapter(Batch)
        .build()
        .unwrap();
    let mut processor: StreamingWinavg<f64> = Winavg::new()
        .window(&[1.0])
        .normalization(1.0)
        .adapter(Streaming)
        .build()
        .unwrap();

    let input = [1.0, 2.0, 3.0];
    assert_eq!(processor.process_chunk(&input).unwrap().y, model.smooth(&input).unwrap().y);
}

// ============================================================================
// Precision Tests
// ============================================================================

#[test]
fn test_f32_support() {
    let input: Vec<f32> = (0..20).map(|i| i as f32).collect();

    let result = Winavg::new()
        .window(&[1.0f32, 2.0, 1.0])
        .normalization(4.0f32)
        .boundary_policy(Extend)
        .adapter(Batch)
        .build()
        .unwrap()
        .smooth(&input)
        .unwrap();

    // A linear ramp is reproduced away from the clamped edges.
    for i in 1..19 {
        assert_relative_eq!(result.y[i], i as f32, epsilon = 1e-5);
    }
    assert_relative_eq!(result.y[0], 0.25f32, epsilon = 1e-6);
}
