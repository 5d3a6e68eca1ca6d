#![cfg(feature = "dev")]
//! Tests for boundary policies and index resolution.
//!
//! ## Test Organization
//!
//! 1. **Index Resolution** - `resolve_index` for each policy
//! 2. **Edge Values** - Hand-computed outputs at both ends of the signal
//! 3. **Symmetry** - Both edges are treated alike

use approx::assert_relative_eq;

use winavg::internals::algorithms::convolution::ConvolutionContext;
use winavg::internals::api::{Adapter, BoundaryPolicy, WinavgBuilder as Winavg};
use winavg::internals::math::boundary::resolve_index;
use winavg::internals::primitives::window::ConvWindow;

const ALL_POLICIES: [BoundaryPolicy; 4] = [
    BoundaryPolicy::Zero,
    BoundaryPolicy::Extend,
    BoundaryPolicy::Reflect,
    BoundaryPolicy::Renormalize,
];

fn smooth(input: &[f64], window: &[f64], sum: f64, policy: BoundaryPolicy) -> Vec<f64> {
    Winavg::new()
        .window(window)
        .normalization(sum)
        .boundary_policy(policy)
        .adapter(Adapter::Batch)
        .build()
        .unwrap()
        .smooth(input)
        .unwrap()
        .y
}

// ============================================================================
// Index Resolution Tests
// ============================================================================

#[test]
fn test_resolve_index_out_of_range() {
    let n = 10;

    assert_eq!(resolve_index(BoundaryPolicy::Zero, -1, n), None);
    assert_eq!(resolve_index(BoundaryPolicy::Zero, 10, n), None);
    assert_eq!(resolve_index(BoundaryPolicy::Renormalize, -2, n), None);
    assert_eq!(resolve_index(BoundaryPolicy::Renormalize, 11, n), None);

    assert_eq!(resolve_index(BoundaryPolicy::Extend, -2, n), Some(0));
    assert_eq!(resolve_index(BoundaryPolicy::Extend, 11, n), Some(9));

    assert_eq!(resolve_index(BoundaryPolicy::Reflect, -1, n), Some(1));
    assert_eq!(resolve_index(BoundaryPolicy::Reflect, -2, n), Some(2));
    assert_eq!(resolve_index(BoundaryPolicy::Reflect, 10, n), Some(8));
    assert_eq!(resolve_index(BoundaryPolicy::Reflect, 11, n), Some(7));
}

#[test]
fn test_reflect_single_sample() {
    for j in -5..=5 {
        assert_eq!(resolve_index(BoundaryPolicy::Reflect, j, 1), Some(0));
    }
}

#[test]
fn test_resolved_index_always_in_range() {
    for policy in ALL_POLICIES {
        for n in 1..8usize {
            for j in -20..20isize {
                if let Some(idx) = resolve_index(policy, j, n) {
                    assert!(idx < n, "{:?}: j={} n={} -> {}", policy, j, n, idx);
                }
            }
        }
    }
}

// ============================================================================
// Edge Value Tests
// ============================================================================

/// N=10, W=2, window of ones with sum 5 over the ramp `0..10`.
#[test]
fn test_edge_values_per_policy() {
    let input: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let window = [1.0; 5];

    let zero = smooth(&input, &window, 5.0, BoundaryPolicy::Zero);
    assert_relative_eq!(zero[0], 3.0 / 5.0);
    assert_relative_eq!(zero[9], 24.0 / 5.0);

    let extend = smooth(&input, &window, 5.0, BoundaryPolicy::Extend);
    assert_relative_eq!(extend[0], 3.0 / 5.0);
    assert_relative_eq!(extend[9], 42.0 / 5.0);

    let reflect = smooth(&input, &window, 5.0, BoundaryPolicy::Reflect);
    assert_relative_eq!(reflect[0], 6.0 / 5.0);
    assert_relative_eq!(reflect[9], 39.0 / 5.0);

    let renorm = smooth(&input, &window, 5.0, BoundaryPolicy::Renormalize);
    assert_relative_eq!(renorm[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(renorm[9], 8.0, epsilon = 1e-12);

    // Interior positions do not depend on the policy.
    for i in 2..8 {
        assert_eq!(zero[i], extend[i]);
        assert_eq!(zero[i], reflect[i]);
        assert_eq!(zero[i], renorm[i]);
    }
}

#[test]
fn test_policies_differ_at_edges() {
    let input = vec![10.0, 20.0, 10.0, 20.0, 10.0, 20.0];
    let window = [1.0, 1.0, 1.0];

    let zero = smooth(&input, &window, 3.0, BoundaryPolicy::Zero);
    let extend = smooth(&input, &window, 3.0, BoundaryPolicy::Extend);
    let reflect = smooth(&input, &window, 3.0, BoundaryPolicy::Reflect);

    assert_ne!(zero[0], extend[0], "Zero vs Extend at edge");
    assert_ne!(extend[0], reflect[0], "Extend vs Reflect at edge");
    assert_ne!(zero[0], reflect[0], "Zero vs Reflect at edge");
}

#[test]
fn test_renormalize_constant_signal() {
    let input = vec![2.5; 9];
    let window = [1.0, 3.0, 5.0, 7.0, 5.0, 3.0, 1.0];

    let out = smooth(&input, &window, 25.0, BoundaryPolicy::Renormalize);
    for v in out {
        assert_relative_eq!(v, 2.5, epsilon = 1e-12);
    }
}

#[test]
fn test_renormalize_with_custom_scale() {
    // The divisor is the normalization scaled by the applied weight share,
    // so a non-unit gain survives at the edges.
    let input = vec![1.0; 6];
    let window = [1.0, 1.0, 1.0];

    let out = smooth(&input, &window, 1.5, BoundaryPolicy::Renormalize);
    for v in out {
        assert_relative_eq!(v, 2.0, epsilon = 1e-12);
    }
}

#[test]
fn test_renormalize_near_zero_applied_weight() {
    // At both edges the applied weights cancel to ~1e-16; the full
    // normalization is used instead of dividing by that remainder.
    let input = [1.0, 2.0, 3.0];
    let window = [1.0, -0.9999999999999999, 1.0];

    let out = smooth(&input, &window, 1.0, BoundaryPolicy::Renormalize);
    assert!(out.iter().all(|v| v.is_finite()));
    assert_relative_eq!(out[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(out[1], 2.0, epsilon = 1e-12);
    assert_relative_eq!(out[2], -1.0, epsilon = 1e-12);
}

#[test]
fn test_window_wider_than_signal_reflect() {
    // n = 3, W = 3: reads at -3..=3 around index 0 fold to [1, 2, 1, 0, 1, 2, 1].
    let input = [1.0, 10.0, 100.0];
    let window = ConvWindow::new(vec![1.0; 7]).unwrap();
    let ctx = ConvolutionContext::new(&input, &window, 7.0, BoundaryPolicy::Reflect);

    let expected = 10.0 + 100.0 + 10.0 + 1.0 + 10.0 + 100.0 + 10.0;
    assert_relative_eq!(ctx.value_at(0), expected / 7.0);
}

#[test]
fn test_window_orientation() {
    // An impulse at index 5 reproduces the window reversed around it.
    let mut input = vec![0.0; 11];
    input[5] = 1.0;
    let window = [1.0, 2.0, 3.0, 4.0, 5.0];

    let out = smooth(&input, &window, 1.0, BoundaryPolicy::Zero);
    assert_eq!(&out[3..=7], &[5.0, 4.0, 3.0, 2.0, 1.0]);
    assert!(out[..3].iter().chain(&out[8..]).all(|&v| v == 0.0));
}

// ============================================================================
// Symmetry Tests
// ============================================================================

/// N=10, W=2, ones/5: a mirror-symmetric signal gives a mirror-symmetric output.
#[test]
fn test_edges_treated_symmetrically() {
    let input = vec![1.0, 2.0, 3.0, 4.0, 5.0, 5.0, 4.0, 3.0, 2.0, 1.0];
    let window = [1.0; 5];

    for policy in ALL_POLICIES {
        let out = smooth(&input, &window, 5.0, policy);
        for i in 0..out.len() {
            assert_relative_eq!(out[i], out[9 - i], epsilon = 1e-12);
        }
    }
}

/// Reversing the signal and the window reverses the output.
#[test]
fn test_reversal_equivariance() {
    let input: Vec<f64> = (0..13).map(|i| ((i * i) % 7) as f64 - 2.5).collect();
    let window = [0.5, 1.0, 3.0, 2.0, 0.25];

    let mut rev_input = input.clone();
    rev_input.reverse();
    let mut rev_window = window;
    rev_window.reverse();

    for policy in ALL_POLICIES {
        let forward = smooth(&input, &window, 6.75, policy);
        let backward = smooth(&rev_input, &rev_window, 6.75, policy);
        for i in 0..input.len() {
            assert_relative_eq!(forward[i], backward[input.len() - 1 - i], epsilon = 1e-12);
        }
    }
}
