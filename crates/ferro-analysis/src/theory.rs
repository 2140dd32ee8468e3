//! Closed-form mean-field magnetization, used as the theory overlay
//! for simulated sweeps.
//!
//! Mean-field theory reduces the lattice to one self-consistency
//! equation, `m = tanh(J z m / kT)`. Substituting `x = J z m / kT`
//! turns it into `tanh(x) = a x` with `a = kT / (J z)`; the
//! magnetization is then `a x` at the root. For `a > 1` only the
//! trivial root exists and the magnetization is zero, which puts the
//! critical temperature at `T_c = J z / k`.

use crate::series::linspace;
use ferro_core::{PhysicalConstants, LATTICE_COORDINATION};

/// Newton starting point for the nonzero root of `tanh(x) = a x`.
const INITIAL_GUESS: f64 = 3.0;
/// Residual bound on `tanh(x) - a x` at which the root is accepted.
const RESIDUAL_TOLERANCE: f64 = 1.0e-4;
/// Iteration cap; Newton needs far fewer steps from the fixed guess.
const MAX_ITERATIONS: usize = 128;
/// Bound on the iterate. Past this point `tanh` saturated long ago and
/// a larger `x` carries no information, but an unbounded iterate could
/// overflow `a * x`.
const MAX_ROOT: f64 = 1.0e12;

/// Solve `tanh(x) = a x` and return the magnetization `a x` at the root.
///
/// For `a > 1` the equation has only the trivial root, and exactly
/// `0.0` is returned without iterating. Otherwise Newton's method runs
/// from a fixed positive guess until the residual drops below `1e-4`.
/// The equation is odd, so a negative iterate is reflected to its
/// mirror image, landing the iteration on the non-negative
/// spontaneous-magnetization branch; the result is clamped at zero so
/// degenerate ratios (`a <= 0`) cannot leak a negative value.
pub fn find_mean_field_solution(a: f64) -> f64 {
    if a > 1.0 {
        return 0.0;
    }
    let mut x = INITIAL_GUESS;
    for _ in 0..MAX_ITERATIONS {
        let residual = x.tanh() - a * x;
        if residual.abs() < RESIDUAL_TOLERANCE {
            break;
        }
        let derivative = 1.0 - x.tanh().powi(2) - a;
        x -= residual / derivative;
        if !(x.abs() <= MAX_ROOT) {
            x = MAX_ROOT;
            continue;
        }
        if x < 0.0 {
            x = -x;
        }
    }
    (a * x).max(0.0)
}

/// Mean-field magnetization at `temperature` for the given constants.
///
/// Computes `a = kT / (J z)` with `z` the square-lattice coordination
/// number and delegates to [`find_mean_field_solution`].
pub fn mean_field_magnetization(temperature: f64, constants: &PhysicalConstants) -> f64 {
    let a = constants.boltzmann * temperature / (constants.coupling * LATTICE_COORDINATION);
    find_mean_field_solution(a)
}

/// Mean-field critical temperature `J z / k`.
///
/// Above this temperature [`mean_field_magnetization`] is exactly zero.
/// Meaningful for ferromagnetic coupling (`J > 0`).
pub fn critical_temperature(constants: &PhysicalConstants) -> f64 {
    constants.coupling * LATTICE_COORDINATION / constants.boltzmann
}

/// Tabulate the mean-field magnetization over `[t_start, t_stop]`.
///
/// Returns `(temperature, magnetization)` pairs suitable for a chart
/// overlay next to simulated sweep points.
pub fn magnetization_curve(
    t_start: f64,
    t_stop: f64,
    samples: usize,
    constants: &PhysicalConstants,
) -> Vec<(f64, f64)> {
    linspace(t_start, t_stop, samples)
        .into_iter()
        .map(|t| (t, mean_field_magnetization(t, constants)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn supercritical_ratio_is_exactly_zero() {
        assert_eq!(find_mean_field_solution(1.000001), 0.0);
        assert_eq!(find_mean_field_solution(2.0), 0.0);
        assert_eq!(find_mean_field_solution(100.0), 0.0);
    }

    #[test]
    fn subcritical_root_satisfies_the_equation() {
        for a in [0.1, 0.3, 0.5, 0.7, 0.9] {
            let m = find_mean_field_solution(a);
            assert!(m > 0.0, "a = {a}: magnetization should be positive");
            assert!(m <= 1.0 + 1.0e-9, "a = {a}: magnetization {m} above 1");
            let x = m / a;
            let residual = (x.tanh() - a * x).abs();
            assert!(
                residual < RESIDUAL_TOLERANCE,
                "a = {a}: residual {residual}"
            );
        }
    }

    #[test]
    fn degenerate_ratios_clamp_to_zero() {
        assert_eq!(find_mean_field_solution(0.0), 0.0);
        assert_eq!(find_mean_field_solution(-0.5), 0.0);
    }

    #[test]
    fn known_root_at_half_ratio() {
        // tanh(x) = 0.5 x has its nonzero root near x = 1.915, giving
        // a magnetization of about 0.957.
        let m = find_mean_field_solution(0.5);
        assert!((m - 0.9575).abs() < 5.0e-3, "got {m}");
    }

    #[test]
    fn deep_subcritical_saturates_to_unity() {
        let m = find_mean_field_solution(0.01);
        assert!(m > 0.999, "got {m}");
    }

    #[test]
    fn critical_temperature_in_natural_units_is_four() {
        let constants = PhysicalConstants::default();
        assert_eq!(critical_temperature(&constants), 4.0);
    }

    #[test]
    fn critical_temperature_scales_with_constants() {
        let constants = PhysicalConstants {
            coupling: 2.0,
            boltzmann: 0.5,
        };
        assert_eq!(critical_temperature(&constants), 16.0);
    }

    #[test]
    fn magnetization_vanishes_above_critical_temperature() {
        let constants = PhysicalConstants::default();
        assert_eq!(mean_field_magnetization(4.01, &constants), 0.0);
        assert_eq!(mean_field_magnetization(100.0, &constants), 0.0);
    }

    #[test]
    fn magnetization_is_strong_well_below_critical() {
        let constants = PhysicalConstants::default();
        let m = mean_field_magnetization(2.0, &constants);
        assert!(m > 0.9, "got {m}");
    }

    #[test]
    fn curve_spans_the_requested_window() {
        let constants = PhysicalConstants::default();
        let curve = magnetization_curve(0.1, 5.0, 200, &constants);
        assert_eq!(curve.len(), 200);
        assert!((curve[0].0 - 0.1).abs() < 1.0e-12);
        assert!((curve[199].0 - 5.0).abs() < 1.0e-12);
        // Ordered phase at the cold end, none at the hot end.
        assert!(curve[0].1 > 0.99);
        assert_eq!(curve[199].1, 0.0);
        assert!(curve
            .iter()
            .all(|&(_, m)| (0.0..=1.0 + 1.0e-9).contains(&m)));
    }

    proptest! {
        #[test]
        fn subcritical_magnetization_in_unit_interval(a in 0.001f64..0.999) {
            let m = find_mean_field_solution(a);
            prop_assert!(m > 0.0);
            prop_assert!(m <= 1.0 + 1.0e-9);
        }

        #[test]
        fn supercritical_magnetization_is_zero(a in 1.0001f64..50.0) {
            prop_assert_eq!(find_mean_field_solution(a), 0.0);
        }
    }
}
